//! Epsilon-closure and single-symbol steps.

use super::{Automaton, StateId, StateSet, Symbol};

impl Automaton {
    /// Smallest superset of `states` closed under epsilon transitions.
    ///
    /// Worklist fixpoint: only states discovered in the previous round are
    /// expanded, so every transition is looked at once per call. Epsilon
    /// cycles stop growing the closure and end the loop.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = states.clone();
        let mut frontier: Vec<StateId> = states.iter().copied().collect();

        while !frontier.is_empty() {
            let mut discovered = Vec::new();
            for &state in &frontier {
                for target in self.successors(state, Symbol::Epsilon) {
                    if closure.insert(target) {
                        discovered.push(target);
                    }
                }
            }
            frontier = discovered;
        }

        closure
    }

    /// Epsilon-closure of the initial state.
    pub fn initial_closure(&self) -> StateSet {
        self.epsilon_closure(&StateSet::from([self.initial]))
    }

    /// States reachable from `states` through one transition labeled exactly
    /// `symbol`. Not epsilon-closed.
    pub fn step(&self, states: &StateSet, symbol: char) -> StateSet {
        states
            .iter()
            .flat_map(|&s| self.successors(s, Symbol::Char(symbol)))
            .collect()
    }

    /// `step` followed by `epsilon_closure`.
    pub fn step_closed(&self, states: &StateSet, symbol: char) -> StateSet {
        self.epsilon_closure(&self.step(states, symbol))
    }
}
