//! Unreachable-state elimination.

use super::{Automaton, State, StateId, StateSet, Transition};

impl Automaton {
    /// States reachable from the initial state over any transition,
    /// epsilon included.
    pub fn reachable(&self) -> StateSet {
        let mut visited = StateSet::new();
        let mut stack = vec![self.initial];

        while let Some(state) = stack.pop() {
            if !visited.insert(state) {
                continue;
            }
            for t in self.outgoing(state) {
                if !visited.contains(&t.to) {
                    stack.push(t.to);
                }
            }
        }

        visited
    }

    /// True if every state is reachable from the initial state.
    pub fn is_trim(&self) -> bool {
        self.reachable().len() == self.len()
    }

    /// Copy of the automaton without unreachable states and the transitions
    /// touching them. Survivors keep their names, finality and relative order.
    pub fn trim(&self) -> Automaton {
        let reachable = self.reachable();

        let mut remap: Vec<Option<StateId>> = vec![None; self.len()];
        let mut states: Vec<State> = Vec::with_capacity(reachable.len());
        for &old in &reachable {
            remap[old.index()] = Some(StateId::from_index(states.len()));
            states.push(self.state(old).clone());
        }

        let transitions = self
            .transitions()
            .iter()
            .filter_map(|t| {
                let from = remap[t.from.index()]?;
                let to = remap[t.to.index()]?;
                Some(Transition::new(from, t.symbol, to))
            })
            .collect();

        let initial = remap[self.initial.index()].expect("initial state is always reachable");

        Automaton::new_unchecked(initial, states, self.alphabet().clone(), transitions)
    }
}
