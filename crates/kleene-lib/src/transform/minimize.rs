//! Moore partition refinement.
//!
//! States start in two blocks, non-final then final. Each round gives every
//! state a signature (its block, the blocks of its successors in alphabet
//! order) computed against the previous round's blocks, and renumbers blocks
//! densely in first-seen order. Refinement stops once a round creates no new
//! block.

use indexmap::IndexMap;

use crate::Result;
use crate::automaton::{Automaton, State, StateId, Symbol, Transition};

impl Automaton {
    /// Minimal equivalent DFA.
    ///
    /// Unreachable states are dropped first. The remaining automaton must be
    /// deterministic and total; epsilon self-loops are tolerated and dropped.
    pub fn to_minimized(&self) -> Result<Automaton> {
        minimize(self)
    }
}

pub fn minimize(dfa: &Automaton) -> Result<Automaton> {
    let dfa = without_epsilon_self_loops(&dfa.trim());
    dfa.check_deterministic()?;

    let delta = transition_table(&dfa);
    let (classes, count) = refine(&dfa, &delta);

    // Class ids are dense and numbered in first-seen order over the states.
    let mut representatives: Vec<StateId> = Vec::with_capacity(count);
    for state in dfa.state_ids() {
        if classes[state.index()] == representatives.len() {
            representatives.push(state);
        }
    }

    let mut states = Vec::with_capacity(count);
    let mut transitions = Vec::with_capacity(count * dfa.alphabet().len());
    for (class, &representative) in representatives.iter().enumerate() {
        states.push(State::new(format!("q{class}"), dfa.is_final(representative)));
        let targets = &delta[representative.index()];
        for (&symbol, &target) in dfa.alphabet().iter().zip(targets) {
            transitions.push(Transition::new(
                StateId::from_index(class),
                Symbol::Char(symbol),
                StateId::from_index(classes[target]),
            ));
        }
    }

    let initial = StateId::from_index(classes[dfa.initial().index()]);
    Ok(Automaton::new_unchecked(
        initial,
        states,
        dfa.alphabet().clone(),
        transitions,
    ))
}

/// An epsilon self-loop never changes a closure.
fn without_epsilon_self_loops(automaton: &Automaton) -> Automaton {
    let transitions = automaton
        .transitions()
        .iter()
        .filter(|t| !(t.symbol.is_epsilon() && t.from == t.to))
        .copied()
        .collect();
    Automaton::new_unchecked(
        automaton.initial(),
        automaton.states().to_vec(),
        automaton.alphabet().clone(),
        transitions,
    )
}

/// `delta[state][symbol index]` = target index. The automaton must be a
/// total DFA.
fn transition_table(dfa: &Automaton) -> Vec<Vec<usize>> {
    let mut delta = vec![vec![0; dfa.alphabet().len()]; dfa.len()];
    for t in dfa.transitions() {
        if let Symbol::Char(c) = t.symbol {
            delta[t.from.index()][dfa.symbol_index(c)] = t.to.index();
        }
    }
    delta
}

/// Class id per state, and the number of classes.
fn refine(dfa: &Automaton, delta: &[Vec<usize>]) -> (Vec<usize>, usize) {
    let (mut classes, mut count) = initial_partition(dfa);

    for _ in 0..dfa.len() {
        let mut ids: IndexMap<(usize, Vec<usize>), usize> = IndexMap::new();
        let next: Vec<usize> = (0..dfa.len())
            .map(|state| {
                let successors = delta[state].iter().map(|&t| classes[t]).collect();
                let signature = (classes[state], successors);
                let fresh = ids.len();
                *ids.entry(signature).or_insert(fresh)
            })
            .collect();

        let grew = ids.len() > count;
        classes = next;
        count = ids.len();
        if !grew {
            break;
        }
    }

    (classes, count)
}

/// Non-final states in class 0, final states in the next class. A block with
/// no members takes no id.
fn initial_partition(dfa: &Automaton) -> (Vec<usize>, usize) {
    let has_non_final = dfa.states().iter().any(|s| !s.is_final());
    let has_final = dfa.states().iter().any(|s| s.is_final());
    let final_class = usize::from(has_non_final);

    let classes = dfa
        .states()
        .iter()
        .map(|s| if s.is_final() { final_class } else { 0 })
        .collect();
    let count = usize::from(has_non_final) + usize::from(has_final);
    (classes, count)
}
