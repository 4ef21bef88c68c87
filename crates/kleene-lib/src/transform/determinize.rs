//! Subset construction.
//!
//! Each DFA state stands for one epsilon-closed set of input states. Only
//! subsets reachable from the initial closure are materialized, so the output
//! is trim. The empty subset, when reached, becomes a non-accepting sink.

use std::collections::{HashSet, VecDeque};

use indexmap::IndexSet;

use crate::automaton::{Automaton, State, StateId, StateSet, Symbol, Transition};

/// Name of the DFA state standing for the empty subset.
pub const EMPTY_SET_NAME: &str = "empty";

impl Automaton {
    /// Equivalent deterministic, total automaton over the same alphabet.
    pub fn to_deterministic(&self) -> Automaton {
        determinize(self)
    }
}

pub fn determinize(nfa: &Automaton) -> Automaton {
    let mut table = SubsetTable::new(nfa);
    let mut worklist = VecDeque::new();
    let mut transitions = Vec::new();

    let (initial, _) = table.intern(nfa.initial_closure());
    worklist.push_back(initial);

    while let Some(current) = worklist.pop_front() {
        for &symbol in nfa.alphabet() {
            let target = nfa.step_closed(table.subset(current), symbol);
            let (target, is_new) = table.intern(target);
            if is_new {
                worklist.push_back(target);
            }
            transitions.push(Transition::new(current, Symbol::Char(symbol), target));
        }
    }

    Automaton::new_unchecked(
        initial,
        table.states,
        nfa.alphabet().clone(),
        transitions,
    )
}

/// Subsets in discovery order; the DFA state id is the position in `subsets`.
struct SubsetTable<'a> {
    nfa: &'a Automaton,
    subsets: IndexSet<StateSet>,
    states: Vec<State>,
    names: HashSet<String>,
}

impl<'a> SubsetTable<'a> {
    fn new(nfa: &'a Automaton) -> Self {
        Self {
            nfa,
            subsets: IndexSet::new(),
            states: Vec::new(),
            names: HashSet::new(),
        }
    }

    /// Id for `subset`, creating the DFA state on first sight.
    fn intern(&mut self, subset: StateSet) -> (StateId, bool) {
        if let Some(index) = self.subsets.get_index_of(&subset) {
            return (StateId::from_index(index), false);
        }

        let name = self.unique_name(subset_name(self.nfa, &subset));
        let is_final = self.nfa.any_final(&subset);
        self.states.push(State::new(name, is_final));
        let (index, _) = self.subsets.insert_full(subset);
        (StateId::from_index(index), true)
    }

    fn subset(&self, id: StateId) -> &StateSet {
        &self.subsets[id.index()]
    }

    /// Distinct subsets may concatenate to the same label; disambiguate with `'`.
    fn unique_name(&mut self, mut name: String) -> String {
        while self.names.contains(&name) {
            name.push('\'');
        }
        self.names.insert(name.clone());
        name
    }
}

/// Member names concatenated in `StateId` order.
fn subset_name(nfa: &Automaton, subset: &StateSet) -> String {
    if subset.is_empty() {
        return EMPTY_SET_NAME.to_string();
    }
    subset.iter().map(|&s| nfa.state(s).name()).collect()
}
