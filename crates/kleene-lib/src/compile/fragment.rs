//! Build-time arena and fragment combinators.
//!
//! Every sub-expression compiles to a [`Fragment`] with exactly one initial
//! and one final state. Combinators take their operand fragments by value, so
//! a fragment can be spliced into a larger one only once.

use std::collections::BTreeSet;

use crate::automaton::{Automaton, State, StateId, Symbol, Transition};

/// Per-build naming context, producing `q0`, `q1`, ...
#[derive(Debug, Default)]
pub struct NameGen {
    next: u32,
}

impl NameGen {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn fresh(&mut self) -> String {
        let name = format!("q{}", self.next);
        self.next += 1;
        name
    }
}

/// A sub-automaton with single entry and exit states.
///
/// Deliberately neither `Copy` nor `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct Fragment {
    pub entry: StateId,
    pub exit: StateId,
}

/// Arena of states and transitions shared by all fragments of one build.
#[derive(Debug, Default)]
pub struct BuildGraph {
    names: NameGen,
    states: Vec<State>,
    transitions: Vec<Transition>,
    alphabet: BTreeSet<char>,
}

impl BuildGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_state(&mut self, is_final: bool) -> StateId {
        let id = StateId::from_index(self.states.len());
        let name = self.names.fresh();
        self.states.push(State::new(name, is_final));
        id
    }

    fn connect(&mut self, from: StateId, symbol: Symbol, to: StateId) {
        self.transitions.push(Transition::new(from, symbol, to));
    }

    fn clear_final(&mut self, id: StateId) {
        self.states[id.index()] = State::new(self.states[id.index()].name(), false);
    }

    /// Two states, no transitions: accepts nothing.
    pub fn empty(&mut self) -> Fragment {
        let entry = self.add_state(false);
        let exit = self.add_state(true);
        Fragment { entry, exit }
    }

    /// One state, both initial and final.
    pub fn epsilon(&mut self) -> Fragment {
        let state = self.add_state(true);
        Fragment {
            entry: state,
            exit: state,
        }
    }

    pub fn symbol(&mut self, c: char) -> Fragment {
        self.alphabet.insert(c);
        let entry = self.add_state(false);
        let exit = self.add_state(true);
        self.connect(entry, Symbol::Char(c), exit);
        Fragment { entry, exit }
    }

    pub fn star(&mut self, inner: Fragment) -> Fragment {
        let entry = self.add_state(false);
        let exit = self.add_state(true);
        self.clear_final(inner.exit);
        self.connect(entry, Symbol::Epsilon, inner.entry);
        self.connect(inner.exit, Symbol::Epsilon, exit);
        self.connect(inner.exit, Symbol::Epsilon, inner.entry);
        self.connect(entry, Symbol::Epsilon, exit);
        Fragment { entry, exit }
    }

    pub fn union(&mut self, lhs: Fragment, rhs: Fragment) -> Fragment {
        let entry = self.add_state(false);
        let exit = self.add_state(true);
        self.clear_final(lhs.exit);
        self.clear_final(rhs.exit);
        self.connect(entry, Symbol::Epsilon, lhs.entry);
        self.connect(entry, Symbol::Epsilon, rhs.entry);
        self.connect(lhs.exit, Symbol::Epsilon, exit);
        self.connect(rhs.exit, Symbol::Epsilon, exit);
        Fragment { entry, exit }
    }

    pub fn concat(&mut self, lhs: Fragment, rhs: Fragment) -> Fragment {
        self.clear_final(lhs.exit);
        self.connect(lhs.exit, Symbol::Epsilon, rhs.entry);
        Fragment {
            entry: lhs.entry,
            exit: rhs.exit,
        }
    }

    /// Seal the arena into an automaton rooted at `fragment`.
    pub fn finish(self, fragment: Fragment) -> Automaton {
        Automaton::new_unchecked(
            fragment.entry,
            self.states,
            self.alphabet,
            self.transitions,
        )
    }
}
