//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use std::collections::HashSet;

use super::{Automaton, Symbol};

impl Automaton {
    /// Panics in debug builds if a transformation produced a malformed automaton.
    pub(super) fn debug_assert_valid(&self) {
        if !cfg!(debug_assertions) {
            return;
        }

        assert!(
            self.initial.index() < self.states.len(),
            "Automaton: initial state {} out of range ({} states)",
            self.initial,
            self.states.len()
        );

        let mut names = HashSet::with_capacity(self.states.len());
        for state in &self.states {
            assert!(
                names.insert(state.name()),
                "Automaton: duplicate state name `{}`",
                state.name()
            );
        }

        for t in &self.transitions {
            assert!(
                t.from.index() < self.states.len() && t.to.index() < self.states.len(),
                "Automaton: transition {} -{}-> {} references unknown state",
                t.from,
                t.symbol,
                t.to
            );
            if let Symbol::Char(c) = t.symbol {
                assert!(
                    self.alphabet.contains(&c),
                    "Automaton: symbol '{c}' missing from alphabet"
                );
            }
        }
    }
}
