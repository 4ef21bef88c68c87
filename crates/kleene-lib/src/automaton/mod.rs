//! Automaton graph model.
//!
//! States live in an arena and are addressed by [`StateId`]. The state name
//! is a display attribute, unique within one automaton, so two states with
//! the same name are the same state. Algorithms never compare names: subset
//! construction keys on [`StateSet`], the minimizer on class ids.
//!
//! Automata are immutable values. Every transformation borrows its input
//! and returns a fresh automaton.

mod closure;
mod error;
mod invariants;
mod trim;

#[cfg(test)]
mod closure_tests;
#[cfg(test)]
mod trim_tests;

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use indexmap::IndexSet;

pub use error::StructureError;

/// Index into the state arena of one [`Automaton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub u32);

impl StateId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered set of states. Ordering makes closures hashable and deterministic.
pub type StateSet = BTreeSet<StateId>;

/// Transition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// Consumes no input.
    Epsilon,
    /// Consumes one alphabet character.
    Char(char),
}

impl Symbol {
    pub fn is_epsilon(self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    pub fn as_char(self) -> Option<char> {
        match self {
            Symbol::Epsilon => None,
            Symbol::Char(c) => Some(c),
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Epsilon => write!(f, "ε"),
            Symbol::Char(c) => write!(f, "{c}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    name: String,
    is_final: bool,
}

impl State {
    pub fn new(name: impl Into<String>, is_final: bool) -> Self {
        Self {
            name: name.into(),
            is_final,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transition {
    pub from: StateId,
    pub symbol: Symbol,
    pub to: StateId,
}

impl Transition {
    pub fn new(from: StateId, symbol: Symbol, to: StateId) -> Self {
        Self { from, symbol, to }
    }

    pub fn epsilon(from: StateId, to: StateId) -> Self {
        Self::new(from, Symbol::Epsilon, to)
    }
}

/// Finite automaton over a finite alphabet of `char`s.
///
/// Invariants (checked by [`Automaton::new`]):
/// - the initial state is in the arena
/// - every transition endpoint is in the arena
/// - every non-epsilon label is in the alphabet
/// - state names are unique
#[derive(Debug, Clone)]
pub struct Automaton {
    initial: StateId,
    states: Vec<State>,
    alphabet: BTreeSet<char>,
    transitions: Vec<Transition>,
    /// Transition indices grouped by source state.
    outgoing: Vec<Vec<usize>>,
}

impl Automaton {
    /// Validate and assemble an automaton.
    ///
    /// Repeated transitions (same triple) are collapsed, keeping the first.
    pub fn new(
        initial: StateId,
        states: Vec<State>,
        alphabet: impl IntoIterator<Item = char>,
        transitions: impl IntoIterator<Item = Transition>,
    ) -> Result<Self, StructureError> {
        let alphabet: BTreeSet<char> = alphabet.into_iter().collect();
        let transitions: IndexSet<Transition> = transitions.into_iter().collect();

        if initial.index() >= states.len() {
            return Err(StructureError::UnknownInitial(initial));
        }

        let mut names = HashSet::with_capacity(states.len());
        for state in &states {
            if !names.insert(state.name.as_str()) {
                return Err(StructureError::DuplicateState(state.name.clone()));
            }
        }

        for t in &transitions {
            for endpoint in [t.from, t.to] {
                if endpoint.index() >= states.len() {
                    return Err(StructureError::UnknownState(endpoint));
                }
            }
            if let Symbol::Char(c) = t.symbol
                && !alphabet.contains(&c)
            {
                return Err(StructureError::UnknownSymbol(c));
            }
        }

        Ok(Self::assemble(
            initial,
            states,
            alphabet,
            transitions.into_iter().collect(),
        ))
    }

    /// Assemble without validation, for transformations whose output is
    /// valid by construction.
    pub(crate) fn new_unchecked(
        initial: StateId,
        states: Vec<State>,
        alphabet: BTreeSet<char>,
        transitions: Vec<Transition>,
    ) -> Self {
        let transitions: Vec<Transition> = transitions
            .into_iter()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();
        let automaton = Self::assemble(initial, states, alphabet, transitions);
        automaton.debug_assert_valid();
        automaton
    }

    fn assemble(
        initial: StateId,
        states: Vec<State>,
        alphabet: BTreeSet<char>,
        transitions: Vec<Transition>,
    ) -> Self {
        let mut outgoing = vec![Vec::new(); states.len()];
        for (i, t) in transitions.iter().enumerate() {
            outgoing[t.from.index()].push(i);
        }

        Self {
            initial,
            states,
            alphabet,
            transitions,
            outgoing,
        }
    }

    pub fn initial(&self) -> StateId {
        self.initial
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    /// Iterate over all states with their IDs, in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (StateId::from_index(i), s))
    }

    pub fn state_ids(&self) -> impl Iterator<Item = StateId> {
        (0..self.states.len()).map(StateId::from_index)
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false for a valid automaton (the initial state exists).
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn is_final(&self, id: StateId) -> bool {
        self.states[id.index()].is_final
    }

    /// Look a state up by name.
    pub fn find(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.name == name)
            .map(StateId::from_index)
    }

    /// Outgoing transitions of `state`, in insertion order.
    pub fn outgoing(&self, state: StateId) -> impl Iterator<Item = &Transition> {
        self.outgoing[state.index()]
            .iter()
            .map(|&i| &self.transitions[i])
    }

    /// Targets of `state` on exactly `symbol`.
    pub fn successors(&self, state: StateId, symbol: Symbol) -> impl Iterator<Item = StateId> {
        self.outgoing(state)
            .filter(move |t| t.symbol == symbol)
            .map(|t| t.to)
    }

    /// True if any state of `states` is final.
    pub fn any_final(&self, states: &StateSet) -> bool {
        states.iter().any(|&s| self.is_final(s))
    }

    pub fn has_epsilon_transitions(&self) -> bool {
        self.transitions.iter().any(|t| t.symbol.is_epsilon())
    }

    /// True when there are no epsilon transitions and every state has exactly
    /// one transition per alphabet symbol.
    pub fn is_deterministic(&self) -> bool {
        self.check_deterministic().is_ok()
    }

    /// Report the first violation of determinism or totality, scanning states
    /// in arena order and symbols in alphabet order.
    pub fn check_deterministic(&self) -> Result<(), StructureError> {
        for (id, state) in self.iter() {
            let mut targets = vec![0usize; self.alphabet.len()];
            for t in self.outgoing(id) {
                let Symbol::Char(c) = t.symbol else {
                    return Err(StructureError::EpsilonTransition {
                        state: state.name.clone(),
                    });
                };
                let slot = self.symbol_index(c);
                targets[slot] += 1;
            }

            for (&symbol, &count) in self.alphabet.iter().zip(&targets) {
                match count {
                    1 => {}
                    0 => {
                        return Err(StructureError::Incomplete {
                            state: state.name.clone(),
                            symbol,
                        });
                    }
                    _ => {
                        return Err(StructureError::Nondeterministic {
                            state: state.name.clone(),
                            symbol,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// The unique target of `state` on `symbol`, if exactly one exists.
    pub fn target(&self, state: StateId, symbol: char) -> Option<StateId> {
        let mut targets = self.successors(state, Symbol::Char(symbol));
        let first = targets.next()?;
        if targets.next().is_some() {
            return None;
        }
        Some(first)
    }

    /// Position of `symbol` in alphabet order.
    pub(crate) fn symbol_index(&self, symbol: char) -> usize {
        self.alphabet.range(..symbol).count()
    }
}
