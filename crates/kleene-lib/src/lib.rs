//! Kleene: regular expressions to canonical finite automata.
//!
//! # Example
//!
//! ```
//! let nfa = kleene_lib::build("a*.b*").expect("valid regex");
//! let dfa = nfa.to_deterministic();
//! let min = dfa.to_minimized().expect("determinizer output is total");
//!
//! let mut evaluator = kleene_lib::engine::Evaluator::new(&min);
//! assert!(evaluator.accepts("aab").unwrap());
//! assert!(!evaluator.accepts("aba").unwrap());
//! ```
//!
//! Pipeline: `regex` (lex + parse) → `compile` (Thompson NFA) →
//! `transform` (subset construction, minimization). Any automaton along the
//! way can be run by `engine::Evaluator` or printed through `format`.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod automaton;
pub mod colors;
pub mod compile;
pub mod diagnostics;
pub mod engine;
pub mod format;
pub mod isomorphism;
pub mod regex;
pub mod transform;

#[cfg(test)]
pub mod test_utils;

pub use automaton::{Automaton, State, StateId, StateSet, StructureError, Symbol, Transition};
pub use colors::Colors;
pub use compile::RegexBuilder;
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Span};

/// Errors produced by the automaton pipeline.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Recursion fuel exhausted (regex nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("regex parsing failed with {} errors", .0.error_count())]
    RegexParse(Diagnostics),

    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error("symbol '{0}' is not in the automaton alphabet")]
    InvalidSymbol(char),

    /// Malformed textual automaton description.
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },
}

/// Result type for automaton operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Compile a regex into an NFA with the default builder settings.
pub fn build(regex: &str) -> Result<Automaton> {
    RegexBuilder::new().build(regex)
}
