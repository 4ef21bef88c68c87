//! Canonicalizing transformations.
//!
//! - [`determinize`]: subset construction, any automaton to a total trim DFA
//! - [`minimize`]: Moore partition refinement on a DFA

pub mod determinize;
pub mod minimize;


pub use determinize::determinize;
pub use minimize::minimize;
