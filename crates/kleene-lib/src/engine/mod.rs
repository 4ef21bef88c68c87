//! Automaton simulation.

mod evaluator;
pub mod trace;


pub use evaluator::Evaluator;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
