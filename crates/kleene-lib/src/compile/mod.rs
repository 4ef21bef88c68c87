//! Regex to NFA compilation (Thompson construction).
//!
//! The [`RegexBuilder`] lexes, parses and compiles in one call. Each call owns
//! a fresh [`NameGen`], so state names restart at `q0` for every build.

mod builder;
mod compiler;
mod fragment;

#[cfg(test)]
mod compile_tests;

pub use builder::{DEFAULT_RECURSION_FUEL, RegexBuilder};
pub use compiler::compile;
pub use fragment::{BuildGraph, Fragment, NameGen};
