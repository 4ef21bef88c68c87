//! Automaton serialization and rendering.
//!
//! - [`text`]: line-oriented description format, read and write
//! - [`dot`]: Graphviz export
//! - [`json`]: serde dump for inspection
//! - [`printer`]: compact listing for terminals

pub mod dot;
pub mod json;
pub mod printer;
pub mod text;

#[cfg(test)]
mod json_tests;
#[cfg(test)]
mod printer_tests;
#[cfg(test)]
mod text_tests;

pub use printer::AutomatonPrinter;
