pub mod build;
pub mod check;
pub mod convert;
pub mod eval;
pub mod loader;
pub mod run_common;
pub mod trace;

#[cfg(test)]
mod loader_tests;
