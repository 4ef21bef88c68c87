use crate::Result;
use crate::automaton::Automaton;
use crate::regex::{Expr, Parser, lex};

use super::compile;

pub const DEFAULT_RECURSION_FUEL: u32 = 4096;

/// Configurable regex compiler.
///
/// ```
/// use kleene_lib::RegexBuilder;
///
/// let nfa = RegexBuilder::new()
///     .with_recursion_fuel(Some(16))
///     .build("(a+b)*.c")
///     .unwrap();
/// assert_eq!(nfa.alphabet().len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RegexBuilder {
    recursion_fuel: Option<u32>,
}

impl Default for RegexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexBuilder {
    pub fn new() -> Self {
        Self {
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    /// Maximum group nesting. `None` disables the limit.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    pub fn parse(&self, regex: &str) -> Result<Expr> {
        Parser::new(regex, lex(regex))
            .with_recursion_fuel(self.recursion_fuel)
            .parse()
    }

    pub fn build(&self, regex: &str) -> Result<Automaton> {
        let expr = self.parse(regex)?;
        Ok(compile(&expr))
    }
}
