//! Regex front-end: lexer, AST and recursive-descent parser.
//!
//! Surface syntax, lowest to highest precedence:
//!
//! ```text
//! expression := term ('+' term)*
//! term       := factor ('.' factor)*
//! factor     := atom '*'?
//! atom       := symbol | 'λ' | '(' expression ')'
//! ```
//!
//! Whitespace between tokens is skipped. Any other character is a symbol.

pub mod ast;
pub mod lexer;
mod parser;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod parser_tests;

pub use ast::Expr;
pub use lexer::{Token, TokenKind, lex};
pub use parser::Parser;

/// Parse with no recursion limit.
pub fn parse(source: &str) -> crate::Result<Expr> {
    Parser::new(source, lex(source)).parse()
}
