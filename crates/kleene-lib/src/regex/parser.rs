//! Recursive-descent parser over the token stream.
//!
//! Parsing stops at the first syntax error: every grammar function returns
//! `None` once a diagnostic has been reported, and the caller unwinds.

use super::ast::Expr;
use super::lexer::{Token, TokenKind, token_text};
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};

pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    depth: u32,
    recursion_fuel_limit: Option<u32>,
    diagnostics: Diagnostics,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            depth: 0,
            recursion_fuel_limit: None,
            diagnostics: Diagnostics::new(),
            fatal_error: None,
        }
    }

    /// Maximum group nesting depth. `None` disables the limit.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<Expr, Error> {
        let expr = self.parse_root();
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        match expr {
            Some(expr) if self.diagnostics.is_empty() => Ok(expr),
            _ => Err(Error::RegexParse(self.diagnostics)),
        }
    }

    fn parse_root(&mut self) -> Option<Expr> {
        if self.current() == TokenKind::Eof {
            self.diagnostics
                .report(DiagnosticKind::EmptyExpression, Span::empty(0))
                .emit();
            return None;
        }

        let expr = self.expression()?;
        if self.current() == TokenKind::ParenClose {
            let span = self.current_span();
            self.diagnostics
                .report(DiagnosticKind::UnmatchedParen, span)
                .emit();
            return None;
        }
        Some(expr)
    }

    /// `term ('+' term)*`, followed by end of input or `)`.
    fn expression(&mut self) -> Option<Expr> {
        let mut expr = self.term()?;
        while self.eat(TokenKind::Plus) {
            let rhs = self.term()?;
            expr = Expr::union(expr, rhs);
        }

        let span = self.current_span();
        match self.current() {
            TokenKind::Eof | TokenKind::ParenClose => Some(expr),
            TokenKind::Star => {
                self.diagnostics
                    .report(DiagnosticKind::RepeatedStar, span)
                    .emit();
                None
            }
            TokenKind::Garbage => self.unexpected_token(span),
            _ => {
                let found = format!("found `{}`", &self.source[span.range()]);
                self.diagnostics
                    .report(DiagnosticKind::MissingOperator, span)
                    .message(found)
                    .emit();
                None
            }
        }
    }

    fn term(&mut self) -> Option<Expr> {
        let mut expr = self.factor()?;
        while self.eat(TokenKind::Dot) {
            let rhs = self.factor()?;
            expr = Expr::concat(expr, rhs);
        }
        Some(expr)
    }

    fn factor(&mut self) -> Option<Expr> {
        let atom = self.atom()?;
        if self.eat(TokenKind::Star) {
            return Some(Expr::star(atom));
        }
        Some(atom)
    }

    fn atom(&mut self) -> Option<Expr> {
        let span = self.current_span();
        match self.current() {
            TokenKind::Symbol => {
                let token = self.bump();
                let c = token_text(self.source, &token).chars().next()?;
                Some(Expr::Symbol(c))
            }
            TokenKind::Lambda => {
                self.bump();
                Some(Expr::Epsilon)
            }
            TokenKind::ParenOpen => self.group(),
            TokenKind::ParenClose if self.depth == 0 => {
                self.diagnostics
                    .report(DiagnosticKind::UnmatchedParen, span)
                    .emit();
                None
            }
            TokenKind::ParenClose => {
                self.diagnostics
                    .report(DiagnosticKind::ExpectedExpression, span)
                    .message("found `)`")
                    .emit();
                None
            }
            TokenKind::Plus | TokenKind::Dot | TokenKind::Star => {
                let op = self.source[span.range()].to_string();
                self.diagnostics
                    .report(DiagnosticKind::MisplacedOperator, span)
                    .message(op)
                    .emit();
                None
            }
            TokenKind::Eof => {
                self.diagnostics
                    .report(DiagnosticKind::ExpectedExpression, span)
                    .message("found end of input")
                    .emit();
                None
            }
            TokenKind::Garbage => self.unexpected_token(span),
        }
    }

    /// `'(' expression ')'`, with the cursor on `(`.
    fn group(&mut self) -> Option<Expr> {
        let open = self.bump().span;

        if self.current() == TokenKind::ParenClose {
            let close = self.bump().span;
            self.diagnostics
                .report(DiagnosticKind::EmptyGroup, open.cover(close))
                .emit();
            return None;
        }

        if !self.enter_recursion() {
            return None;
        }
        let inner = self.expression();
        self.exit_recursion();
        let inner = inner?;

        if !self.eat(TokenKind::ParenClose) {
            let end = self.current_span();
            self.diagnostics
                .report(DiagnosticKind::UnclosedGroup, open)
                .related_to("expected `)` here", end)
                .emit();
            return None;
        }
        Some(inner)
    }

    /// Garbage is invisible whitespace, so it is shown escaped.
    fn unexpected_token(&mut self, span: Span) -> Option<Expr> {
        let text = self.source[span.range()].escape_debug().to_string();
        self.diagnostics
            .report(DiagnosticKind::UnexpectedToken, span)
            .message(text)
            .emit();
        None
    }

    fn current(&self) -> TokenKind {
        self.tokens
            .get(self.pos)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Span of the current token, or an empty span at the end of input.
    fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map_or(Span::empty(self.source.len()), |t| t.span)
    }

    fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos];
        self.pos += 1;
        token
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current() == kind {
            self.bump();
            return true;
        }
        false
    }

    fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        true
    }

    fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
