//! Lexer for the regex syntax.
//!
//! Produces span-based tokens without storing text. A symbol token always
//! covers exactly one `char`, so its text is sliced from the source on demand.
//!
//! Space, tab, CR and LF separate tokens. Every other Unicode whitespace char
//! is a lexer error, reported as `Garbage`.

use logos::Logos;

use crate::diagnostics::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[token("+")]
    Plus,

    #[token(".")]
    Dot,

    #[token("*")]
    Star,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    /// Epsilon literal.
    #[token("λ")]
    Lambda,

    /// Any single char except operators and whitespace.
    #[regex(r"[^\s+.*()λ]")]
    Symbol,

    /// Whitespace other than the skipped separators.
    Garbage,

    /// Synthesized past the last token.
    Eof,
}

/// Zero-copy token: kind + span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Consecutive lexer errors are coalesced into a single `Garbage` token.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Garbage, Span::new(start, end)));
                }
                tokens.push(Token::new(kind, lexer.span().into()));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        TokenKind::Garbage,
                        Span::new(start, source.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[token.span.range()]
}
