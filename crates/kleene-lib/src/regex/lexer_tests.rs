use super::lexer::{TokenKind, lex, token_text};

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn operators_and_groups() {
    use TokenKind::*;
    assert_eq!(
        kinds("(a+b)*.c"),
        vec![ParenOpen, Symbol, Plus, Symbol, ParenClose, Star, Dot, Symbol]
    );
}

#[test]
fn whitespace_is_skipped() {
    use TokenKind::*;
    assert_eq!(kinds(" a \t.\n b\r\n"), vec![Symbol, Dot, Symbol]);
    assert!(lex("   ").is_empty());
}

#[test]
fn lambda_is_epsilon_literal() {
    let tokens = lex("λ+a");
    assert_eq!(tokens[0].kind, TokenKind::Lambda);
    assert_eq!(tokens[0].span.range(), 0..2);
    assert_eq!(tokens[1].kind, TokenKind::Plus);
    assert_eq!(tokens[1].span.range(), 2..3);
}

#[test]
fn every_other_char_is_one_symbol() {
    let source = "1,é-µ";
    let tokens = lex(source);
    let texts: Vec<&str> = tokens.iter().map(|t| token_text(source, t)).collect();
    assert_eq!(texts, vec!["1", ",", "é", "-", "µ"]);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Symbol));
}

#[test]
fn other_whitespace_is_garbage() {
    use TokenKind::*;
    let tokens = lex("a\u{a0}b");
    assert_eq!(kinds("a\u{a0}b"), vec![Symbol, Garbage, Symbol]);
    assert_eq!(tokens[1].span.range(), 1..3);
}

#[test]
fn adjacent_garbage_coalesces() {
    let tokens = lex("\u{0B}\u{0C}");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Garbage);
    assert_eq!(tokens[0].span.range(), 0..2);
}
