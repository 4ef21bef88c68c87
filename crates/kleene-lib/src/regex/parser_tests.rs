use super::{Parser, lex, parse};
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Span};

fn tree(source: &str) -> String {
    parse(source).expect("valid regex").to_string()
}

fn error(source: &str) -> String {
    match parse(source) {
        Err(Error::RegexParse(diagnostics)) => diagnostics.to_string(),
        other => panic!("expected parse error, got {other:?}"),
    }
}

fn first_kind(source: &str) -> DiagnosticKind {
    first(source).0
}

fn first(source: &str) -> (DiagnosticKind, Span) {
    match parse(source) {
        Err(Error::RegexParse(diagnostics)) => diagnostics.first().expect("one diagnostic"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn precedence_star_binds_tightest() {
    insta::assert_snapshot!(tree("a.b*"), @"(a.b*)");
    insta::assert_snapshot!(tree("a+b.c"), @"(a+(b.c))");
    insta::assert_snapshot!(tree("a.b+c"), @"((a.b)+c)");
    insta::assert_snapshot!(tree("(a+b)*"), @"(a+b)*");
}

#[test]
fn binary_operators_associate_left() {
    insta::assert_snapshot!(tree("H.e.l.l.o"), @"((((H.e).l).l).o)");
    insta::assert_snapshot!(tree("a+b+c"), @"((a+b)+c)");
}

#[test]
fn groups_and_lambda() {
    insta::assert_snapshot!(
        tree("λ+(a.b.λ)+(a.a.b.(b.a+λ))"),
        @"((λ+((a.b).λ))+(((a.a).b).((b.a)+λ)))"
    );
    insta::assert_snapshot!(tree("((b.a)+a)*.(b+λ)"), @"(((b.a)+a)*.(b+λ))");
}

#[test]
fn whitespace_between_tokens() {
    insta::assert_snapshot!(tree(" ( a + b ) * . c "), @"((a+b)*.c)");
}

#[test]
fn empty_input() {
    insta::assert_snapshot!(error(""), @"error at 0..0: empty expression");
    insta::assert_snapshot!(error("  \n"), @"error at 0..0: empty expression");
}

#[test]
fn empty_group() {
    insta::assert_snapshot!(error("a.()"), @"error at 2..4: empty `()` is not allowed");
}

#[test]
fn unbalanced_parentheses() {
    insta::assert_snapshot!(
        error("(a+b"),
        @"error at 0..1: missing closing `)` (expected `)` here at 4..4)"
    );
    insta::assert_snapshot!(error("a)"), @"error at 1..2: unmatched `)`");
    insta::assert_snapshot!(error("(a))"), @"error at 3..4: unmatched `)`");
    insta::assert_snapshot!(error(")"), @"error at 0..1: unmatched `)`");
}

#[test]
fn operator_without_operand() {
    insta::assert_snapshot!(error("*a"), @"error at 0..1: operator `*` is missing an operand");
    insta::assert_snapshot!(error("a++b"), @"error at 2..3: operator `+` is missing an operand");
    insta::assert_snapshot!(
        error("a+"),
        @"error at 2..2: expected an expression: found end of input"
    );
    insta::assert_snapshot!(error("(a.)"), @"error at 3..4: expected an expression: found `)`");
}

#[test]
fn juxtaposition_needs_operator() {
    insta::assert_snapshot!(
        error("ab"),
        @"error at 1..2: expected `.` or `+` between operands: found `b`"
    );
    assert_eq!(first_kind("a (b)"), DiagnosticKind::MissingOperator);
    assert_eq!(first_kind("a λ"), DiagnosticKind::MissingOperator);
}

#[test]
fn double_star() {
    insta::assert_snapshot!(error("a**"), @"error at 2..3: `*` cannot be applied twice");
}

#[test]
fn rendered_with_source() {
    let Err(Error::RegexParse(diagnostics)) = parse("a.+") else {
        panic!("expected parse error");
    };
    insta::assert_snapshot!(diagnostics.render("a.+"), @r"
    error: operator `+` is missing an operand
      |
    1 | a.+
      |   ^
    ");
}

#[test]
fn deeply_nested_groups_hit_recursion_limit() {
    let depth = 64;
    let input = format!("{}a{}", "(".repeat(depth + 1), ")".repeat(depth + 1));

    let result = Parser::new(&input, lex(&input))
        .with_recursion_fuel(Some(depth as u32))
        .parse();

    assert!(
        matches!(result, Err(Error::RecursionLimitExceeded)),
        "expected RecursionLimitExceeded error, got {:?}",
        result
    );
}

#[test]
fn nesting_within_limit_parses() {
    let depth = 64;
    let input = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));

    let result = Parser::new(&input, lex(&input))
        .with_recursion_fuel(Some(depth as u32))
        .parse();

    assert_eq!(result.expect("within limit").to_string(), "a");
}

#[test]
fn stray_whitespace_is_unexpected() {
    assert_eq!(first("\u{0B}"), (DiagnosticKind::UnexpectedToken, Span::new(0, 1)));
    assert_eq!(first("a.\u{0B}"), (DiagnosticKind::UnexpectedToken, Span::new(2, 3)));
    assert_eq!(first("a\u{0B}"), (DiagnosticKind::UnexpectedToken, Span::new(1, 2)));
    assert!(matches!(
        crate::build("\u{a0}"),
        Err(Error::RegexParse(_))
    ));
}

#[test]
fn stray_whitespace_is_shown_escaped() {
    assert!(error("a\u{0B}").contains("unexpected `\\u{b}`"));
}
