use super::*;
use crate::Error;
use crate::format::text;
use crate::regex::Expr;
use crate::test_utils::nfa;

#[test]
fn symbol() {
    insta::assert_snapshot!(text::write(&nfa("a")), @r"
    Automaton:
        Symbols: a

        q0
        q1 final

        --> q0
        q0 -a-> q1
    ");
}

#[test]
fn epsilon_is_one_final_state() {
    insta::assert_snapshot!(text::write(&nfa("λ")), @r"
    Automaton:
        Symbols:

        q0 final

        --> q0
    ");
}

#[test]
fn empty_language_has_no_transitions() {
    let a = compile(&Expr::Empty);
    insta::assert_snapshot!(text::write(&a), @r"
    Automaton:
        Symbols:

        q0
        q1 final

        --> q0
    ");
}

#[test]
fn union_adds_fresh_initial_and_final() {
    insta::assert_snapshot!(text::write(&nfa("a+b")), @r"
    Automaton:
        Symbols: ab

        q0
        q1
        q2
        q3
        q4
        q5 final

        --> q4
        q0 -a-> q1
        q2 -b-> q3
        q4 --> q0
        q4 --> q2
        q1 --> q5
        q3 --> q5
    ");
}

#[test]
fn star_and_concat() {
    insta::assert_snapshot!(text::write(&nfa("a*.b*")), @r"
    Automaton:
        Symbols: ab

        q0
        q1
        q2
        q3
        q4
        q5
        q6
        q7 final

        --> q2
        q0 -a-> q1
        q2 --> q0
        q1 --> q3
        q1 --> q0
        q2 --> q3
        q4 -b-> q5
        q6 --> q4
        q5 --> q7
        q5 --> q4
        q6 --> q7
        q3 --> q6
    ");
}

#[test]
fn exactly_one_final_state() {
    for regex in [
        "a",
        "λ",
        "a*",
        "(a+b)*",
        "H.e.l.l.o",
        "λ+(a.b.λ)+(a.a.b.(b.a+λ))",
        "((b.a)+a)*.(b+λ)",
    ] {
        let a = nfa(regex);
        let finals = a.states().iter().filter(|s| s.is_final()).count();
        assert_eq!(finals, 1, "{regex}");
    }
}

#[test]
fn alphabet_is_the_used_symbols() {
    let a = nfa("(a+b)*.c.λ");
    assert_eq!(a.alphabet().iter().collect::<String>(), "abc");
}

#[test]
fn names_restart_for_every_build() {
    let first = nfa("a.b");
    let second = nfa("a.b");
    assert_eq!(text::write(&first), text::write(&second));
    assert_eq!(first.state(first.initial()).name(), "q0");
}

#[test]
fn name_gen_counts_up() {
    let mut names = NameGen::new();
    assert_eq!(names.fresh(), "q0");
    assert_eq!(names.fresh(), "q1");
    assert_eq!(names.fresh(), "q2");
}

#[test]
fn builder_recursion_fuel() {
    let nested = format!("{}a{}", "(".repeat(10), ")".repeat(10));

    let limited = RegexBuilder::new().with_recursion_fuel(Some(4)).build(&nested);
    assert!(matches!(limited, Err(Error::RecursionLimitExceeded)));

    let unlimited = RegexBuilder::new().with_recursion_fuel(None).build(&nested);
    assert_eq!(unlimited.unwrap().len(), 2);
}

#[test]
fn syntax_errors_surface_as_diagnostics() {
    let Err(Error::RegexParse(diagnostics)) = crate::build("(a+b") else {
        panic!("expected a parse error");
    };
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn long_union_chain() {
    const OPERANDS: usize = 200_000;
    let regex = vec!["a"; OPERANDS].join("+");

    let expr = RegexBuilder::new().parse(&regex).unwrap();
    let Expr::Union(operands) = &expr else {
        panic!("expected a union");
    };
    assert_eq!(operands.len(), OPERANDS);

    let a = compile(&expr);
    assert_eq!(a.len(), 4 * OPERANDS - 2);
    assert_eq!(a.transitions().len(), OPERANDS + 4 * (OPERANDS - 1));
}

#[test]
fn long_concat_chain() {
    const OPERANDS: usize = 200_000;
    let regex = vec!["a"; OPERANDS].join(".");

    let a = nfa(&regex);
    assert_eq!(a.len(), 2 * OPERANDS);
    assert_eq!(a.transitions().len(), OPERANDS + (OPERANDS - 1));
}

#[test]
fn grouped_chains_keep_their_shape() {
    let expr = RegexBuilder::new().parse("a+(b+c)+d").unwrap();
    assert_eq!(expr.to_string(), "((a+(b+c))+d)");
    let Expr::Union(operands) = &expr else {
        panic!("expected a union");
    };
    assert_eq!(operands.len(), 3);
}

#[test]
fn empty_operand_lists() {
    let union = compile(&Expr::Union(Vec::new()));
    assert!(union.transitions().is_empty());
    assert!(!union.is_final(union.initial()));

    let concat = compile(&Expr::Concat(Vec::new()));
    assert_eq!(concat.len(), 1);
    assert!(concat.is_final(concat.initial()));
}
