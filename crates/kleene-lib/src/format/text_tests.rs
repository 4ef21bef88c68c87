use indoc::indoc;

use super::text::{read, write};
use crate::test_utils::nfa;
use crate::{Error, StructureError, Symbol};

fn read_err(description: &str) -> String {
    read(description).unwrap_err().to_string()
}

#[test]
fn reads_states_and_transitions() {
    let a = read(indoc! {"
        # two states, one epsilon edge
        Automaton:
            Symbols: 01-

            initial
            sign final

            --> initial
            initial ---> sign
            initial --> sign
            sign -0-> sign
    "})
    .unwrap();

    assert_eq!(a.len(), 2);
    assert_eq!(a.alphabet().iter().collect::<String>(), "-01");
    assert_eq!(a.state(a.initial()).name(), "initial");
    assert!(a.is_final(a.find("sign").unwrap()));

    let symbols: Vec<Symbol> = a.transitions().iter().map(|t| t.symbol).collect();
    assert_eq!(
        symbols,
        vec![Symbol::Char('-'), Symbol::Epsilon, Symbol::Char('0')]
    );
}

#[test]
fn trailing_whitespace_and_spaced_symbols() {
    let a = read("Automaton:\n  Symbols: a b \n  s final   \n  --> s\n  s -a-> s\n  s -b-> s\n")
        .unwrap();
    assert_eq!(a.alphabet().len(), 2);
    assert!(a.is_final(a.initial()));
}

#[test]
fn write_then_read_is_identity() {
    for regex in ["a*.b*", "λ+(a.b.λ)+(a.a.b.(b.a+λ))", "(0+1)*.1.1", "ä.\u{200B}"] {
        let original = nfa(regex);
        let text = write(&original);
        let reread = read(&text).unwrap();
        assert_eq!(write(&reread), text, "{regex}");
        assert_eq!(reread.transitions(), original.transitions(), "{regex}");
        assert_eq!(reread.initial(), original.initial(), "{regex}");
    }
}

#[test]
fn write_layout() {
    insta::assert_snapshot!(write(&nfa("a").to_deterministic()), @r"
    Automaton:
        Symbols: a

        q0
        q1 final
        empty

        --> q0
        q0 -a-> q1
        q1 -a-> empty
        empty -a-> empty
    ");
}

#[test]
fn header_is_required() {
    insta::assert_snapshot!(read_err("Symbols: a\n"), @"line 1: expected `Automaton:`");
    insta::assert_snapshot!(read_err("\n\n"), @"line 2: expected `Automaton:`");
}

#[test]
fn states_must_be_declared_first() {
    let err = read_err(indoc! {"
        Automaton:
            Symbols: ab

            s
            --> s
            s -a-> t
    "});
    insta::assert_snapshot!(err, @"line 6: unknown state `t`");
}

#[test]
fn malformed_lines() {
    insta::assert_snapshot!(
        read_err("Automaton:\n  s\n  s -ab-> s\n"),
        @"line 3: invalid arrow `-ab->`"
    );
    insta::assert_snapshot!(
        read_err("Automaton:\n  s accepting\n"),
        @"line 2: unrecognized line `s accepting`"
    );
    insta::assert_snapshot!(
        read_err("Automaton:\n  s\n  s\n"),
        @"line 3: state `s` declared twice"
    );
    insta::assert_snapshot!(
        read_err("Automaton:\n  Symbols: a\n  Symbols: b\n"),
        @"line 3: symbols declared twice"
    );
}

#[test]
fn initial_state_exactly_once() {
    insta::assert_snapshot!(
        read_err("Automaton:\n  s\n  t\n"),
        @"line 3: missing initial state"
    );
    insta::assert_snapshot!(
        read_err("Automaton:\n  s\n  --> s\n  --> s\n"),
        @"line 4: initial state declared twice"
    );
}

#[test]
fn structure_is_validated() {
    let err = read("Automaton:\n  Symbols: a\n  s\n  --> s\n  s -b-> s\n").unwrap_err();
    assert!(matches!(
        err,
        Error::Structure(StructureError::UnknownSymbol('b'))
    ));
}
