use crate::automaton;
use crate::format::text;

#[test]
fn drops_unreachable_states_and_their_transitions() {
    let a = automaton!(
        "
        Automaton:
            Symbols: ab

            dead
            start
            island final
            end final

            --> start
            start -a-> end
            end --> start
            dead -a-> start
            island -b-> end
        "
    );
    assert!(!a.is_trim());

    let trimmed = a.trim();
    assert!(trimmed.is_trim());
    insta::assert_snapshot!(text::write(&trimmed), @r"
    Automaton:
        Symbols: ab

        start
        end final

        --> start
        start -a-> end
        end --> start
    ");
}

#[test]
fn follows_epsilon_edges() {
    let a = automaton!(
        "
        Automaton:
            Symbols:

            a
            b
            c

            --> a
            a --> b
        "
    );
    let trimmed = a.trim();
    assert_eq!(trimmed.len(), 2);
    assert_eq!(trimmed.find("c"), None);
}

#[test]
fn trim_automaton_is_unchanged() {
    let a = automaton!(
        "
        Automaton:
            Symbols: x

            s final

            --> s
            s -x-> s
        "
    );
    assert!(a.is_trim());
    assert_eq!(text::write(&a.trim()), text::write(&a));
}
