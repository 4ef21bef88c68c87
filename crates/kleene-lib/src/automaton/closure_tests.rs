use super::*;
use crate::automaton;

fn lambda_cycles() -> Automaton {
    automaton!(
        "
        Automaton:
            Symbols: abc

            q0
            q1
            q2 final

            --> q0
            q0 --> q0
            q0 --> q1
            q1 --> q0
            q2 --> q1
            q1 -a-> q2
            q1 -b-> q2
        "
    )
}

fn ids(a: &Automaton, names: &[&str]) -> StateSet {
    names.iter().map(|n| a.find(n).unwrap()).collect()
}

#[test]
fn closure_follows_epsilon_cycles() {
    let a = lambda_cycles();
    assert_eq!(a.initial_closure(), ids(&a, &["q0", "q1"]));
    assert_eq!(
        a.epsilon_closure(&ids(&a, &["q2"])),
        ids(&a, &["q0", "q1", "q2"])
    );
}

#[test]
fn closure_is_idempotent() {
    let a = lambda_cycles();
    let starts: [&[&str]; 5] = [&["q0"], &["q1"], &["q2"], &["q0", "q2"], &[]];
    for start in starts {
        let once = a.epsilon_closure(&ids(&a, start));
        let twice = a.epsilon_closure(&once);
        assert_eq!(once, twice);
    }
}

#[test]
fn closure_of_empty_set_is_empty() {
    let a = lambda_cycles();
    assert!(a.epsilon_closure(&StateSet::new()).is_empty());
}

#[test]
fn closure_walks_chains() {
    let a = automaton!(
        "
        Automaton:
            Symbols:

            1
            2
            3
            4 final

            --> 1
            1 --> 2
            2 --> 3
            3 --> 4
        "
    );
    assert_eq!(a.initial_closure().len(), 4);
    assert!(a.any_final(&a.initial_closure()));
}

#[test]
fn step_is_not_closed() {
    let a = lambda_cycles();
    let start = a.initial_closure();
    assert_eq!(a.step(&start, 'a'), ids(&a, &["q2"]));
    assert_eq!(a.step_closed(&start, 'a'), ids(&a, &["q0", "q1", "q2"]));
    assert!(a.step(&start, 'c').is_empty());
}
