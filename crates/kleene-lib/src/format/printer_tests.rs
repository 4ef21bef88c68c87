use super::AutomatonPrinter;
use crate::Colors;
use crate::test_utils::nfa;

#[test]
fn lists_states_with_grouped_transitions() {
    let a = nfa("a+b");
    insta::assert_snapshot!(AutomatonPrinter::new(&a).render(), @r"
      q0
        a → q1
      q1
        ε → q5
      q2
        b → q3
      q3
        ε → q5
    → q4
        ε → q0, q2
      q5 *
    ");
}

#[test]
fn colored_output() {
    let a = nfa("a");
    let out = AutomatonPrinter::new(&a).colored(Colors::ON).render();
    assert!(out.contains(&format!("{}q1{} *", Colors::ON.green, Colors::ON.reset)));
    assert!(out.contains(Colors::ON.dim));
}
