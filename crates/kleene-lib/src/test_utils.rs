//! Test fixtures and helpers.

use std::collections::BTreeSet;

use crate::Automaton;
use crate::engine::Evaluator;

/// Parse an indented text-format fixture.
#[macro_export]
macro_rules! automaton {
    ($description:literal) => {
        $crate::format::text::read(indoc::indoc!($description)).expect("valid automaton fixture")
    };
}

/// Compile a regex that is known to be valid.
pub fn nfa(regex: &str) -> Automaton {
    crate::build(regex).expect("valid regex")
}

/// Every string over `alphabet` of length at most `max_len`, shortest first.
pub fn strings_up_to(alphabet: &BTreeSet<char>, max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut layer = vec![String::new()];
    for _ in 0..max_len {
        layer = layer
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&c| {
                    let mut s = prefix.clone();
                    s.push(c);
                    s
                })
            })
            .collect();
        all.extend(layer.iter().cloned());
    }
    all
}

/// Accepted strings of length at most `max_len`, over the automaton's own alphabet.
pub fn language(automaton: &Automaton, max_len: usize) -> Vec<String> {
    let mut evaluator = Evaluator::new(automaton);
    strings_up_to(automaton.alphabet(), max_len)
        .into_iter()
        .filter(|s| evaluator.accepts(s).expect("strings use the alphabet"))
        .collect()
}
