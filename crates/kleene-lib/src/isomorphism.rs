//! Isomorphism of deterministic automata.
//!
//! Two trim DFAs over the same alphabet that accept the same language and are
//! both minimal are isomorphic, so this doubles as an equivalence check for
//! minimizer output.

use std::collections::VecDeque;

use crate::automaton::{Automaton, StateId};

/// Bijection from `a`'s states to `b`'s states that preserves the initial
/// state, finality and every transition, if one exists.
///
/// Both automata must be free of epsilon transitions with at most one target
/// per (state, symbol). Pairing starts at the initial states and follows
/// transitions breadth-first, so a state unreachable from the initial state
/// can never be paired and yields `None`.
pub fn find_isomorphism(a: &Automaton, b: &Automaton) -> Option<Vec<StateId>> {
    if a.alphabet() != b.alphabet()
        || a.len() != b.len()
        || a.transitions().len() != b.transitions().len()
        || a.has_epsilon_transitions()
        || b.has_epsilon_transitions()
    {
        return None;
    }

    let mut forward: Vec<Option<StateId>> = vec![None; a.len()];
    let mut backward: Vec<Option<StateId>> = vec![None; b.len()];
    let mut queue = VecDeque::new();

    pair(&mut forward, &mut backward, a.initial(), b.initial())?;
    queue.push_back((a.initial(), b.initial()));

    while let Some((sa, sb)) = queue.pop_front() {
        if a.is_final(sa) != b.is_final(sb) {
            return None;
        }
        let degree = a.outgoing(sa).count();
        if degree != b.outgoing(sb).count() {
            return None;
        }
        let mut paired = 0;
        for &symbol in a.alphabet() {
            match (a.target(sa, symbol), b.target(sb, symbol)) {
                (None, None) => {}
                (Some(ta), Some(tb)) => {
                    paired += 1;
                    if forward[ta.index()].is_none() && backward[tb.index()].is_none() {
                        queue.push_back((ta, tb));
                    }
                    pair(&mut forward, &mut backward, ta, tb)?;
                }
                _ => return None,
            }
        }
        // Repeated targets on one symbol leave transitions unpaired.
        if paired != degree {
            return None;
        }
    }

    forward.into_iter().collect()
}

pub fn are_isomorphic(a: &Automaton, b: &Automaton) -> bool {
    find_isomorphism(a, b).is_some()
}

/// Record `sa ↔ sb`, failing if either side is already paired elsewhere.
fn pair(
    forward: &mut [Option<StateId>],
    backward: &mut [Option<StateId>],
    sa: StateId,
    sb: StateId,
) -> Option<()> {
    match (forward[sa.index()], backward[sb.index()]) {
        (None, None) => {
            forward[sa.index()] = Some(sb);
            backward[sb.index()] = Some(sa);
            Some(())
        }
        (Some(fb), Some(ba)) if fb == sb && ba == sa => Some(()),
        _ => None,
    }
}
