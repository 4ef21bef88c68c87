//! Graphviz export.
//!
//! Parallel edges between the same pair of states are merged into one edge
//! whose label lists the symbols, in transition order.

use std::fmt::Write;

use indexmap::IndexMap;

use crate::automaton::{Automaton, StateId};

pub fn to_dot(automaton: &Automaton) -> String {
    let mut out = String::new();
    write_dot(&mut out, automaton).expect("String write never fails");
    out
}

fn write_dot(w: &mut impl Write, automaton: &Automaton) -> std::fmt::Result {
    let name = |id: StateId| quote(automaton.state(id).name());

    writeln!(w, "digraph automaton {{")?;
    writeln!(w, "    rankdir=LR;")?;
    writeln!(w, "    node [shape=circle];")?;
    writeln!(w, "    __start [shape=point, style=invis];")?;

    for (id, state) in automaton.iter() {
        if state.is_final() {
            writeln!(w, "    {} [shape=doublecircle];", name(id))?;
        } else {
            writeln!(w, "    {};", name(id))?;
        }
    }

    writeln!(w, "    __start -> {};", name(automaton.initial()))?;

    let mut edges: IndexMap<(StateId, StateId), Vec<String>> = IndexMap::new();
    for t in automaton.transitions() {
        edges
            .entry((t.from, t.to))
            .or_default()
            .push(t.symbol.to_string());
    }
    for ((from, to), labels) in &edges {
        writeln!(
            w,
            "    {} -> {} [label={}];",
            name(*from),
            name(*to),
            quote(&labels.join(","))
        )?;
    }

    writeln!(w, "}}")
}

fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
