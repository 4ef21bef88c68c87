//! Compact automaton listing for terminals.
//!
//! ```text
//! → q0
//!     a → q1
//!     ε → q0, q2
//!   q1 *
//! ```
//!
//! `→` marks the initial state, `*` final states. Transitions are grouped by
//! symbol, epsilon first, then alphabet order.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::Colors;
use crate::automaton::{Automaton, Symbol};

pub struct AutomatonPrinter<'a> {
    automaton: &'a Automaton,
    colors: Colors,
}

impl<'a> AutomatonPrinter<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = &self.colors;
        let a = self.automaton;

        for (id, state) in a.iter() {
            let marker = if id == a.initial() { "→" } else { " " };
            if state.is_final() {
                writeln!(w, "{marker} {}{}{} *", c.green, state.name(), c.reset)?;
            } else {
                writeln!(w, "{marker} {}{}{}", c.blue, state.name(), c.reset)?;
            }

            let mut by_symbol: BTreeMap<Symbol, Vec<&str>> = BTreeMap::new();
            for t in a.outgoing(id) {
                by_symbol
                    .entry(t.symbol)
                    .or_default()
                    .push(a.state(t.to).name());
            }
            for (symbol, targets) in &by_symbol {
                writeln!(
                    w,
                    "    {}{symbol} →{} {}",
                    c.dim,
                    c.reset,
                    targets.join(", ")
                )?;
            }
        }
        Ok(())
    }
}
