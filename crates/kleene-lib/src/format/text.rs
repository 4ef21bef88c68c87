//! Line-oriented automaton description.
//!
//! ```text
//! Automaton:
//!     Symbols: 01
//!
//!     q0
//!     qf final
//!
//!     --> q0
//!     q0 -0-> q0
//!     q0 -1-> qf
//!     qf --> q0
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. States must be
//! declared before they are used.

use std::collections::HashMap;
use std::fmt::Write;

use crate::automaton::{Automaton, State, StateId, Symbol, Transition};
use crate::{Error, Result};

const HEADER: &str = "Automaton:";
const SYMBOLS: &str = "Symbols:";
const ARROW: &str = "-->";

/// Parse a description into a validated automaton.
pub fn read(description: &str) -> Result<Automaton> {
    let mut reader = Reader::default();
    let mut last_line = 0;

    for (index, raw) in description.lines().enumerate() {
        let line = index + 1;
        last_line = line;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        reader.line(line, text)?;
    }

    reader.finish(last_line)
}

#[derive(Default)]
struct Reader {
    seen_header: bool,
    seen_symbols: bool,
    alphabet: Vec<char>,
    states: Vec<State>,
    ids: HashMap<String, StateId>,
    initial: Option<StateId>,
    transitions: Vec<Transition>,
}

impl Reader {
    fn line(&mut self, line: usize, text: &str) -> Result<()> {
        if !self.seen_header {
            if text != HEADER {
                return Err(format_error(line, format!("expected `{HEADER}`")));
            }
            self.seen_header = true;
            return Ok(());
        }

        if let Some(symbols) = text.strip_prefix(SYMBOLS) {
            if self.seen_symbols {
                return Err(format_error(line, "symbols declared twice"));
            }
            self.seen_symbols = true;
            self.alphabet = symbols.chars().filter(|c| !c.is_whitespace()).collect();
            return Ok(());
        }

        let words: Vec<&str> = text.split_whitespace().collect();
        match words.as_slice() {
            [ARROW, name] => {
                if self.initial.is_some() {
                    return Err(format_error(line, "initial state declared twice"));
                }
                self.initial = Some(self.resolve(line, name)?);
            }
            [from, arrow, to] => {
                let symbol = parse_arrow(arrow)
                    .ok_or_else(|| format_error(line, format!("invalid arrow `{arrow}`")))?;
                let from = self.resolve(line, from)?;
                let to = self.resolve(line, to)?;
                self.transitions.push(Transition::new(from, symbol, to));
            }
            [name] => self.declare(line, name, false)?,
            [name, "final"] => self.declare(line, name, true)?,
            _ => return Err(format_error(line, format!("unrecognized line `{text}`"))),
        }
        Ok(())
    }

    fn declare(&mut self, line: usize, name: &str, is_final: bool) -> Result<()> {
        if self.ids.contains_key(name) {
            return Err(format_error(line, format!("state `{name}` declared twice")));
        }
        let id = StateId::from_index(self.states.len());
        self.ids.insert(name.to_string(), id);
        self.states.push(State::new(name, is_final));
        Ok(())
    }

    fn resolve(&self, line: usize, name: &str) -> Result<StateId> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| format_error(line, format!("unknown state `{name}`")))
    }

    fn finish(self, last_line: usize) -> Result<Automaton> {
        if !self.seen_header {
            return Err(format_error(last_line, format!("expected `{HEADER}`")));
        }
        let Some(initial) = self.initial else {
            return Err(format_error(last_line, "missing initial state"));
        };
        Ok(Automaton::new(
            initial,
            self.states,
            self.alphabet,
            self.transitions,
        )?)
    }
}

/// `-->` is epsilon, `-c->` consumes `c`.
fn parse_arrow(arrow: &str) -> Option<Symbol> {
    if arrow == ARROW {
        return Some(Symbol::Epsilon);
    }
    let mut chars = arrow.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some('-'), Some(c), Some('-'), Some('>'), None) => Some(Symbol::Char(c)),
        _ => None,
    }
}

fn format_error(line: usize, message: impl Into<String>) -> Error {
    Error::Format {
        line,
        message: message.into(),
    }
}

/// Render in the format accepted by [`read`].
pub fn write(automaton: &Automaton) -> String {
    let mut out = String::new();
    write_to(&mut out, automaton).expect("String write never fails");
    out
}

fn write_to(w: &mut impl Write, automaton: &Automaton) -> std::fmt::Result {
    writeln!(w, "{HEADER}")?;
    let symbols: String = automaton.alphabet().iter().collect();
    if symbols.is_empty() {
        writeln!(w, "    {SYMBOLS}")?;
    } else {
        writeln!(w, "    {SYMBOLS} {symbols}")?;
    }

    writeln!(w)?;
    for (_, state) in automaton.iter() {
        if state.is_final() {
            writeln!(w, "    {} final", state.name())?;
        } else {
            writeln!(w, "    {}", state.name())?;
        }
    }

    writeln!(w)?;
    let name = move |id: StateId| automaton.state(id).name();
    writeln!(w, "    {ARROW} {}", name(automaton.initial()))?;
    for t in automaton.transitions() {
        match t.symbol {
            Symbol::Epsilon => writeln!(w, "    {} {ARROW} {}", name(t.from), name(t.to))?,
            Symbol::Char(c) => writeln!(w, "    {} -{c}-> {}", name(t.from), name(t.to))?,
        }
    }
    Ok(())
}
