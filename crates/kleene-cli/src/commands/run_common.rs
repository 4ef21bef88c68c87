//! Shared pipeline for commands that build or read an automaton.

use std::fmt::Display;
use std::path::Path;

use kleene_lib::format::{AutomatonPrinter, dot, json, text};
use kleene_lib::{Automaton, Colors, Error, RegexBuilder};

use super::loader::load_automaton;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Dot,
    Pretty,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "dot" => Some(Self::Dot),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

pub struct AutomatonInput<'a> {
    pub regex: Option<&'a str>,
    pub path: Option<&'a Path>,
    pub det: bool,
    pub min: bool,
    pub fuel: u32,
    pub color: bool,
}

/// Build or load the automaton, then apply `--det` / `--min`.
/// Exits the process on any error.
pub fn prepare_automaton(input: AutomatonInput<'_>) -> Automaton {
    let automaton = match (input.regex, input.path) {
        (Some(regex), _) => build_regex(regex, input.fuel, input.color),
        (None, Some(path)) => load_automaton(path).unwrap_or_else(|e| fail(e)),
        (None, None) => fail("automaton is required: use -r/--regex or -a/--automaton"),
    };

    transform(automaton, input.det, input.min).unwrap_or_else(|e| fail(e))
}

pub fn build_regex(regex: &str, fuel: u32, color: bool) -> Automaton {
    match RegexBuilder::new()
        .with_recursion_fuel(Some(fuel))
        .build(regex)
    {
        Ok(nfa) => nfa,
        Err(Error::RegexParse(diagnostics)) => {
            eprint!("{}", diagnostics.render_colored(regex, color));
            std::process::exit(1);
        }
        Err(e) => fail(e),
    }
}

/// Minimizing a nondeterministic automaton determinizes it first.
pub fn transform(automaton: Automaton, det: bool, min: bool) -> kleene_lib::Result<Automaton> {
    let automaton = if det || (min && !automaton.is_deterministic()) {
        automaton.to_deterministic()
    } else {
        automaton
    };

    if min {
        automaton.to_minimized()
    } else {
        Ok(automaton)
    }
}

pub fn render(automaton: &Automaton, format: OutputFormat, color: bool) -> String {
    match format {
        OutputFormat::Text => text::write(automaton),
        OutputFormat::Dot => dot::to_dot(automaton),
        OutputFormat::Json => {
            let mut out = json::to_json(automaton, true).unwrap_or_else(|e| fail(e));
            out.push('\n');
            out
        }
        OutputFormat::Pretty => AutomatonPrinter::new(automaton)
            .colored(Colors::new(color))
            .render(),
    }
}

pub fn fail(message: impl Display) -> ! {
    eprintln!("error: {}", message);
    std::process::exit(1);
}
