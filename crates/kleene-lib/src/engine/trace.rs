//! Tracing infrastructure for evaluator runs.
//!
//! `NoopTracer` methods are `#[inline(always)]` empty functions, so an
//! untraced evaluator carries no tracing cost. `PrintTracer` collects
//! formatted lines and resolves state names itself; the evaluator only hands
//! it raw state sets.

use crate::Colors;
use crate::automaton::{Automaton, StateSet};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Default: one line per symbol, long state sets elided.
    #[default]
    Default,
    /// Verbose (-v): full state sets, final states marked.
    Verbose,
    /// Very verbose (-vv): also the states reached before epsilon-closure.
    VeryVerbose,
}

/// Evaluator instrumentation.
///
/// - `trace_reset` - current set replaced by the initial closure
/// - `trace_step` - after consuming a symbol; `moved` is the set before
///   epsilon-closure, `closed` the new current set
/// - `trace_verdict` - at the end of `accepts`
pub trait Tracer {
    fn trace_reset(&mut self, initial: &StateSet);

    fn trace_step(&mut self, symbol: char, moved: &StateSet, closed: &StateSet);

    fn trace_verdict(&mut self, accepted: bool);
}

/// No-op tracer that gets optimized away.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_reset(&mut self, _initial: &StateSet) {}

    #[inline(always)]
    fn trace_step(&mut self, _symbol: char, _moved: &StateSet, _closed: &StateSet) {}

    #[inline(always)]
    fn trace_verdict(&mut self, _accepted: bool) {}
}

/// Sets larger than this are elided at default verbosity.
const ELIDE_AFTER: usize = 6;

/// Tracer that collects a readable execution trace.
pub struct PrintTracer<'a> {
    automaton: &'a Automaton,
    verbosity: Verbosity,
    /// Symbols consumed since the last reset.
    step: usize,
    lines: Vec<String>,
    colors: Colors,
}

impl<'a> PrintTracer<'a> {
    pub fn new(automaton: &'a Automaton, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            automaton,
            verbosity,
            step: 0,
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all collected lines to stdout.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn format_set(&self, states: &StateSet) -> String {
        let c = &self.colors;
        if states.is_empty() {
            return format!("{}∅{}", c.dim, c.reset);
        }

        let elide = self.verbosity == Verbosity::Default && states.len() > ELIDE_AFTER;
        let shown = if elide { ELIDE_AFTER } else { states.len() };

        let mut names: Vec<String> = states
            .iter()
            .take(shown)
            .map(|&s| {
                let state = self.automaton.state(s);
                if self.verbosity != Verbosity::Default && state.is_final() {
                    format!("{}{}*{}", c.green, state.name(), c.reset)
                } else {
                    format!("{}{}{}", c.blue, state.name(), c.reset)
                }
            })
            .collect();
        if elide {
            names.push(format!("{}+{}{}", c.dim, states.len() - shown, c.reset));
        }
        format!("{{{}}}", names.join(" "))
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_reset(&mut self, initial: &StateSet) {
        self.step = 0;
        let line = format!(
            "{}start{} {}",
            self.colors.dim,
            self.colors.reset,
            self.format_set(initial)
        );
        self.lines.push(line);
    }

    fn trace_step(&mut self, symbol: char, moved: &StateSet, closed: &StateSet) {
        self.step += 1;
        let c = self.colors;
        let line = format!(
            "{:>5} {}{symbol}{} {}",
            self.step,
            c.dim,
            c.reset,
            self.format_set(closed)
        );
        self.lines.push(line);

        if self.verbosity == Verbosity::VeryVerbose {
            let line = format!(
                "  {}moved{} {}",
                c.dim,
                c.reset,
                self.format_set(moved)
            );
            self.lines.push(line);
        }
    }

    fn trace_verdict(&mut self, accepted: bool) {
        let c = self.colors;
        let line = if accepted {
            format!("{}accept{}", c.green, c.reset)
        } else {
            format!("{}reject{}", c.red, c.reset)
        };
        self.lines.push(line);
    }
}
