use crate::automaton::{Automaton, StateSet};
use crate::{Error, Result};

use super::trace::{NoopTracer, Tracer};

/// Runs an automaton, deterministic or not, one symbol at a time.
///
/// The current set is always epsilon-closed. Once it becomes empty it stays
/// empty until [`reset`](Self::reset).
pub struct Evaluator<'a, T: Tracer = NoopTracer> {
    automaton: &'a Automaton,
    current: StateSet,
    tracer: T,
}

impl<'a> Evaluator<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self::with_tracer(automaton, NoopTracer)
    }
}

impl<'a, T: Tracer> Evaluator<'a, T> {
    /// The starting closure is reported to the tracer on the first
    /// [`reset`](Self::reset), which [`accepts`](Self::accepts) performs.
    pub fn with_tracer(automaton: &'a Automaton, tracer: T) -> Self {
        let current = automaton.initial_closure();
        Self {
            automaton,
            current,
            tracer,
        }
    }

    pub fn automaton(&self) -> &'a Automaton {
        self.automaton
    }

    pub fn current_states(&self) -> &StateSet {
        &self.current
    }

    pub fn reset(&mut self) {
        self.current = self.automaton.initial_closure();
        self.tracer.trace_reset(&self.current);
    }

    /// Consume one symbol. Fails without changing state if `symbol` is not in
    /// the alphabet.
    pub fn advance(&mut self, symbol: char) -> Result<()> {
        if !self.automaton.alphabet().contains(&symbol) {
            return Err(Error::InvalidSymbol(symbol));
        }
        let moved = self.automaton.step(&self.current, symbol);
        self.current = self.automaton.epsilon_closure(&moved);
        self.tracer.trace_step(symbol, &moved, &self.current);
        Ok(())
    }

    pub fn is_accepting(&self) -> bool {
        self.automaton.any_final(&self.current)
    }

    /// Reset, feed every char of `input`, and report acceptance.
    pub fn accepts(&mut self, input: &str) -> Result<bool> {
        self.reset();
        for symbol in input.chars() {
            self.advance(symbol)?;
        }
        let accepted = self.is_accepting();
        self.tracer.trace_verdict(accepted);
        Ok(accepted)
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn into_tracer(self) -> T {
        self.tracer
    }
}
