//! Trace evaluation of one input word.

use std::path::PathBuf;

use kleene_lib::Colors;
use kleene_lib::engine::{Evaluator, PrintTracer, Verbosity};

use super::run_common::{self, AutomatonInput};

pub struct TraceArgs {
    pub regex: Option<String>,
    pub path: Option<PathBuf>,
    pub input: String,
    pub det: bool,
    pub min: bool,
    pub fuel: u32,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let automaton = run_common::prepare_automaton(AutomatonInput {
        regex: args.regex.as_deref(),
        path: args.path.as_deref(),
        det: args.det,
        min: args.min,
        fuel: args.fuel,
        color: args.color,
    });

    let tracer = PrintTracer::new(&automaton, args.verbosity, Colors::new(args.color));
    let mut evaluator = Evaluator::with_tracer(&automaton, tracer);
    let result = evaluator.accepts(&args.input);
    evaluator.into_tracer().print();

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("runtime error: {}", e);
            std::process::exit(2);
        }
    }
}
