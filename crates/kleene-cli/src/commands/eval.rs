//! Decide acceptance for a batch of input words.

use std::path::PathBuf;

use kleene_lib::Colors;
use kleene_lib::engine::Evaluator;

use super::run_common::{self, AutomatonInput};

pub struct EvalArgs {
    pub regex: Option<String>,
    pub path: Option<PathBuf>,
    pub inputs: Vec<String>,
    pub det: bool,
    pub min: bool,
    pub fuel: u32,
    pub color: bool,
}

pub fn run(args: EvalArgs) {
    let automaton = run_common::prepare_automaton(AutomatonInput {
        regex: args.regex.as_deref(),
        path: args.path.as_deref(),
        det: args.det,
        min: args.min,
        fuel: args.fuel,
        color: args.color,
    });

    let colors = Colors::new(args.color);
    let mut evaluator = Evaluator::new(&automaton);
    let mut all_accepted = true;

    for input in &args.inputs {
        match evaluator.accepts(input) {
            Ok(true) => println!("{}accept{} {:?}", colors.green, colors.reset, input),
            Ok(false) => {
                all_accepted = false;
                println!("{}reject{} {:?}", colors.red, colors.reset, input);
            }
            Err(e) => {
                eprintln!("error: {:?}: {}", input, e);
                std::process::exit(2);
            }
        }
    }

    if !all_accepted {
        std::process::exit(1);
    }
}
