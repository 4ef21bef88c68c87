use std::path::PathBuf;

use super::run_common::{self, AutomatonInput, OutputFormat};

pub struct ConvertArgs {
    pub path: PathBuf,
    pub det: bool,
    pub min: bool,
    pub format: OutputFormat,
    pub color: bool,
}

pub fn run(args: ConvertArgs) {
    let automaton = run_common::prepare_automaton(AutomatonInput {
        regex: None,
        path: Some(&args.path),
        det: args.det,
        min: args.min,
        fuel: kleene_lib::compile::DEFAULT_RECURSION_FUEL,
        color: args.color,
    });

    print!("{}", run_common::render(&automaton, args.format, args.color));
}
