use super::run_common::{self, AutomatonInput, OutputFormat};

pub struct BuildArgs {
    pub regex: String,
    pub det: bool,
    pub min: bool,
    pub fuel: u32,
    pub format: OutputFormat,
    pub color: bool,
}

pub fn run(args: BuildArgs) {
    let automaton = run_common::prepare_automaton(AutomatonInput {
        regex: Some(&args.regex),
        path: None,
        det: args.det,
        min: args.min,
        fuel: args.fuel,
        color: args.color,
    });

    print!("{}", run_common::render(&automaton, args.format, args.color));
}
