//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Regular expression (positional).
pub fn regex_arg() -> Arg {
    Arg::new("regex")
        .value_name("REGEX")
        .required(true)
        .help("Regular expression, e.g. '(a+b)*.c'")
}

/// Automaton description file (positional), `-` for stdin.
pub fn automaton_path_arg() -> Arg {
    Arg::new("automaton_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Automaton description file, or '-' for stdin")
}

/// Inline regex source (-r/--regex).
pub fn regex_text_arg() -> Arg {
    Arg::new("regex_text")
        .short('r')
        .long("regex")
        .value_name("REGEX")
        .conflicts_with("automaton_file")
        .help("Build the automaton from a regular expression")
}

/// Automaton file source (-a/--automaton).
pub fn automaton_file_arg() -> Arg {
    Arg::new("automaton_file")
        .short('a')
        .long("automaton")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read the automaton from a description file ('-' for stdin)")
}

/// Input words to evaluate (positional, one or more).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("INPUT")
        .required(true)
        .num_args(1..)
        .action(ArgAction::Append)
        .help("Input words")
}

/// Single input word (positional).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .required(true)
        .help("Input word")
}

/// Determinize before output (--det).
pub fn det_arg() -> Arg {
    Arg::new("det")
        .long("det")
        .action(ArgAction::SetTrue)
        .help("Determinize (subset construction)")
}

/// Minimize before output (--min). Determinizes first when needed.
pub fn min_arg() -> Arg {
    Arg::new("min")
        .long("min")
        .action(ArgAction::SetTrue)
        .help("Minimize (implies --det for nondeterministic input)")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json", "dot", "pretty"])
        .help("Output format")
}

/// Group nesting limit for regex parsing (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value("4096")
        .value_parser(value_parser!(u32))
        .help("Maximum regex group nesting")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
