//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Transformation flags shared by every command that produces an automaton.
fn with_pipeline_args(cmd: Command) -> Command {
    cmd.arg(det_arg()).arg(min_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("kleene")
        .about("Compile regular expressions into canonical finite automata")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(build_command())
        .subcommand(convert_command())
        .subcommand(eval_command())
        .subcommand(trace_command())
}

/// Parse a regex and report diagnostics.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Parse a regular expression and report errors")
        .override_usage("  kleene check <REGEX>")
        .after_help(
            r#"EXAMPLES:
  kleene check '(a+b)*.c'          # silent on success
  kleene check 'a.(b+'             # renders diagnostics, exits 1"#,
        )
        .arg(regex_arg())
        .arg(fuel_arg())
        .arg(color_arg())
}

/// Compile a regex and print the resulting automaton.
pub fn build_command() -> Command {
    let cmd = Command::new("build")
        .about("Compile a regular expression into an automaton")
        .override_usage("  kleene build <REGEX> [--det] [--min] [--format <FORMAT>]")
        .after_help(
            r#"EXAMPLES:
  kleene build 'a*.b'                   # Thompson NFA
  kleene build 'a*.b' --det             # subset construction
  kleene build 'a*.b' --min             # minimal DFA
  kleene build 'a*.b' --min --format dot | dot -Tsvg > min.svg"#,
        )
        .arg(regex_arg())
        .arg(format_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    with_pipeline_args(cmd)
}

/// Read an automaton description and print it after the requested transformations.
pub fn convert_command() -> Command {
    let cmd = Command::new("convert")
        .about("Transform an automaton read from a description file")
        .override_usage(
            "\
  kleene convert <FILE> [--det] [--min] [--format <FORMAT>]
  kleene convert - [--det] [--min] [--format <FORMAT>]",
        )
        .after_help(
            r#"EXAMPLES:
  kleene convert nfa.txt --min          # minimize a described automaton
  kleene convert nfa.txt --format json  # same automaton as JSON
  cat nfa.txt | kleene convert - --det  # read from stdin"#,
        )
        .arg(automaton_path_arg())
        .arg(format_arg())
        .arg(color_arg());

    with_pipeline_args(cmd)
}

/// Run an automaton on input words.
pub fn eval_command() -> Command {
    let cmd = Command::new("eval")
        .about("Decide whether input words are accepted")
        .override_usage(
            "\
  kleene eval -r <REGEX> <INPUT>...
  kleene eval -a <FILE> <INPUT>...",
        )
        .after_help(
            r#"EXAMPLES:
  kleene eval -r 'a*.b' b aab ba        # one verdict per input
  kleene eval -r 'a*' ''                # empty word
  kleene eval -a dfa.txt 0101 --min     # evaluate the minimized automaton

Exit status is 1 when some input is rejected, 2 when an input
contains a symbol outside the alphabet."#,
        )
        .arg(regex_text_arg())
        .arg(automaton_file_arg())
        .arg(inputs_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    with_pipeline_args(cmd)
}

/// Trace evaluation of one word.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace evaluation of one input word")
        .override_usage(
            "\
  kleene trace -r <REGEX> <INPUT> [-v|-vv]
  kleene trace -a <FILE> <INPUT> [-v|-vv]",
        )
        .after_help(
            r#"EXAMPLES:
  kleene trace -r '(a+b)*.c' abc        # state sets after each step
  kleene trace -r '(a+b)*.c' abc -vv    # also show sets before closure
  kleene trace -a dfa.txt 0110 -v       # mark accepting states"#,
        )
        .arg(regex_text_arg())
        .arg(automaton_file_arg())
        .arg(input_arg())
        .arg(verbose_arg())
        .arg(fuel_arg())
        .arg(color_arg());

    with_pipeline_args(cmd)
}
