//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but keep clap-level values
//! (`ColorChoice`, raw verbosity count, format name). The `From` impls
//! resolve those into what the command handlers consume.

use std::path::PathBuf;

use clap::ArgMatches;
use kleene_lib::compile::DEFAULT_RECURSION_FUEL;
use kleene_lib::engine::Verbosity;

use super::ColorChoice;
use crate::commands::build::BuildArgs;
use crate::commands::check::CheckArgs;
use crate::commands::convert::ConvertArgs;
use crate::commands::eval::EvalArgs;
use crate::commands::run_common::OutputFormat;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub regex: String,
    pub fuel: u32,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            regex: m.get_one::<String>("regex").cloned().unwrap_or_default(),
            fuel: parse_fuel(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            regex: p.regex,
            fuel: p.fuel,
            color: p.color.should_colorize(),
        }
    }
}

pub struct BuildParams {
    pub regex: String,
    pub det: bool,
    pub min: bool,
    pub fuel: u32,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl BuildParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            regex: m.get_one::<String>("regex").cloned().unwrap_or_default(),
            det: m.get_flag("det"),
            min: m.get_flag("min"),
            fuel: parse_fuel(m),
            format: parse_format(m),
            color: parse_color(m),
        }
    }
}

impl From<BuildParams> for BuildArgs {
    fn from(p: BuildParams) -> Self {
        Self {
            regex: p.regex,
            det: p.det,
            min: p.min,
            fuel: p.fuel,
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ConvertParams {
    pub path: PathBuf,
    pub det: bool,
    pub min: bool,
    pub format: OutputFormat,
    pub color: ColorChoice,
}

impl ConvertParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: m
                .get_one::<PathBuf>("automaton_path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            det: m.get_flag("det"),
            min: m.get_flag("min"),
            format: parse_format(m),
            color: parse_color(m),
        }
    }
}

impl From<ConvertParams> for ConvertArgs {
    fn from(p: ConvertParams) -> Self {
        Self {
            path: p.path,
            det: p.det,
            min: p.min,
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

pub struct EvalParams {
    pub regex: Option<String>,
    pub path: Option<PathBuf>,
    pub inputs: Vec<String>,
    pub det: bool,
    pub min: bool,
    pub fuel: u32,
    pub color: ColorChoice,
}

impl EvalParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            regex: m.get_one::<String>("regex_text").cloned(),
            path: m.get_one::<PathBuf>("automaton_file").cloned(),
            inputs: m
                .get_many::<String>("inputs")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            det: m.get_flag("det"),
            min: m.get_flag("min"),
            fuel: parse_fuel(m),
            color: parse_color(m),
        }
    }
}

impl From<EvalParams> for EvalArgs {
    fn from(p: EvalParams) -> Self {
        Self {
            regex: p.regex,
            path: p.path,
            inputs: p.inputs,
            det: p.det,
            min: p.min,
            fuel: p.fuel,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub regex: Option<String>,
    pub path: Option<PathBuf>,
    pub input: String,
    pub det: bool,
    pub min: bool,
    pub fuel: u32,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            regex: m.get_one::<String>("regex_text").cloned(),
            path: m.get_one::<PathBuf>("automaton_file").cloned(),
            input: m.get_one::<String>("input").cloned().unwrap_or_default(),
            det: m.get_flag("det"),
            min: m.get_flag("min"),
            fuel: parse_fuel(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            regex: p.regex,
            path: p.path,
            input: p.input,
            det: p.det,
            min: p.min,
            fuel: p.fuel,
            verbosity,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    m.get_one::<String>("format")
        .and_then(|name| OutputFormat::from_name(name))
        .unwrap_or_default()
}

fn parse_fuel(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("fuel")
        .copied()
        .unwrap_or(DEFAULT_RECURSION_FUEL)
}
