//! FILENAME: app/src/cli.rs
// PURPOSE: Command-line argument handling.

use std::path::PathBuf;

use clap::{App, AppSettings, Arg, ArgMatches, ErrorKind};
use parser::ParenMode;

use crate::bindings::Bindings;
use crate::config::{CalcConfig, LogLevel, OutputFormat};
use crate::error::{CalcError, CalcResult};

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub json: bool,
    pub trace: bool,
    pub paren_mode: Option<ParenMode>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
    pub assignments: Vec<(String, f64)>,
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Rendered help text.
    Help(String),
    Evaluate(CliArgs),
}

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("rpncalc")
        .about("Evaluates an infix arithmetic expression (digits, + - * /, parentheses, and #{name} placeholders).")
        .setting(AppSettings::DisableVersion)
        .arg(
            Arg::with_name("config")
                .long("config")
                .takes_value(true)
                .value_name("FILE")
                .help("Load settings from a JSON config file"))
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print the full evaluation report as JSON"))
        .arg(
            Arg::with_name("trace")
                .long("trace")
                .help("Print tokens, RPN, and stack steps"))
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .conflicts_with("lenient")
                .help("Reject unbalanced parentheses (default)"))
        .arg(
            Arg::with_name("lenient")
                .long("lenient")
                .help("Tolerate unbalanced parentheses"))
        .arg(
            Arg::with_name("set")
                .long("set")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .value_name("NAME=VALUE")
                .help("Bind placeholder #{NAME} (repeatable)"))
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .takes_value(true)
                .possible_values(LOG_LEVELS)
                .case_insensitive(true)
                .value_name("LEVEL")
                .help("Verbosity of the log on stderr"))
        .arg(
            Arg::with_name("log-file")
                .long("log-file")
                .takes_value(true)
                .value_name("FILE")
                .help("Also write log lines to FILE"))
        .arg(
            Arg::with_name("expression")
                .multiple(true)
                .required(true)
                .value_name("EXPRESSION")
                .help("Expression to evaluate; words are joined with spaces"))
}

/// Parses arguments (without the program name).
pub fn parse_args<I>(args: I) -> CalcResult<CliCommand>
where
    I: IntoIterator<Item = String>,
{
    let argv = std::iter::once("rpncalc".to_string()).chain(args);
    match app().get_matches_from_safe(argv) {
        Ok(matches) => Ok(CliCommand::Evaluate(CliArgs::from_matches(&matches)?)),
        Err(e) if e.kind == ErrorKind::HelpDisplayed => Ok(CliCommand::Help(e.message)),
        Err(e) => Err(e.into()),
    }
}

impl CliArgs {
    fn from_matches(matches: &ArgMatches) -> CalcResult<Self> {
        let paren_mode = if matches.is_present("lenient") {
            Some(ParenMode::Lenient)
        } else if matches.is_present("strict") {
            Some(ParenMode::Strict)
        } else {
            None
        };

        let assignments = matches
            .values_of("set")
            .map(|values| values.map(Bindings::parse_assignment).collect::<CalcResult<Vec<_>>>())
            .transpose()?
            .unwrap_or_default();

        let expression = matches
            .values_of("expression")
            .map(|words| words.collect::<Vec<_>>().join(" "))
            .unwrap_or_default();
        if expression.trim().is_empty() {
            return Err(CalcError::InvalidArgument("missing EXPRESSION".to_string()));
        }

        Ok(CliArgs {
            config_path: matches.value_of("config").map(PathBuf::from),
            json: matches.is_present("json"),
            trace: matches.is_present("trace"),
            paren_mode,
            log_level: matches.value_of("log-level").and_then(LogLevel::parse),
            log_file: matches.value_of("log-file").map(PathBuf::from),
            assignments,
            expression,
        })
    }

    /// Applies command-line overrides on top of a loaded configuration.
    /// Returns the effective config and the placeholder bindings.
    pub fn apply(&self, mut config: CalcConfig) -> (CalcConfig, Bindings) {
        if self.json {
            config.output_format = OutputFormat::Json;
        }
        if self.trace {
            config.trace = true;
        }
        if let Some(mode) = self.paren_mode {
            config.paren_mode = mode;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }

        let mut bindings = Bindings::from_map(config.bindings.clone());
        for (name, value) in &self.assignments {
            bindings.set(name.clone(), *value);
        }

        (config, bindings)
    }

    /// Loads the config file named by `--config` (or the defaults) and
    /// applies the remaining flags.
    pub fn resolve(&self) -> CalcResult<(CalcConfig, Bindings)> {
        let config = match &self.config_path {
            Some(path) => CalcConfig::load(path)?,
            None => CalcConfig::default(),
        };
        Ok(self.apply(config))
    }
}
