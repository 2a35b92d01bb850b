//! FILENAME: app/src/lib.rs
// PURPOSE: Library root for the rpncalc host.
// CONTEXT: Wires configuration, logging, and placeholder bindings around the
// parser and engine crates. main.rs only calls `run()`.

use std::process::ExitCode;

pub mod api_types;
pub mod bindings;
pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use api_types::{format_result, EvaluationReport};
pub use bindings::Bindings;
pub use calculation::evaluate_expression;
pub use cli::{parse_args, CliArgs, CliCommand};
pub use config::{CalcConfig, LogLevel, OutputFormat};
pub use error::{CalcError, CalcResult};

/// Runs the command line and returns the process exit status.
pub fn run() -> ExitCode {
    ExitCode::from(execute(std::env::args().skip(1)))
}

/// Runs with explicit arguments (program name excluded). Prints the report
/// to stdout and errors to stderr, and returns 0, 1 (expression failed), or
/// 2 (usage or configuration error).
pub fn execute<I>(args: I) -> u8
where
    I: IntoIterator<Item = String>,
{
    let cli_args = match parse_args(args) {
        Ok(CliCommand::Help(text)) => {
            println!("{}", text);
            return 0;
        }
        Ok(CliCommand::Evaluate(cli_args)) => cli_args,
        Err(CalcError::Cli(e)) => {
            eprintln!("{}", e);
            return 2;
        }
        Err(e) => {
            eprintln!("error: {}", e);
            return e.exit_code();
        }
    };

    let (config, bindings) = match cli_args.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("error: {}", e);
            return e.exit_code();
        }
    };

    if let Err(e) = logging::init(config.log_level.into(), config.log_file.as_deref()) {
        eprintln!("error: cannot open log file: {}", e);
        return 2;
    }
    log_info!(
        "SYS",
        "rpncalc starting, paren_mode={:?} bindings={} format={:?}",
        config.paren_mode,
        bindings.len(),
        config.output_format
    );

    match report(&cli_args.expression, &config, &bindings) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            log_error!("CALC", "{} stage failed: {}", e.stage(), e);
            eprintln!("error: {}", e);
            e.exit_code()
        }
    }
}

/// Evaluates `expression` and renders the report in the configured format.
pub fn report(expression: &str, config: &CalcConfig, bindings: &Bindings) -> CalcResult<String> {
    let report = evaluate_expression(expression, config, bindings)?;
    match config.output_format {
        OutputFormat::Text => Ok(report.to_text(config.trace)),
        OutputFormat::Json => Ok(report.to_json()?),
    }
}
