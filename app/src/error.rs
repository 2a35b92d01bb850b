//! FILENAME: app/src/error.rs

use std::path::PathBuf;

use engine::EvalError;
use parser::{ScanError, TranslateError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("translation failed: {0}")]
    Translate(#[from] TranslateError),

    #[error("evaluation failed: {0}")]
    Eval(#[from] EvalError),

    #[error("empty expression")]
    EmptyExpression,

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Rejected by the argument parser; the message carries its own usage.
    #[error("{0}")]
    Cli(#[from] clap::Error),
}

impl CalcError {
    /// Name of the pipeline stage (or host concern) that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            CalcError::Scan(_) => "scan",
            CalcError::Translate(_) => "translate",
            CalcError::Eval(_) | CalcError::EmptyExpression => "evaluate",
            CalcError::Config { .. } => "config",
            CalcError::Io(_) => "io",
            CalcError::Json(_) => "output",
            CalcError::InvalidArgument(_) | CalcError::Cli(_) => "usage",
        }
    }

    /// Process exit status: 1 for expression failures, 2 for usage and setup.
    pub fn exit_code(&self) -> u8 {
        match self {
            CalcError::Scan(_)
            | CalcError::Translate(_)
            | CalcError::Eval(_)
            | CalcError::EmptyExpression
            | CalcError::Json(_) => 1,
            CalcError::Config { .. }
            | CalcError::Io(_)
            | CalcError::InvalidArgument(_)
            | CalcError::Cli(_) => 2,
        }
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
