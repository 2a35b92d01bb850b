//! FILENAME: app/src/config.rs
// PURPOSE: Host configuration, loaded from a JSON file and overridden by flags.
// CONTEXT: All fields use camelCase and have defaults, so an empty object
// (or no file at all) is a valid configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use parser::ParenMode;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// Verbosity of the unified log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(value: &str) -> Option<LogLevel> {
        match value.to_ascii_lowercase().as_str() {
            "off" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// How the evaluation report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CalcConfig {
    /// Strict rejects unbalanced parentheses; lenient tolerates them.
    pub paren_mode: ParenMode,
    pub log_level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    pub output_format: OutputFormat,
    /// Include tokens, RPN, and per-step stacks in the output.
    pub trace: bool,
    /// Values for `#{name}` placeholders.
    pub bindings: BTreeMap<String, f64>,
}

impl CalcConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Reads a configuration file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text).map_err(|source| CalcError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
