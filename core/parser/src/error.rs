//! FILENAME: core/parser/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScanError {
    /// No token pattern matches at `offset` (a char index into the input with
    /// whitespace removed).
    #[error("Unexpected character '{character}' at offset {offset} (remaining input: \"{remainder}\")")]
    UnexpectedCharacter {
        character: char,
        offset: usize,
        remainder: String,
    },
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum TranslateError {
    /// A ')' closed nothing, or a '(' was never closed.
    #[error("Unbalanced parentheses: {0}")]
    UnbalancedParentheses(ParenImbalance),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ParenImbalance {
    /// Token index of the ')' that had no matching '('.
    UnmatchedClose { position: usize },
    /// Number of '(' left open at the end of input.
    UnclosedOpen { count: usize },
}

impl std::fmt::Display for ParenImbalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParenImbalance::UnmatchedClose { position } => {
                write!(f, "')' at token {} has no matching '('", position)
            }
            ParenImbalance::UnclosedOpen { count } => {
                write!(f, "{} '(' left unclosed", count)
            }
        }
    }
}

pub type ScanResult<T> = Result<T, ScanError>;
pub type TranslateResult<T> = Result<T, TranslateError>;
