//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the expression scanner and RPN translator.
//! CONTEXT: This crate turns an infix arithmetic string into a postfix token
//! sequence. Evaluation of that sequence lives in the engine crate.
//!
//! PIPELINE: Expression String --> Scanner --> Tokens --> Translator --> RPN Tokens
//!
//! SUPPORTED FEATURES:
//! - Non-negative integer literals: 0, 12, 007
//! - Placeholder operands: #{name}, #{}
//! - Binary operators: + - * / (two precedence classes, left-associative)
//! - Parentheses for grouping
//! - Whitespace anywhere (removed before scanning)

pub mod error;
pub mod lexer;
pub mod token;
pub mod translator;

// Register the separate tests module
#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use error::{ParenImbalance, ScanError, ScanResult, TranslateError, TranslateResult};
pub use lexer::{scan, Scanner};
pub use token::{priority, placeholder_name, OperandValue, Operator, Precedence, Token, TokenKind};
pub use translator::{to_rpn, ParenMode, Translator};

/// Collects the lexemes of a token sequence, the form the evaluator consumes.
pub fn lexemes(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(Token::lexeme).collect()
}
