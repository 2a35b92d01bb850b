//! FILENAME: core/engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum EvalError {
    /// An operator found fewer than two values on the stack.
    #[error("Stack underflow: operator '{operator}' at position {position} needs 2 values, found {available}")]
    StackUnderflow {
        operator: char,
        position: usize,
        available: usize,
    },

    /// An operand lexeme could not be turned into a number. Unresolved
    /// placeholders end up here.
    #[error("Non-numeric operand \"{lexeme}\" at position {position}")]
    NonNumericOperand { lexeme: String, position: usize },

    /// The expression did not reduce to exactly one value.
    #[error("Malformed expression: evaluation left {remaining} values on the stack")]
    MalformedExpression { remaining: usize },
}

pub type EvalResult<T> = Result<T, EvalError>;
