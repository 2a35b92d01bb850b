//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the postfix evaluation engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod error;
pub mod evaluator;

// Re-export commonly used types at the crate root
pub use error::{EvalError, EvalResult};
pub use evaluator::{eval_rpn, evaluate_single, EvalStep, Evaluator, Resolver};
