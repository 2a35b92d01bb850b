//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Reduces a postfix (RPN) lexeme sequence with a value stack.
//! CONTEXT: Final stage of the pipeline. The translator has already removed
//! parentheses and ordered operators, so evaluation is a single left-to-right
//! pass with no precedence lookups.
//!
//! RULES:
//! - "+" "-" "*" "/" : pop second, pop first, push (first op second)
//! - anything else   : classified as an operand and pushed as a number
//!
//! Division by zero is not special-cased: results follow IEEE-754, so 3/0 is
//! +inf, -3/0 is -inf, and 0/0 is NaN.

use crate::error::{EvalError, EvalResult};
use parser::{OperandValue, Operator};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Snapshot of the value stack after one lexeme has been processed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvalStep {
    pub position: usize,
    pub lexeme: String,
    pub stack: Vec<f64>,
}

/// Supplies numbers for `#{name}` placeholder operands.
pub trait Resolver {
    /// Returns the value bound to `name`, or None if it is unbound.
    fn resolve(&self, name: &str) -> Option<f64>;
}

impl Resolver for HashMap<String, f64> {
    fn resolve(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl Resolver for BTreeMap<String, f64> {
    fn resolve(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

/// Postfix evaluator. Without a resolver every placeholder is an error.
#[derive(Default, Clone, Copy)]
pub struct Evaluator<'a> {
    resolver: Option<&'a dyn Resolver>,
}

impl<'a> Evaluator<'a> {
    pub fn new() -> Self {
        Evaluator { resolver: None }
    }

    pub fn with_resolver(resolver: &'a dyn Resolver) -> Self {
        Evaluator {
            resolver: Some(resolver),
        }
    }

    /// Evaluates `lexemes` and returns whatever remains on the stack.
    /// A well-formed expression leaves exactly one value.
    pub fn eval_rpn<S: AsRef<str>>(&self, lexemes: &[S]) -> EvalResult<Vec<f64>> {
        self.reduce(lexemes, |_, _, _| {})
    }

    /// Evaluates `lexemes` and records the stack after every lexeme.
    pub fn trace<S: AsRef<str>>(&self, lexemes: &[S]) -> EvalResult<Vec<EvalStep>> {
        let mut steps = Vec::with_capacity(lexemes.len());
        self.reduce(lexemes, |position, lexeme, stack| {
            steps.push(EvalStep {
                position,
                lexeme: lexeme.to_string(),
                stack: stack.to_vec(),
            });
        })?;
        Ok(steps)
    }

    fn reduce<S, F>(&self, lexemes: &[S], mut on_step: F) -> EvalResult<Vec<f64>>
    where
        S: AsRef<str>,
        F: FnMut(usize, &str, &[f64]),
    {
        let mut stack: Vec<f64> = Vec::with_capacity(lexemes.len());

        for (position, lexeme) in lexemes.iter().enumerate() {
            let lexeme = lexeme.as_ref();

            if let Some(op) = Operator::from_lexeme(lexeme) {
                let available = stack.len();
                let (Some(second), Some(first)) = (stack.pop(), stack.pop()) else {
                    return Err(EvalError::StackUnderflow {
                        operator: op.symbol(),
                        position,
                        available,
                    });
                };
                stack.push(op.apply(first, second));
            } else {
                stack.push(self.operand(lexeme, position)?);
            }

            on_step(position, lexeme, &stack);
        }

        log::trace!(target: "engine::evaluator", "final stack: {:?}", stack);
        Ok(stack)
    }

    /// Evaluates `lexemes` and requires exactly one value on the final stack.
    pub fn evaluate<S: AsRef<str>>(&self, lexemes: &[S]) -> EvalResult<f64> {
        let stack = self.eval_rpn(lexemes)?;
        match stack.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvalError::MalformedExpression {
                remaining: stack.len(),
            }),
        }
    }

    fn operand(&self, lexeme: &str, position: usize) -> EvalResult<f64> {
        let non_numeric = || EvalError::NonNumericOperand {
            lexeme: lexeme.to_string(),
            position,
        };

        match OperandValue::classify(lexeme) {
            Some(OperandValue::Number(n)) => Ok(n),
            Some(OperandValue::Placeholder(name)) => {
                let value = self.resolver.and_then(|r| r.resolve(&name));
                match value {
                    Some(n) => {
                        log::debug!(target: "engine::evaluator", "resolved #{{{}}} = {}", name, n);
                        Ok(n)
                    }
                    None => Err(non_numeric()),
                }
            }
            None => Err(non_numeric()),
        }
    }
}

/// Evaluates postfix `lexemes` with no placeholder resolution and returns the
/// final stack.
pub fn eval_rpn<S: AsRef<str>>(lexemes: &[S]) -> EvalResult<Vec<f64>> {
    Evaluator::new().eval_rpn(lexemes)
}

/// Evaluates postfix `lexemes` to a single number.
pub fn evaluate_single<S: AsRef<str>>(lexemes: &[S]) -> EvalResult<f64> {
    Evaluator::new().evaluate(lexemes)
}
