//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for rpncalc integration tests.

#![allow(dead_code)]

use parser::ParenMode;
use rpncalc_lib::{evaluate_expression, Bindings, CalcConfig, CalcResult, EvaluationReport};

/// Test harness holding a configuration and placeholder bindings.
pub struct TestHarness {
    pub config: CalcConfig,
    pub bindings: Bindings,
}

impl TestHarness {
    /// Create a harness with the default (strict) configuration.
    pub fn new() -> Self {
        TestHarness {
            config: CalcConfig::default(),
            bindings: Bindings::new(),
        }
    }

    /// Create a harness that tolerates unbalanced parentheses.
    pub fn lenient() -> Self {
        let mut harness = Self::new();
        harness.config.paren_mode = ParenMode::Lenient;
        harness
    }

    /// Create a harness that records evaluation steps.
    pub fn tracing() -> Self {
        let mut harness = Self::new();
        harness.config.trace = true;
        harness
    }

    pub fn with_binding(mut self, name: &str, value: f64) -> Self {
        self.bindings.set(name, value);
        self
    }

    pub fn evaluate(&self, expression: &str) -> CalcResult<EvaluationReport> {
        evaluate_expression(expression, &self.config, &self.bindings)
    }

    /// Evaluate and return the numeric result, panicking on failure.
    pub fn result(&self, expression: &str) -> f64 {
        match self.evaluate(expression) {
            Ok(report) => report.result,
            Err(e) => panic!("evaluating {:?} failed: {}", expression, e),
        }
    }

    /// Evaluate and return the postfix lexemes.
    pub fn rpn(&self, expression: &str) -> Vec<String> {
        match self.evaluate(expression) {
            Ok(report) => report.rpn,
            Err(e) => panic!("evaluating {:?} failed: {}", expression, e),
        }
    }
}

/// Build an argument vector from string slices.
pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
