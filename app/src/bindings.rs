//! FILENAME: app/src/bindings.rs
// PURPOSE: Placeholder values supplied from outside the expression.
// CONTEXT: The engine never resolves `#{name}` operands by itself; the host
// hands it a Bindings table through the Resolver trait.

use std::collections::BTreeMap;

use engine::Resolver;

use crate::error::{CalcError, CalcResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    values: BTreeMap<String, f64>,
}

impl Bindings {
    pub fn new() -> Self {
        Bindings::default()
    }

    pub fn from_map(values: BTreeMap<String, f64>) -> Self {
        Bindings { values }
    }

    /// Binds `name`, replacing any earlier value.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parses a `NAME=VALUE` assignment. NAME follows the placeholder
    /// identifier rules (ASCII alphanumeric, possibly empty); VALUE is any
    /// finite number, including negatives and decimals.
    pub fn parse_assignment(text: &str) -> CalcResult<(String, f64)> {
        let (name, value) = text
            .split_once('=')
            .ok_or_else(|| CalcError::InvalidArgument(format!("expected NAME=VALUE, got \"{}\"", text)))?;

        let name = name.trim();
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CalcError::InvalidArgument(format!(
                "placeholder name \"{}\" must be alphanumeric",
                name
            )));
        }

        let value = value.trim().parse::<f64>().map_err(|_| {
            CalcError::InvalidArgument(format!("value for \"{}\" is not a number: \"{}\"", name, value))
        })?;
        if !value.is_finite() {
            return Err(CalcError::InvalidArgument(format!(
                "value for \"{}\" must be finite, got {}",
                name, value
            )));
        }

        Ok((name.to_string(), value))
    }
}

impl Resolver for Bindings {
    fn resolve(&self, name: &str) -> Option<f64> {
        self.get(name)
    }
}
