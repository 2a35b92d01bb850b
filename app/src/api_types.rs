//! FILENAME: app/src/api_types.rs
// PURPOSE: Report types produced by the host.
// CONTEXT: All structs use camelCase serialization for the JSON output format.

use engine::EvalStep;
use parser::{ParenMode, Token};
use serde::Serialize;

/// Everything known about one evaluated expression.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub expression: String,
    pub paren_mode: ParenMode,
    pub tokens: Vec<Token>,
    /// Postfix lexemes, in evaluation order.
    pub rpn: Vec<String>,
    /// Final value stack. Non-finite values serialize as null; see `display`.
    pub stack: Vec<f64>,
    pub result: f64,
    /// Result formatted for humans ("7", "3.5", "inf", "NaN").
    pub display: String,
    /// Per-lexeme stack snapshots, present when tracing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<EvalStep>>,
}

/// Formats a result without unnecessary decimal places.
pub fn format_result(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl EvaluationReport {
    /// Plain-text rendering. With `trace`, the tokens, postfix form, and
    /// stack snapshots are printed before the result.
    pub fn to_text(&self, trace: bool) -> String {
        if !trace {
            return self.display.clone();
        }

        let mut out = String::new();
        out.push_str(&format!("tokens: {}\n", join(&self.tokens)));
        out.push_str(&format!("rpn:    {}\n", self.rpn.join(" ")));
        if let Some(steps) = &self.steps {
            for step in steps {
                let stack: Vec<String> = step.stack.iter().map(|v| format_result(*v)).collect();
                out.push_str(&format!("  {:>3} {:<10} [{}]\n", step.position, step.lexeme, stack.join(", ")));
            }
        }
        out.push_str(&format!("result: {}", self.display));
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
