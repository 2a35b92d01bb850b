//! FILENAME: app/src/calculation.rs
// PURPOSE: Runs one expression through scan, translate, and evaluate.
// CONTEXT: Each stage fails fast; no partial report is returned on error.

use engine::{EvalError, Evaluator};
use parser::{lexemes, Scanner, Translator};

use crate::api_types::{format_result, EvaluationReport};
use crate::bindings::Bindings;
use crate::config::CalcConfig;
use crate::error::{CalcError, CalcResult};
use crate::{log_debug, log_enter, log_exit, log_warn};

/// Evaluates `input` under `config`, resolving placeholders from `bindings`.
pub fn evaluate_expression(
    input: &str,
    config: &CalcConfig,
    bindings: &Bindings,
) -> CalcResult<EvaluationReport> {
    log_enter!("CALC", "evaluate_expression", "input={:?} mode={:?}", input, config.paren_mode);

    if input.trim().is_empty() {
        return Err(CalcError::EmptyExpression);
    }

    let tokens = Scanner::new().scan(input)?;
    log_debug!("CALC", "tokens={}", tokens.len());

    let rpn = Translator::new(config.paren_mode).translate(&tokens)?;
    let postfix = lexemes(&rpn);
    log_debug!("CALC", "rpn={}", postfix.join(" "));

    let evaluator = Evaluator::with_resolver(bindings);
    let (stack, steps) = if config.trace {
        let steps = evaluator.trace(&postfix)?;
        let stack = steps.last().map(|s| s.stack.clone()).unwrap_or_default();
        (stack, Some(steps))
    } else {
        (evaluator.eval_rpn(&postfix)?, None)
    };

    let result = match stack.as_slice() {
        [value] => *value,
        _ => {
            return Err(EvalError::MalformedExpression {
                remaining: stack.len(),
            }
            .into())
        }
    };

    let display = format_result(result);
    if !result.is_finite() {
        log_warn!("CALC", "non-finite result {} for {:?}", display, input);
    }
    log_exit!("CALC", "evaluate_expression", "result={}", display);

    Ok(EvaluationReport {
        expression: input.to_string(),
        paren_mode: config.paren_mode,
        rpn: postfix.iter().map(|s| s.to_string()).collect(),
        tokens,
        stack,
        result,
        display,
        steps,
    })
}
