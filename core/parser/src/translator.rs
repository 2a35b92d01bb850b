//! FILENAME: core/parser/src/translator.rs
//! PURPOSE: Converts an infix token sequence into postfix (RPN) order.
//! CONTEXT: Second stage of the pipeline. Implements the shunting-yard
//! algorithm over the four binary operators and parentheses.
//!
//! RULES:
//! - '('      : pushed onto the operator stack
//! - ')'      : pops to output until the matching '(' (which is dropped)
//! - operator : pushed if the stack is empty, the top is '(', or it binds
//!              tighter than the top; otherwise pops while the top is an
//!              operator it does not outrank, then pushed
//! - operand  : appended to output
//! - end      : remaining stack popped to output
//!
//! The input is assumed to be well-formed apart from parenthesis balance,
//! which is handled according to the ParenMode.

use crate::error::{ParenImbalance, TranslateError, TranslateResult};
use crate::token::{priority, Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How the translator treats unbalanced parentheses.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParenMode {
    /// Unbalanced input is an error.
    #[default]
    Strict,
    /// A ')' with no match stops popping silently and an unclosed '(' is
    /// discarded at the end.
    Lenient,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Translator {
    mode: ParenMode,
}

impl Translator {
    pub fn new(mode: ParenMode) -> Self {
        Translator { mode }
    }

    pub fn mode(&self) -> ParenMode {
        self.mode
    }

    /// Translates infix `tokens` into postfix order.
    pub fn translate(&self, tokens: &[Token]) -> TranslateResult<Vec<Token>> {
        let mut stack: Vec<&Token> = Vec::new();
        let mut output: Vec<Token> = Vec::with_capacity(tokens.len());

        for (position, token) in tokens.iter().enumerate() {
            match token.kind() {
                TokenKind::LeftParen => stack.push(token),

                TokenKind::RightParen => {
                    let mut matched = false;
                    while let Some(top) = stack.pop() {
                        if top.is_left_paren() {
                            matched = true;
                            break;
                        }
                        output.push(top.clone());
                    }
                    if !matched {
                        self.unbalanced(ParenImbalance::UnmatchedClose { position })?;
                    }
                }

                TokenKind::Operator => {
                    while let Some(top) = stack.last() {
                        if top.is_left_paren() || outranks(token, top) {
                            break;
                        }
                        output.push((*top).clone());
                        stack.pop();
                    }
                    stack.push(token);
                }

                TokenKind::Operand => output.push(token.clone()),
            }
        }

        let mut unclosed = 0;
        while let Some(top) = stack.pop() {
            if top.is_left_paren() {
                unclosed += 1;
                continue;
            }
            output.push(top.clone());
        }
        if unclosed > 0 {
            self.unbalanced(ParenImbalance::UnclosedOpen { count: unclosed })?;
        }

        log::trace!(
            target: "parser::translator",
            "translated {} tokens into {} postfix tokens",
            tokens.len(),
            output.len()
        );
        Ok(output)
    }

    fn unbalanced(&self, imbalance: ParenImbalance) -> TranslateResult<()> {
        match self.mode {
            ParenMode::Strict => Err(TranslateError::UnbalancedParentheses(imbalance)),
            ParenMode::Lenient => {
                log::debug!(target: "parser::translator", "ignoring unbalanced parentheses: {}", imbalance);
                Ok(())
            }
        }
    }
}

/// True when operator token `a` strictly outranks operator token `b`.
fn outranks(a: &Token, b: &Token) -> bool {
    match (a.as_operator(), b.as_operator()) {
        (Some(a), Some(b)) => priority(a, b) == Ordering::Greater,
        _ => false,
    }
}

/// Translates infix `tokens` to postfix, tolerating unbalanced parentheses.
pub fn to_rpn(tokens: &[Token]) -> Vec<Token> {
    // Lenient translation never reports an imbalance.
    Translator::new(ParenMode::Lenient)
        .translate(tokens)
        .unwrap_or_default()
}
