//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a sequence of Tokens.
//! CONTEXT: This is the first stage of the pipeline. Whitespace is removed up
//! front, then the remaining text is consumed by an ordered table of anchored
//! token patterns.
//!
//! PATTERN TABLE (in registration order):
//! - OPERAND:     #{[A-Za-z0-9]*} | [0-9]+
//! - LEFT_PAREN:  (
//! - RIGHT_PAREN: )
//! - OPERATOR:    + - * /
//!
//! When several patterns match at the current position, the one registered
//! LAST wins. New patterns must be added with that ordering in mind.

use crate::error::{ScanError, ScanResult};
use crate::token::{Token, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// A single entry of the pattern table.
pub struct TokenPattern {
    pub kind: TokenKind,
    regex: Regex,
}

impl TokenPattern {
    /// `pattern` is wrapped in `^(?:...)` so it only matches at the start.
    fn new(kind: TokenKind, pattern: &str) -> Self {
        let anchored = format!("^(?:{})", pattern);
        TokenPattern {
            kind,
            regex: Regex::new(&anchored).unwrap(),
        }
    }

    /// Returns the length in bytes of the lexeme matched at the start of `input`.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.regex
            .find(input)
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

static PATTERNS: Lazy<Vec<TokenPattern>> = Lazy::new(|| {
    vec![
        TokenPattern::new(TokenKind::Operand, r"#\{[A-Za-z0-9]*\}|[0-9]+"),
        TokenPattern::new(TokenKind::LeftParen, r"\("),
        TokenPattern::new(TokenKind::RightParen, r"\)"),
        TokenPattern::new(TokenKind::Operator, r"[+\-*/]"),
    ]
});

/// Scanner over the shared pattern table. Holds no per-call state, so a single
/// instance can scan any number of inputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Scanner;

impl Scanner {
    pub fn new() -> Self {
        Scanner
    }

    /// The registered patterns, in tie-break order.
    pub fn patterns(&self) -> &'static [TokenPattern] {
        &PATTERNS
    }

    /// Converts `input` into tokens. Fails on the first position where no
    /// pattern matches; no partial token list is returned.
    pub fn scan(&self, input: &str) -> ScanResult<Vec<Token>> {
        let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < stripped.len() {
            let rest = &stripped[pos..];

            // Every pattern is tried; a later match replaces an earlier one.
            let mut found: Option<(TokenKind, usize)> = None;
            for pattern in self.patterns() {
                if let Some(len) = pattern.match_len(rest) {
                    found = Some((pattern.kind, len));
                }
            }

            let Some((kind, len)) = found else {
                let offset = stripped[..pos].chars().count();
                log::debug!(target: "parser::lexer", "no pattern at offset {}: {:?}", offset, rest);
                return Err(ScanError::UnexpectedCharacter {
                    character: rest.chars().next().unwrap_or_default(),
                    offset,
                    remainder: rest.to_string(),
                });
            };

            tokens.push(Token::new(kind, &rest[..len]));
            pos += len;
        }

        log::trace!(target: "parser::lexer", "scanned {} tokens from {:?}", tokens.len(), input);
        Ok(tokens)
    }
}

/// Scans `input` with the default pattern table.
pub fn scan(input: &str) -> ScanResult<Vec<Token>> {
    Scanner::new().scan(input)
}
