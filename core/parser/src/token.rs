//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions shared by the scanner, translator, and evaluator.
//! CONTEXT: Tokens are the atomic units produced by the scanner. The translator
//! reorders them into postfix form and the evaluator consumes their lexemes.

use serde::Serialize;
use std::cmp::Ordering;

/// Category of a scanned token.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// A digit sequence or a `#{name}` placeholder.
    Operand,
    LeftParen,
    RightParen,
    /// One of `+ - * /`.
    Operator,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Operand => write!(f, "OPERAND"),
            TokenKind::LeftParen => write!(f, "LEFT_PAREN"),
            TokenKind::RightParen => write!(f, "RIGHT_PAREN"),
            TokenKind::Operator => write!(f, "OPERATOR"),
        }
    }
}

/// One lexical unit: its category and the exact text it was scanned from.
/// Fields are private so a token cannot change after the scanner builds it.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
}

impl Token {
    /// Only the scanner builds tokens from raw matches; its patterns never
    /// match empty text and always agree with `kind`.
    pub(crate) fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        let lexeme = lexeme.into();
        debug_assert!(!lexeme.is_empty());
        Token { kind, lexeme }
    }

    /// Builds an operand token. Returns None unless `lexeme` is a digit
    /// sequence or a `#{name}` placeholder.
    pub fn operand(lexeme: impl Into<String>) -> Option<Self> {
        let lexeme = lexeme.into();
        OperandValue::classify(&lexeme)?;
        Some(Token::new(TokenKind::Operand, lexeme))
    }

    pub fn left_paren() -> Self {
        Token::new(TokenKind::LeftParen, "(")
    }

    pub fn right_paren() -> Self {
        Token::new(TokenKind::RightParen, ")")
    }

    pub fn operator(op: Operator) -> Self {
        Token::new(TokenKind::Operator, op.symbol().to_string())
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Returns the operator this token stands for, if it is an operator token.
    pub fn as_operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator => Operator::from_lexeme(&self.lexeme),
            _ => None,
        }
    }

    pub fn is_left_paren(&self) -> bool {
        self.kind == TokenKind::LeftParen
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

/// Binary arithmetic operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum Operator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
}

/// Precedence classes, ordered lowest first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize)]
pub enum Precedence {
    AddSub,
    MulDiv,
}

impl Operator {
    pub fn from_lexeme(lexeme: &str) -> Option<Operator> {
        match lexeme {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Operator::Add | Operator::Subtract => Precedence::AddSub,
            Operator::Multiply | Operator::Divide => Precedence::MulDiv,
        }
    }

    /// Applies the operator with `first` as the left operand.
    /// Division follows IEEE-754: `x / 0` is infinite and `0 / 0` is NaN.
    pub fn apply(self, first: f64, second: f64) -> f64 {
        match self {
            Operator::Add => first + second,
            Operator::Subtract => first - second,
            Operator::Multiply => first * second,
            Operator::Divide => first / second,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Compares the precedence of two operators.
///
/// Returns `Greater` only when `a` is multiplicative and `b` additive, `Less`
/// for the reverse, and `Equal` for any same-class pair. Same-class operators
/// never outrank each other, which gives left associativity.
pub fn priority(a: Operator, b: Operator) -> Ordering {
    a.precedence().cmp(&b.precedence())
}

/// An operand lexeme classified before it reaches the value stack.
#[derive(Debug, PartialEq, Clone)]
pub enum OperandValue {
    Number(f64),
    /// The identifier inside `#{...}`, possibly empty.
    Placeholder(String),
}

impl OperandValue {
    /// Classifies an operand lexeme. Returns None for text that is neither a
    /// digit sequence nor a well-formed placeholder.
    pub fn classify(lexeme: &str) -> Option<OperandValue> {
        if let Some(name) = placeholder_name(lexeme) {
            return Some(OperandValue::Placeholder(name.to_string()));
        }
        if !lexeme.is_empty() && lexeme.bytes().all(|b| b.is_ascii_digit()) {
            return lexeme.parse::<f64>().ok().map(OperandValue::Number);
        }
        None
    }
}

/// Returns the identifier of a `#{name}` placeholder lexeme.
pub fn placeholder_name(lexeme: &str) -> Option<&str> {
    let name = lexeme.strip_prefix("#{")?.strip_suffix('}')?;
    if name.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(name)
    } else {
        None
    }
}
