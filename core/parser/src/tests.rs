//! FILENAME: core/parser/src/tests.rs
//! PURPOSE: Consolidated unit tests for the parser crate.

use crate::error::{ParenImbalance, ScanError, TranslateError};
use crate::lexer::{scan, Scanner};
use crate::token::{priority, OperandValue, Operator, Token, TokenKind};
use crate::translator::{to_rpn, ParenMode, Translator};
use crate::lexemes;
use std::cmp::Ordering;

fn rpn_of(input: &str) -> Vec<String> {
    let tokens = scan(input).unwrap();
    to_rpn(&tokens).iter().map(|t| t.lexeme().to_string()).collect()
}

fn strict_rpn_of(input: &str) -> Result<Vec<String>, TranslateError> {
    let tokens = scan(input).unwrap();
    let rpn = Translator::new(ParenMode::Strict).translate(&tokens)?;
    Ok(rpn.iter().map(|t| t.lexeme().to_string()).collect())
}

// ========================================
// SCANNER TESTS
// ========================================

#[test]
fn scanner_tokenizes_simple_math() {
    let tokens = scan("1+2*3").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::operand("1").unwrap(),
            Token::operator(Operator::Add),
            Token::operand("2").unwrap(),
            Token::operator(Operator::Multiply),
            Token::operand("3").unwrap(),
        ]
    );
}

#[test]
fn scanner_reads_multi_digit_operands() {
    let tokens = scan("120/007").unwrap();
    assert_eq!(lexemes(&tokens), vec!["120", "/", "007"]);
    assert_eq!(tokens[0].kind(), TokenKind::Operand);
    assert_eq!(tokens[2].kind(), TokenKind::Operand);
}

#[test]
fn scanner_strips_all_whitespace() {
    let tokens = scan("  ( 1 +\t2 )\n* 3 ").unwrap();
    assert_eq!(lexemes(&tokens), vec!["(", "1", "+", "2", ")", "*", "3"]);
    assert_eq!(tokens[0], Token::left_paren());
    assert_eq!(tokens[4], Token::right_paren());
}

#[test]
fn scanner_strips_unicode_whitespace() {
    let tokens = scan("1\u{a0}+\u{2003}2").unwrap();
    assert_eq!(lexemes(&tokens), vec!["1", "+", "2"]);
    assert_eq!(tokens[1], Token::operator(Operator::Add));
}

#[test]
fn scanner_joins_digits_split_by_whitespace() {
    // Whitespace is removed before matching, so it cannot separate operands.
    let tokens = scan("1 2 + 3").unwrap();
    assert_eq!(lexemes(&tokens), vec!["12", "+", "3"]);
}

#[test]
fn scanner_reads_placeholders() {
    let tokens = scan("#{price}*#{}+#{Q1}").unwrap();
    assert_eq!(lexemes(&tokens), vec!["#{price}", "*", "#{}", "+", "#{Q1}"]);
    assert!(tokens
        .iter()
        .filter(|t| t.lexeme().starts_with('#'))
        .all(|t| t.kind() == TokenKind::Operand));
}

#[test]
fn scanner_rejects_malformed_placeholder() {
    let err = scan("#{a-b}").unwrap_err();
    assert_eq!(
        err,
        ScanError::UnexpectedCharacter {
            character: '#',
            offset: 0,
            remainder: "#{a-b}".to_string(),
        }
    );
}

#[test]
fn scanner_reports_unknown_character() {
    let err = scan("1 + @").unwrap_err();
    assert_eq!(
        err,
        ScanError::UnexpectedCharacter {
            character: '@',
            offset: 2,
            remainder: "@".to_string(),
        }
    );
}

#[test]
fn scanner_rejects_decimal_point() {
    let err = scan("1.5").unwrap_err();
    match err {
        ScanError::UnexpectedCharacter { character, offset, remainder } => {
            assert_eq!(character, '.');
            assert_eq!(offset, 1);
            assert_eq!(remainder, ".5");
        }
    }
}

#[test]
fn scanner_offset_counts_chars_not_bytes() {
    let err = scan("(1)+é").unwrap_err();
    match err {
        ScanError::UnexpectedCharacter { character, offset, .. } => {
            assert_eq!(character, 'é');
            assert_eq!(offset, 4);
        }
    }
}

#[test]
fn scanner_accepts_empty_input() {
    assert!(scan("").unwrap().is_empty());
    assert!(scan(" \t ").unwrap().is_empty());
}

#[test]
fn scanner_patterns_are_registered_in_tie_break_order() {
    let kinds: Vec<TokenKind> = Scanner::new().patterns().iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Operand,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::Operator,
        ]
    );
    assert!(Scanner::new().patterns().iter().all(|p| p.as_str().starts_with('^')));
}

#[test]
fn scanner_error_message_names_character() {
    let err = scan("2*x").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'x'"));
    assert!(message.contains("offset 2"));
}

// ========================================
// TOKEN MODEL TESTS
// ========================================

#[test]
fn priority_orders_classes() {
    assert_eq!(priority(Operator::Multiply, Operator::Add), Ordering::Greater);
    assert_eq!(priority(Operator::Divide, Operator::Subtract), Ordering::Greater);
    assert_eq!(priority(Operator::Add, Operator::Divide), Ordering::Less);
    assert_eq!(priority(Operator::Add, Operator::Subtract), Ordering::Equal);
    assert_eq!(priority(Operator::Multiply, Operator::Divide), Ordering::Equal);
}

#[test]
fn operator_round_trips_lexeme() {
    for op in [Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide] {
        let token = Token::operator(op);
        assert_eq!(token.kind(), TokenKind::Operator);
        assert_eq!(token.as_operator(), Some(op));
    }
    assert_eq!(Operator::from_lexeme("^"), None);
    assert_eq!(Token::operand("3").unwrap().as_operator(), None);
}

#[test]
fn operator_apply_keeps_operand_order() {
    assert_eq!(Operator::Subtract.apply(10.0, 4.0), 6.0);
    assert_eq!(Operator::Divide.apply(8.0, 2.0), 4.0);
    assert!(Operator::Divide.apply(3.0, 0.0).is_infinite());
    assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
}

#[test]
fn operand_values_are_classified() {
    assert_eq!(OperandValue::classify("42"), Some(OperandValue::Number(42.0)));
    assert_eq!(
        OperandValue::classify("#{rate}"),
        Some(OperandValue::Placeholder("rate".to_string()))
    );
    assert_eq!(
        OperandValue::classify("#{}"),
        Some(OperandValue::Placeholder(String::new()))
    );
    assert_eq!(OperandValue::classify("abc"), None);
    assert_eq!(OperandValue::classify(""), None);
    assert_eq!(OperandValue::classify("-3"), None);
}

#[test]
fn operand_tokens_require_operand_text() {
    assert_eq!(Token::operand(""), None);
    assert_eq!(Token::operand("+"), None);
    assert_eq!(Token::operand("("), None);
    assert_eq!(Token::operand("abc"), None);
    assert_eq!(Token::operand("1.5"), None);

    let number = Token::operand("042").unwrap();
    assert_eq!(number.kind(), TokenKind::Operand);
    assert_eq!(number.lexeme(), "042");
    assert_eq!(Token::operand("#{}").unwrap().kind(), TokenKind::Operand);
    assert_eq!(scan("#{rate}").unwrap(), vec![Token::operand("#{rate}").unwrap()]);
}

#[test]
fn token_serializes_kind_and_lexeme() {
    let json = serde_json::to_string(&Token::left_paren()).unwrap();
    assert_eq!(json, r#"{"kind":"LEFT_PAREN","lexeme":"("}"#);
}

#[test]
fn paren_mode_deserializes_lowercase() {
    let mode: ParenMode = serde_json::from_str("\"lenient\"").unwrap();
    assert_eq!(mode, ParenMode::Lenient);
    assert_eq!(ParenMode::default(), ParenMode::Strict);
}

// ========================================
// TRANSLATOR TESTS - PRECEDENCE
// ========================================

#[test]
fn translator_binds_multiplication_first() {
    assert_eq!(rpn_of("1+2*3"), vec!["1", "2", "3", "*", "+"]);
    assert_eq!(rpn_of("1*2+3"), vec!["1", "2", "*", "3", "+"]);
}

#[test]
fn translator_handles_nested_groups() {
    assert_eq!(
        rpn_of("50-12*8/(2-3)"),
        vec!["50", "12", "8", "*", "2", "3", "-", "/", "-"]
    );
    assert_eq!(rpn_of("(1+2)*3"), vec!["1", "2", "+", "3", "*"]);
    assert_eq!(rpn_of("((4))"), vec!["4"]);
}

#[test]
fn translator_is_left_associative() {
    assert_eq!(rpn_of("1-2-3"), vec!["1", "2", "-", "3", "-"]);
    assert_eq!(rpn_of("8/4/2"), vec!["8", "4", "/", "2", "/"]);
    assert_eq!(rpn_of("2*3/4*5"), vec!["2", "3", "*", "4", "/", "5", "*"]);
    assert_eq!(rpn_of("1+2-3+4"), vec!["1", "2", "+", "3", "-", "4", "+"]);
}

#[test]
fn translator_keeps_placeholders_as_operands() {
    assert_eq!(rpn_of("#{a}*(#{b}+1)"), vec!["#{a}", "#{b}", "1", "+", "*"]);
}

#[test]
fn translator_output_drops_only_parentheses() {
    let inputs = [
        "1",
        "1+2*3",
        "(1+2)*3",
        "50-12*8/(2-3)/3+(1/1+2*1)*2*3-1",
        "((1+2)*(3-4))/(5*(6+7))",
        "#{x}/#{y}-2",
    ];

    for input in inputs {
        let tokens = scan(input).unwrap();
        let expected = tokens
            .iter()
            .filter(|t| matches!(t.kind(), TokenKind::Operand | TokenKind::Operator))
            .count();
        let rpn = Translator::new(ParenMode::Strict).translate(&tokens).unwrap();
        assert_eq!(rpn.len(), expected, "input {}", input);
        assert!(rpn
            .iter()
            .all(|t| !matches!(t.kind(), TokenKind::LeftParen | TokenKind::RightParen)));
    }
}

#[test]
fn translator_output_is_reducible() {
    let inputs = ["7", "1+2*3", "(1+2)*3-4/2", "((1))+((2)*3)", "1-2-3-4-5"];

    for input in inputs {
        let mut depth: i64 = 0;
        for token in to_rpn(&scan(input).unwrap()) {
            match token.kind() {
                TokenKind::Operand => depth += 1,
                TokenKind::Operator => {
                    assert!(depth >= 2, "underflow in {}", input);
                    depth -= 1;
                }
                _ => panic!("parenthesis in output for {}", input),
            }
        }
        assert_eq!(depth, 1, "input {}", input);
    }
}

// ========================================
// TRANSLATOR TESTS - PARENTHESIS BALANCE
// ========================================

#[test]
fn lenient_translation_discards_unclosed_paren() {
    assert_eq!(rpn_of("(1+2"), vec!["1", "2", "+"]);
    assert_eq!(rpn_of("((1+2)*3"), vec!["1", "2", "+", "3", "*"]);
}

#[test]
fn lenient_translation_ignores_unmatched_close() {
    assert_eq!(rpn_of("1+2)"), vec!["1", "2", "+"]);
    assert_eq!(rpn_of("1)*2"), vec!["1", "2", "*"]);
}

#[test]
fn strict_translation_rejects_unclosed_paren() {
    assert_eq!(
        strict_rpn_of("(1+2"),
        Err(TranslateError::UnbalancedParentheses(
            ParenImbalance::UnclosedOpen { count: 1 }
        ))
    );
    assert_eq!(
        strict_rpn_of("((1"),
        Err(TranslateError::UnbalancedParentheses(
            ParenImbalance::UnclosedOpen { count: 2 }
        ))
    );
}

#[test]
fn strict_translation_rejects_unmatched_close() {
    assert_eq!(
        strict_rpn_of("1+2)"),
        Err(TranslateError::UnbalancedParentheses(
            ParenImbalance::UnmatchedClose { position: 3 }
        ))
    );
}

#[test]
fn strict_translation_accepts_balanced_input() {
    assert_eq!(
        strict_rpn_of("(1+2)*3").unwrap(),
        vec!["1", "2", "+", "3", "*"]
    );
    assert_eq!(Translator::default().mode(), ParenMode::Strict);
}
