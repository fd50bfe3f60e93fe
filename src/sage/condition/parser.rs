//! Condition tokenizer
//!
//! Splits expressions like:
//! - `churn_rate > 50`
//! - `runway >= 12`
//! - `wizard_completed == true`
//!
//! into `{left, operator, right}`. Operators are found with one character of
//! lookahead, so `>=` is never mistaken for `>`.

use super::ast::{CompareOp, Expression, Operand, ALL_OPERATORS};
use crate::adk::error::ConditionError;

/// Characters that may only appear as part of an operator
const OPERATOR_CHARS: &[char] = &['=', '<', '>', '!'];

/// Parse a condition accepting every recognised operator
pub fn parse(input: &str) -> Result<Expression, ConditionError> {
    parse_with(input, ALL_OPERATORS)
}

/// Parse a condition, rejecting operators outside `allowed`
pub fn parse_with(input: &str, allowed: &[CompareOp]) -> Result<Expression, ConditionError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ConditionError::Empty);
    }

    let (pos, op) = match find_operator(input) {
        Some(found) => found,
        None if input.contains("!=") => {
            return Err(ConditionError::UnsupportedOperator {
                op: "!=".to_string(),
                condition: input.to_string(),
            })
        }
        None => return Err(ConditionError::MissingOperator(input.to_string())),
    };

    let left_str = &input[..pos];
    let right_str = &input[pos + operator_len(op)..];

    if find_operator(right_str).is_some() {
        return Err(ConditionError::MultipleOperators(input.to_string()));
    }

    let left = parse_operand(left_str, input)?;
    let right = parse_operand(right_str, input)?;

    if !allowed.contains(&op) {
        return Err(ConditionError::UnsupportedOperator {
            op: op.to_string(),
            condition: input.to_string(),
        });
    }

    Ok(Expression { left, op, right })
}

fn find_operator(input: &str) -> Option<(usize, CompareOp)> {
    let bytes = input.as_bytes();

    for i in 0..bytes.len() {
        let next = bytes.get(i + 1).copied();
        let op = match (bytes[i], next) {
            (b'=', Some(b'=')) => CompareOp::Eq,
            (b'>', Some(b'=')) => CompareOp::Gte,
            (b'>', _) => CompareOp::Gt,
            (b'<', Some(b'=')) => CompareOp::Lte,
            (b'<', _) => CompareOp::Lt,
            _ => continue,
        };
        return Some((i, op));
    }
    None
}

fn operator_len(op: CompareOp) -> usize {
    match op {
        CompareOp::Gt | CompareOp::Lt => 1,
        CompareOp::Eq | CompareOp::Gte | CompareOp::Lte => 2,
    }
}

fn parse_operand(raw: &str, condition: &str) -> Result<Operand, ConditionError> {
    let text = raw.trim();

    if text.is_empty() {
        return Err(ConditionError::MissingOperand(condition.to_string()));
    }
    if text.chars().any(|c| c.is_whitespace() || OPERATOR_CHARS.contains(&c)) {
        return Err(ConditionError::InvalidOperand {
            operand: text.to_string(),
            condition: condition.to_string(),
        });
    }

    if is_identifier(text) {
        Ok(Operand::Variable(text.to_string()))
    } else {
        Ok(Operand::Literal(text.to_string()))
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
