//! Condition expression evaluator

use super::ast::{CompareOp, Expression, Operand};
use super::parser::parse_with;
use crate::adk::error::ConditionError;
use crate::sage::context::Context;
use serde_json::Value;
use std::borrow::Cow;

/// An operand after looking it up in the context
struct Resolved<'a> {
    text: Cow<'a, str>,
    number: Option<f64>,
}

/// Evaluate a parsed expression against a context
pub fn evaluate(expr: &Expression, context: &Context) -> bool {
    let left = resolve(&expr.left, context);
    let right = resolve(&expr.right, context);

    match expr.op {
        // Equality is textual: `5` and `5.0` differ
        CompareOp::Eq => left.text == right.text,
        CompareOp::Gt => compare_numbers(&left, &right, |a, b| a > b),
        CompareOp::Gte => compare_numbers(&left, &right, |a, b| a >= b),
        CompareOp::Lt => compare_numbers(&left, &right, |a, b| a < b),
        CompareOp::Lte => compare_numbers(&left, &right, |a, b| a <= b),
    }
}

/// Parse and evaluate, reporting malformed conditions
pub fn try_evaluate(
    condition: &str,
    context: &Context,
    operators: &[CompareOp],
) -> Result<bool, ConditionError> {
    let expr = parse_with(condition, operators)?;
    Ok(evaluate(&expr, context))
}

/// Parse and evaluate; anything malformed is simply not satisfied
pub fn evaluate_condition(condition: &str, context: &Context, operators: &[CompareOp]) -> bool {
    try_evaluate(condition, context, operators).unwrap_or(false)
}

fn resolve<'a>(operand: &'a Operand, context: &Context) -> Resolved<'a> {
    if let Operand::Variable(name) = operand {
        match context.get(name) {
            Some(Value::Number(n)) => {
                return Resolved {
                    text: Cow::Owned(n.to_string()),
                    number: n.as_f64(),
                }
            }
            Some(Value::Bool(b)) => {
                return Resolved {
                    text: Cow::Owned(b.to_string()),
                    number: None,
                }
            }
            // Unbound or non-scalar: stays as written
            _ => {}
        }
    }

    let text = operand.text();
    Resolved {
        text: Cow::Borrowed(text),
        number: text.parse::<f64>().ok(),
    }
}

fn compare_numbers<F>(left: &Resolved<'_>, right: &Resolved<'_>, cmp: F) -> bool
where
    F: Fn(f64, f64) -> bool,
{
    match (left.number, right.number) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}
