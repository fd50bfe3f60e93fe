// SPDX-License-Identifier: MIT

//! Condition evaluation for sanity rules and badges
//!
//! A condition is a single comparison such as:
//! - `churn_rate > 50`
//! - `runway >= 12`
//! - `wizard_completed == true`
//!
//! Bare identifiers are looked up in a [`Context`](crate::sage::context::Context)
//! when bound to a number or boolean. `==` compares text, the ordering
//! operators compare numbers, and anything that cannot be compared is false.

mod ast;
mod evaluator;
mod parser;

pub use ast::{
    CompareOp, Expression, Operand, ALL_OPERATORS, BADGE_OPERATORS, SANITY_OPERATORS,
};
pub use evaluator::{evaluate, evaluate_condition, try_evaluate};
pub use parser::{parse, parse_with};
