// SPDX-License-Identifier: MIT

//! Abstract Syntax Tree for condition expressions

/// A single comparison: `left op right`
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub left: Operand,
    pub op: CompareOp,
    pub right: Operand,
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// ==
    Eq,
    /// >
    Gt,
    /// >=
    Gte,
    /// <
    Lt,
    /// <=
    Lte,
}

/// One side of a comparison
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Bare identifier, resolved against the context
    Variable(String),
    /// Anything else, kept as raw text
    Literal(String),
}

impl Operand {
    /// Raw text of the operand as written in the condition
    pub fn text(&self) -> &str {
        match self {
            Operand::Variable(s) | Operand::Literal(s) => s,
        }
    }
}

/// Operators accepted by sanity rules
pub const SANITY_OPERATORS: &[CompareOp] =
    &[CompareOp::Lt, CompareOp::Gt, CompareOp::Gte, CompareOp::Lte];

/// Operators accepted by badge conditions
pub const BADGE_OPERATORS: &[CompareOp] = &[CompareOp::Eq, CompareOp::Gte, CompareOp::Lte];

/// Every operator the tokenizer recognises
pub const ALL_OPERATORS: &[CompareOp] = &[
    CompareOp::Eq,
    CompareOp::Gt,
    CompareOp::Gte,
    CompareOp::Lt,
    CompareOp::Lte,
];

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareOp::Eq => write!(f, "=="),
            CompareOp::Gt => write!(f, ">"),
            CompareOp::Gte => write!(f, ">="),
            CompareOp::Lt => write!(f, "<"),
            CompareOp::Lte => write!(f, "<="),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left.text(), self.op, self.right.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_op_display() {
        assert_eq!(format!("{}", CompareOp::Eq), "==");
        assert_eq!(format!("{}", CompareOp::Gt), ">");
        assert_eq!(format!("{}", CompareOp::Gte), ">=");
        assert_eq!(format!("{}", CompareOp::Lt), "<");
        assert_eq!(format!("{}", CompareOp::Lte), "<=");
    }

    #[test]
    fn test_operator_sets() {
        assert!(!SANITY_OPERATORS.contains(&CompareOp::Eq));
        assert!(!BADGE_OPERATORS.contains(&CompareOp::Lt));
        assert!(!BADGE_OPERATORS.contains(&CompareOp::Gt));
        assert_eq!(ALL_OPERATORS.len(), 5);
    }

    #[test]
    fn test_expression_display() {
        let expr = Expression {
            left: Operand::Variable("runway".to_string()),
            op: CompareOp::Gte,
            right: Operand::Literal("12".to_string()),
        };
        assert_eq!(expr.to_string(), "runway >= 12");
    }
}
