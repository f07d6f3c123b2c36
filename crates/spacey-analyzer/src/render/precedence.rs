//! Operator binding strength, loosest first.

use crate::ast::{BinaryOperator, Expression};

/// How tightly an expression binds. Variants are ordered loosest first, so
/// a child needs parentheses when its precedence compares below the
/// position it is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    Sequence,
    Assignment,
    Conditional,
    Coalesce,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Exponent,
    Unary,
    Postfix,
    Call,
    New,
    Member,
    Primary,
}

impl Precedence {
    pub(crate) fn of(expression: &Expression) -> Self {
        match expression {
            Expression::Sequence(_) => Precedence::Sequence,
            Expression::Assignment(_) => Precedence::Assignment,
            Expression::Conditional(_) => Precedence::Conditional,
            Expression::Binary(binary) => Self::of_binary(binary.operator),
            Expression::Unary(_) => Precedence::Unary,
            Expression::Update(update) if update.prefix => Precedence::Unary,
            Expression::Update(_) => Precedence::Postfix,
            Expression::Call(_) => Precedence::Call,
            Expression::New(_) => Precedence::New,
            Expression::Member(_) => Precedence::Member,
            Expression::Literal(_)
            | Expression::Identifier(_)
            | Expression::This
            | Expression::Array(_)
            | Expression::Object(_) => Precedence::Primary,
        }
    }

    pub(crate) fn of_binary(operator: BinaryOperator) -> Self {
        use BinaryOperator::*;

        match operator {
            NullishCoalescing => Precedence::Coalesce,
            LogicalOr => Precedence::LogicalOr,
            LogicalAnd => Precedence::LogicalAnd,
            BitwiseOr => Precedence::BitwiseOr,
            BitwiseXor => Precedence::BitwiseXor,
            BitwiseAnd => Precedence::BitwiseAnd,
            Equal | NotEqual | StrictEqual | StrictNotEqual => Precedence::Equality,
            LessThan | LessThanEqual | GreaterThan | GreaterThanEqual | In | InstanceOf => {
                Precedence::Relational
            }
            LeftShift | RightShift | UnsignedRightShift => Precedence::Shift,
            Add | Subtract => Precedence::Additive,
            Multiply | Divide | Modulo => Precedence::Multiplicative,
            Exponent => Precedence::Exponent,
        }
    }
}
