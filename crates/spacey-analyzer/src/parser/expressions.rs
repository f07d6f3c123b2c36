//! Tests for expression parsing.
//!
//! Assignment, the conditional operator, unary and postfix forms each have
//! their own method in `parser.rs`. Every binary level from `??` up to
//! `%` goes through a single precedence-climbing loop over the same
//! levels the renderer uses for parenthesization.
//! `**` is parsed separately: it is right-associative and
//! rejects an unparenthesized unary operand on its left.
//!
//! ## Primary Expressions
//!
//! - Identifiers: `foo`, `bar`
//! - Literals: `42`, `'hello'`, `true`, `null`
//! - Array literals: `[1, 2, 3]`
//! - Object literals: `{ a: 1, 'b': 2 }`
//! - Parenthesized: `(a + b)`
//! - `this`, `new`
//!
//! Function and class expressions are reported as unsupported.
//!
//! ## Grammar
//!
//! ```text
//! Expression :
//!     AssignmentExpression
//!     Expression , AssignmentExpression
//!
//! AssignmentExpression :
//!     ConditionalExpression
//!     LeftHandSideExpression AssignmentOperator AssignmentExpression
//!
//! ConditionalExpression :
//!     CoalesceExpression
//!     CoalesceExpression ? AssignmentExpression : AssignmentExpression
//! ```

#[cfg(test)]
mod tests {
    use crate::ast::{BinaryOperator, Expression, MemberProperty};
    use crate::parser::Parser;

    fn parse_expr(src: &str) -> Expression {
        let source = format!("{};", src);
        Parser::new(&source)
            .parse_expression()
            .unwrap_or_else(|e| panic!("{src}: {e}"))
    }

    fn operators(expr: &Expression) -> Vec<BinaryOperator> {
        let mut out = Vec::new();
        let mut current = expr;
        while let Expression::Binary(binary) = current {
            out.push(binary.operator);
            current = binary.right.as_ref();
        }
        out
    }

    #[test]
    fn test_expression_kinds() {
        let cases = [
            ("42", "Literal"),
            ("'hello'", "Literal"),
            ("this", "ThisExpression"),
            ("x ? 1 : 2", "ConditionalExpression"),
            ("x = 5", "AssignmentExpression"),
            ("!x", "UnaryExpression"),
            ("typeof x", "UnaryExpression"),
            ("foo().bar().baz()", "CallExpression"),
            ("new Date(2024, 1, 1)", "NewExpression"),
            ("new Foo().bar", "MemberExpression"),
            ("[1, 2, 3]", "ArrayExpression"),
            ("{ a: 1, b: 2 }", "ObjectExpression"),
            ("a[i]--", "UpdateExpression"),
            ("'x' in obj", "BinaryExpression"),
            ("x instanceof Array", "BinaryExpression"),
            ("a >>> 2", "BinaryExpression"),
            ("a, b", "SequenceExpression"),
        ];
        for (src, expected) in cases {
            assert_eq!(parse_expr(src).type_name(), expected, "{src}");
        }
    }

    #[test]
    fn test_identifier_line() {
        let expr = Parser::new("\n\nfoo;").parse_expression().unwrap();
        assert!(matches!(expr, Expression::Identifier(ref id) if id.line == 3));
    }

    #[test]
    fn test_member_properties() {
        let Expression::Member(dot) = parse_expr("obj.prop") else {
            panic!("Expected member expression");
        };
        assert!(matches!(dot.property, MemberProperty::Identifier(ref id) if id.name == "prop"));

        let Expression::Member(bracket) = parse_expr("V[mid]") else {
            panic!("Expected member expression");
        };
        assert!(matches!(bracket.property, MemberProperty::Computed(_)));
    }

    #[test]
    fn test_call_arguments() {
        let Expression::Call(call) = parse_expr("foo(1, a + b, 3)") else {
            panic!("Expected call expression");
        };
        assert_eq!(call.arguments.len(), 3);
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        assert_eq!(
            operators(&parse_expr("1 + 2 * 3")),
            vec![BinaryOperator::Add, BinaryOperator::Multiply]
        );
        let Expression::Binary(grouped) = parse_expr("(1 + 2) * 3") else {
            panic!("Expected binary expression");
        };
        assert_eq!(grouped.operator, BinaryOperator::Multiply);
    }

    #[test]
    fn test_same_level_folds_left() {
        let Expression::Binary(expr) = parse_expr("a - b - c") else {
            panic!("Expected binary expression");
        };
        assert!(matches!(*expr.left, Expression::Binary(ref l) if l.operator == BinaryOperator::Subtract));
        assert!(matches!(*expr.right, Expression::Identifier(_)));
    }

    #[test]
    fn test_binary_levels_nest_rightwards() {
        let expr = parse_expr("a || b && c | d ^ e & f == g < h << i + j * k");
        assert_eq!(
            operators(&expr),
            vec![
                BinaryOperator::LogicalOr,
                BinaryOperator::LogicalAnd,
                BinaryOperator::BitwiseOr,
                BinaryOperator::BitwiseXor,
                BinaryOperator::BitwiseAnd,
                BinaryOperator::Equal,
                BinaryOperator::LessThan,
                BinaryOperator::LeftShift,
                BinaryOperator::Add,
                BinaryOperator::Multiply,
            ]
        );
    }

    #[test]
    fn test_comparison_under_logical_and() {
        assert_eq!(
            operators(&parse_expr("Y <= 5 && X == 3")),
            vec![BinaryOperator::LogicalAnd, BinaryOperator::Equal]
        );
    }

    #[test]
    fn test_nullish_mixed_with_logical() {
        assert_eq!(
            operators(&parse_expr("a ?? b || c")),
            vec![BinaryOperator::NullishCoalescing, BinaryOperator::LogicalOr]
        );
    }

    #[test]
    fn test_exponent_inside_multiplicative() {
        assert_eq!(
            operators(&parse_expr("a * b ** c")),
            vec![BinaryOperator::Multiply, BinaryOperator::Exponent]
        );
    }
}
