//! Canonical single-line rendering of expressions.
//!
//! The flattener never inspects the text it stores; it asks an
//! [`ExpressionRenderer`] for it. [`CanonicalRenderer`] produces the
//! conventional JavaScript formatting used in every step table: operators
//! surrounded by single spaces, the minimum parentheses needed to preserve
//! the tree, and single-quoted strings.
//!
//! ```rust
//! use spacey_analyzer::parser::Parser;
//! use spacey_analyzer::ast::Statement;
//! use spacey_analyzer::{CanonicalRenderer, ExpressionRenderer};
//!
//! let program = Parser::new("x=(y+8)*3+4;").parse_program().unwrap();
//! let Statement::Expression(stmt) = &program.body[0] else { unreachable!() };
//! assert_eq!(
//!     CanonicalRenderer.render_expression(&stmt.expression),
//!     "x = (y + 8) * 3 + 4"
//! );
//! ```

use crate::ast::*;

pub(crate) mod precedence;

pub(crate) use precedence::Precedence;

/// Renders syntax back to source text.
pub trait ExpressionRenderer {
    /// Renders an expression subtree on a single line.
    fn render_expression(&self, expression: &Expression) -> String;

    /// Renders a declaration without its trailing semicolon, e.g. `let i = 0`.
    fn render_declaration(&self, declaration: &VariableDeclaration) -> String;
}

/// The default renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalRenderer;

impl ExpressionRenderer for CanonicalRenderer {
    fn render_expression(&self, expression: &Expression) -> String {
        let mut out = String::new();
        write_expression(&mut out, expression);
        out
    }

    fn render_declaration(&self, declaration: &VariableDeclaration) -> String {
        let mut out = String::from(declaration.kind.as_str());
        out.push(' ');

        for (i, declarator) in declaration.declarations.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&declarator.id.name);
            if let Some(init) = &declarator.init {
                out.push_str(" = ");
                write_operand(&mut out, init, Precedence::Assignment);
            }
        }

        out
    }
}

// ============================================================================
// Expressions
// ============================================================================

fn write_expression(out: &mut String, expression: &Expression) {
    match expression {
        Expression::Literal(literal) => write_literal(out, literal),
        Expression::Identifier(id) => out.push_str(&id.name),
        Expression::This => out.push_str("this"),
        Expression::Array(array) => write_array(out, array),
        Expression::Object(object) => write_object(out, object),
        Expression::Binary(binary) => write_binary(out, binary),
        Expression::Unary(unary) => write_unary(out, unary),
        Expression::Assignment(assign) => {
            write_expression(out, &assign.left);
            out.push(' ');
            out.push_str(assign.operator.as_str());
            out.push(' ');
            write_operand(out, &assign.right, Precedence::Assignment);
        }
        Expression::Call(call) => {
            write_operand(out, &call.callee, Precedence::Call);
            write_arguments(out, &call.arguments);
        }
        Expression::Member(member) => write_member(out, member),
        Expression::Conditional(cond) => {
            write_operand(out, &cond.test, Precedence::Coalesce);
            out.push_str(" ? ");
            write_operand(out, &cond.consequent, Precedence::Assignment);
            out.push_str(" : ");
            write_operand(out, &cond.alternate, Precedence::Assignment);
        }
        Expression::New(new_expr) => {
            out.push_str("new ");
            if contains_call(&new_expr.callee) {
                write_parenthesized(out, &new_expr.callee);
            } else {
                write_operand(out, &new_expr.callee, Precedence::Member);
            }
            write_arguments(out, &new_expr.arguments);
        }
        Expression::Update(update) => {
            if update.prefix {
                out.push_str(update.operator.as_str());
                write_operand(out, &update.argument, Precedence::Postfix);
            } else {
                write_operand(out, &update.argument, Precedence::Postfix);
                out.push_str(update.operator.as_str());
            }
        }
        Expression::Sequence(seq) => {
            for (i, expr) in seq.expressions.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_operand(out, expr, Precedence::Assignment);
            }
        }
    }
}

/// Writes `expression`, parenthesized when it binds looser than `minimum`.
fn write_operand(out: &mut String, expression: &Expression, minimum: Precedence) {
    if Precedence::of(expression) < minimum {
        write_parenthesized(out, expression);
    } else {
        write_expression(out, expression);
    }
}

fn write_parenthesized(out: &mut String, expression: &Expression) {
    out.push('(');
    write_expression(out, expression);
    out.push(')');
}

fn write_binary(out: &mut String, binary: &BinaryExpression) {
    let own = Precedence::of_binary(binary.operator);
    let exponent = binary.operator == BinaryOperator::Exponent;

    // `**` groups to the right and refuses a bare unary on its left
    let left_needs_parens = match &*binary.left {
        Expression::Unary(_) if exponent => true,
        left => {
            let left_prec = Precedence::of(left);
            left_prec < own || (exponent && left_prec == own) || mixes_nullish(binary, left)
        }
    };
    let right_prec = Precedence::of(&binary.right);
    let right_needs_parens = right_prec < own
        || (!exponent && right_prec == own)
        || mixes_nullish(binary, &binary.right);

    write_maybe_parenthesized(out, &binary.left, left_needs_parens);
    out.push(' ');
    out.push_str(binary.operator.as_str());
    out.push(' ');
    write_maybe_parenthesized(out, &binary.right, right_needs_parens);
}

/// `??` cannot be mixed with `&&` or `||` without explicit grouping.
fn mixes_nullish(parent: &BinaryExpression, child: &Expression) -> bool {
    let Expression::Binary(child) = child else {
        return false;
    };
    let is_and_or =
        |op: BinaryOperator| matches!(op, BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr);
    (parent.operator == BinaryOperator::NullishCoalescing && is_and_or(child.operator))
        || (is_and_or(parent.operator) && child.operator == BinaryOperator::NullishCoalescing)
}

fn write_maybe_parenthesized(out: &mut String, expression: &Expression, parens: bool) {
    if parens {
        write_parenthesized(out, expression);
    } else {
        write_expression(out, expression);
    }
}

fn write_unary(out: &mut String, unary: &UnaryExpression) {
    let operator = unary.operator.as_str();
    out.push_str(operator);

    let mut operand = String::new();
    write_operand(&mut operand, &unary.argument, Precedence::Unary);

    // `- -x` and `+ +x` must not fuse into `--x` / `++x`
    let fuses = operand
        .chars()
        .next()
        .is_some_and(|c| operator.ends_with(c) && matches!(c, '-' | '+'));
    if unary.operator.is_keyword() || fuses {
        out.push(' ');
    }
    out.push_str(&operand);
}

fn write_member(out: &mut String, member: &MemberExpression) {
    match &*member.object {
        // `1.toString()` would read as a malformed number
        Expression::Literal(Literal::Number(n)) => {
            let text = format_number(*n);
            if text.bytes().all(|b| b.is_ascii_digit()) {
                out.push('(');
                out.push_str(&text);
                out.push(')');
            } else {
                out.push_str(&text);
            }
        }
        object => write_operand(out, object, Precedence::Call),
    }

    match &member.property {
        MemberProperty::Identifier(id) => {
            out.push('.');
            out.push_str(&id.name);
        }
        MemberProperty::Computed(property) => {
            out.push('[');
            write_expression(out, property);
            out.push(']');
        }
    }
}

fn write_arguments(out: &mut String, arguments: &[Expression]) {
    out.push('(');
    for (i, arg) in arguments.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_operand(out, arg, Precedence::Assignment);
    }
    out.push(')');
}

fn write_array(out: &mut String, array: &ArrayExpression) {
    out.push('[');
    for (i, element) in array.elements.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if let Some(element) = element {
            write_operand(out, element, Precedence::Assignment);
        }
    }
    // A trailing hole needs its own comma to survive
    if matches!(array.elements.last(), Some(None)) {
        out.push(',');
    }
    out.push(']');
}

fn write_object(out: &mut String, object: &ObjectExpression) {
    if object.properties.is_empty() {
        out.push_str("{}");
        return;
    }

    out.push_str("{ ");
    for (i, property) in object.properties.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        match &property.key {
            PropertyKey::Identifier(id) => out.push_str(&id.name),
            PropertyKey::Literal(literal) => write_literal(out, literal),
        }
        out.push_str(": ");
        write_operand(out, &property.value, Precedence::Assignment);
    }
    out.push_str(" }");
}

/// Whether a `new` callee would swallow a call's argument list.
fn contains_call(expression: &Expression) -> bool {
    match expression {
        Expression::Call(_) => true,
        Expression::Member(member) => contains_call(&member.object),
        _ => false,
    }
}

// ============================================================================
// Literals
// ============================================================================

fn write_literal(out: &mut String, literal: &Literal) {
    match literal {
        Literal::Number(n) => out.push_str(&format_number(*n)),
        Literal::String(s) => write_string(out, s),
        Literal::Boolean(true) => out.push_str("true"),
        Literal::Boolean(false) => out.push_str("false"),
        Literal::Null => out.push_str("null"),
    }
}

/// Formats a number the way JavaScript prints it.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if n == 0.0 {
        // Covers -0 as well
        return "0".to_string();
    }

    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        // Rust writes `1e21` where JavaScript writes `1e+21`
        let text = format!("{:e}", n);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        };
    }

    format!("{}", n)
}

fn write_string(out: &mut String, value: &str) {
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\u{b}' => out.push_str("\\v"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\x{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('\'');
}
