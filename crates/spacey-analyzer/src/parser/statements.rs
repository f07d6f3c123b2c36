//! Statement parsing utilities and documentation.
//!
//! This module documents the statement parsing logic found in `parser.rs`.
//!
//! ## Statement Types
//!
//! | Statement | Method | Flattened |
//! |-----------|--------|-----------|
//! | Variable | `parse_variable_list` | yes |
//! | Function | `parse_function_declaration` | yes |
//! | If | `parse_if_statement` | yes |
//! | While | `parse_while_statement` | yes |
//! | For | `parse_for_statement` | yes |
//! | Return | `parse_return_statement` | yes |
//! | Expression | `parse_expression_statement` | assignments and updates |
//! | Switch | `parse_switch_statement` | no |
//! | Do-While | `parse_do_while_statement` | no |
//! | Break / Continue | `parse_jump` | no |
//! | Throw | `parse_throw_statement` | no |
//! | Try | `parse_try_statement` | no |
//! | Block | `parse_block` | no |
//! | Empty | inline in `parse_statement` | no |
//!
//! Statements the flattener has no rule for still parse, so the error a
//! caller sees names the construct and its line rather than a token.
//!
//! ## Bodies
//!
//! Loop bodies and `if`/`else` branches are stored as [`Body`](crate::ast::Body):
//! either a braced block or one unbraced statement. An `else` directly
//! followed by `if` becomes [`Alternate::ElseIf`](crate::ast::Alternate),
//! which is how an else-if ladder is told apart from an `else { if ... }`.
//!
//! ## Semicolons
//!
//! A statement-ending `;` may be left out before `}`, at the end of input,
//! or when the next token starts on a later line. `return`, `break` and
//! `continue` end at a line break, and a postfix `++`/`--` must sit on the
//! same line as its operand.
//!
//! ```text
//! let low = 0
//! let high = n - 1
//! while (low <= high) mid = (low + high) / 2
//! ```
