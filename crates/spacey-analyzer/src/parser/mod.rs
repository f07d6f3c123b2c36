//! Parser for JavaScript source code.
//!
//! Transforms a stream of tokens into an Abstract Syntax Tree (AST) whose
//! statements, identifiers, assignments and updates carry their source
//! line.
//!
//! ## Structure
//!
//! - `parser` - Main recursive descent parser implementation
//!
//! ## Documentation Submodules
//!
//! The following submodules provide documentation and additional tests
//! for specific parsing areas:
//!
//! - `statements` - Statement parsing (if, for, while, etc.)
//! - `expressions` - Expression parsing (operators, literals, calls)
//!
//! ## Usage
//!
//! ```rust
//! use spacey_analyzer::parser::Parser;
//!
//! let mut parser = Parser::new("let x = 1 + 2;");
//! let program = parser.parse_program().expect("Should parse");
//! assert_eq!(program.body.len(), 1);
//! ```

mod parser;

// Documentation and test submodules
pub mod expressions;
pub mod statements;

pub use parser::Parser;
