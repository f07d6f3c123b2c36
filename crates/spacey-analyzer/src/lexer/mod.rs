//! Lexical analysis (tokenization) for JavaScript source code.
//!
//! The lexer transforms JavaScript source text into a stream of tokens
//! that can be consumed by the parser. Every token carries the 1-based
//! line it starts on, which is where the line column of each step comes
//! from.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `token.rs` - `Token`, `TokenKind` and `Span` definitions
//!
//! ## Usage
//!
//! ```rust
//! use spacey_analyzer::lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let x = 42;");
//!
//! loop {
//!     let token = scanner.next_token();
//!     if matches!(token.kind, TokenKind::Eof) {
//!         break;
//!     }
//!     println!("{}: {:?}", token.line(), token.kind);
//! }
//! ```

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};
