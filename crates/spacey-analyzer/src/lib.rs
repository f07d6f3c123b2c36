// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # spacey-analyzer
//!
//! Flattens a small JavaScript program into an ordered table of steps.
//!
//! ## Overview
//!
//! Every declaration, control construct and mutating operation in the
//! program becomes one [`Record`] carrying its source line, its kind, and
//! the name, condition and value text that apply to it. Records appear in
//! source order, parents before children, so nesting survives as record
//! adjacency:
//!
//! - Lexer and parser for the supported JavaScript subset
//! - Canonical expression renderer
//! - The flattening pass itself
//! - Optional parallel and async batch front-ends
//!
//! ## Quick Start
//!
//! ```rust
//! use spacey_analyzer::{analyze, StepKind};
//!
//! let model = analyze("while (x > 5) { x = x - 1; }").unwrap();
//! assert_eq!(model.len(), 2);
//! assert_eq!(model.records()[0].kind(), StepKind::WhileStatement);
//! assert_eq!(model.records()[0].condition(), "x > 5");
//! assert_eq!(model.records()[1].value(), "x - 1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod flatten;
pub mod lexer;
pub mod parser;
pub mod render;

mod async_engine;

#[cfg(feature = "async")]
pub use async_engine::AsyncAnalyzer;
#[cfg(feature = "parallel")]
pub use async_engine::analyze_all;
pub use flatten::{Model, Record, StepKind, analyze_program};
pub use render::{CanonicalRenderer, ExpressionRenderer};

use parser::Parser;
use thiserror::Error;

/// Parses `source` and flattens it with the [`CanonicalRenderer`].
///
/// # Errors
///
/// Returns [`Error::Syntax`] when the text does not parse and
/// [`Error::Unsupported`] when the program contains a construct the
/// flattener has no rule for. No partial model is ever returned.
///
/// # Examples
///
/// ```rust
/// let model = spacey_analyzer::analyze("let x = 1;\nx++;").unwrap();
/// let json = serde_json::to_string(&model).unwrap();
/// assert!(json.contains(r#""Value":"x + 1""#));
/// ```
pub fn analyze(source: &str) -> Result<Model, Error> {
    let program = Parser::new(source).parse_program()?;
    analyze_program(&program, &CanonicalRenderer)
}

/// Errors that can occur while analyzing a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source text failed to parse
    #[error("SyntaxError: {message} (line {line})")]
    Syntax {
        /// What the parser expected or found
        message: String,
        /// 1-based line of the offending token
        line: u32,
    },

    /// A node kind, operator or shape with no flattening rule
    #[error("UnsupportedError: {construct} is not supported (line {line})")]
    Unsupported {
        /// The construct, e.g. `DoWhileStatement` or `*=`
        construct: String,
        /// 1-based line of the construct
        line: u32,
    },

    /// I/O error
    #[error("IOError: {0}")]
    Io(String),
}

impl Error {
    /// The source line the error points at, if any.
    pub fn line(&self) -> Option<u32> {
        match self {
            Error::Syntax { line, .. } | Error::Unsupported { line, .. } => Some(*line),
            Error::Io(_) => None,
        }
    }
}
