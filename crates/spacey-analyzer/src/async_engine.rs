//! Asynchronous and parallel analysis APIs.
//!
//! Analysis itself is synchronous and CPU-bound. This module adds
//! non-blocking file loading on top of it and a rayon-backed helper for
//! analysing many sources at once.
//!
//! # Example
//!
//! ```ignore
//! use spacey_analyzer::AsyncAnalyzer;
//!
//! #[tokio::main]
//! async fn main() {
//!     let analyzer = AsyncAnalyzer::new();
//!     let model = analyzer.analyze_file("search.js").await.unwrap();
//!     println!("{} steps", model.len());
//! }
//! ```

#[cfg(feature = "async")]
use std::path::Path;

#[cfg(feature = "async")]
use tokio::fs;

#[cfg(any(feature = "async", feature = "parallel"))]
use crate::{Error, Model};

#[cfg(feature = "async")]
use crate::flatten::analyze_program;
#[cfg(feature = "async")]
use crate::parser::Parser;
#[cfg(feature = "async")]
use crate::render::CanonicalRenderer;

/// Analyzes sources and files without blocking the async runtime on I/O.
#[cfg(feature = "async")]
#[derive(Debug, Clone, Default)]
pub struct AsyncAnalyzer {
    renderer: CanonicalRenderer,
}

#[cfg(feature = "async")]
impl AsyncAnalyzer {
    /// Creates a new async analyzer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzes source text.
    pub async fn analyze(&self, source: &str) -> Result<Model, Error> {
        let mut parser = Parser::new(source);
        let program = parser.parse_program()?;
        analyze_program(&program, &self.renderer)
    }

    /// Reads and analyzes a file.
    pub async fn analyze_file(&self, path: impl AsRef<Path>) -> Result<Model, Error> {
        let path = path.as_ref();

        let source = fs::read_to_string(path)
            .await
            .map_err(|e| Error::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded source");
        self.analyze(&source).await
    }

    /// Reads and analyzes several files concurrently.
    ///
    /// Results are returned in the same order as `paths`.
    pub async fn analyze_files(&self, paths: &[impl AsRef<Path>]) -> Vec<Result<Model, Error>> {
        let futures: Vec<_> = paths.iter().map(|p| self.analyze_file(p)).collect();

        futures::future::join_all(futures).await
    }
}

/// Analyzes every source on the rayon thread pool.
///
/// Each result sits at the index of its source.
#[cfg(feature = "parallel")]
pub fn analyze_all(sources: &[&str]) -> Vec<Result<Model, Error>> {
    use rayon::prelude::*;

    sources.par_iter().map(|source| crate::analyze(source)).collect()
}
