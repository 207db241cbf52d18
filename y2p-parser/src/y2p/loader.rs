//! Document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading source text from files
//! or strings and running the conversion on it. This is used by both the command line tool
//! and tests.
//!
//! # Example
//!
//! ```rust
//! use y2p_parser::y2p::loader::DocumentLoader;
//!
//! // From file
//! let plist = DocumentLoader::from_path("settings.yml")?.convert()?;
//!
//! // From string
//! let tree = DocumentLoader::from_string("name: test\n").parse()?;
//! ```

use crate::y2p::ast::{ConvertError, Tree};
use crate::y2p::pipeline::{ExecutionOutput, Mode, Pipeline};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error that can occur when loading documents
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The source could not be read; conversion never started
    #[error("Cannot open file: {}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Source text plus shortcuts for running the pipeline on it
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "source loaded");
        Ok(DocumentLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Build the tree
    pub fn parse(&self) -> Result<Tree, LoaderError> {
        Ok(Pipeline::new().build(&self.source)?)
    }

    /// Build the tree and render it as a PLIST document
    pub fn convert(&self) -> Result<String, LoaderError> {
        Ok(Pipeline::new().convert(&self.source)?)
    }

    /// Run the pipeline in the given mode
    pub fn execute(&self, mode: Mode) -> Result<ExecutionOutput, LoaderError> {
        Ok(Pipeline::new().execute(&self.source, mode)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_unreadable() {
        let err = DocumentLoader::from_path("/nonexistent/y2p/input.yml").unwrap_err();
        assert!(matches!(err, LoaderError::SourceUnreadable { .. }));
        assert_eq!(err.to_string(), "Cannot open file: /nonexistent/y2p/input.yml");
    }

    #[test]
    fn test_convert_from_string() {
        let plist = DocumentLoader::from_string("name: test").convert().unwrap();
        assert!(plist.contains("<key>name</key>\n<string>test</string>"));
    }

    #[test]
    fn test_convert_error_passes_through() {
        let err = DocumentLoader::from_string("  indented: x").parse().unwrap_err();
        assert!(matches!(
            err,
            LoaderError::Convert(ConvertError::NoEnclosingScope { line: 1, column: 2 })
        ));
    }
}
