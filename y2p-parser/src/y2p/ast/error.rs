//! Error types for tree construction and rendering

use thiserror::Error;

/// A write rejected by the node it targeted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("cannot append to a mapping-typed node")]
    AppendToMapping,
    #[error("cannot assign key to a sequence-typed node")]
    AssignToSequence,
    /// String leaves are immutable and cannot hold children
    #[error("cannot nest values under a string node")]
    StringTarget,
}

/// Errors that abort a conversion
///
/// Every variant is fatal: the builder stops at the first one and no output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// An append or assign hit a node already fixed to the other kind
    #[error("line {line}: {source}")]
    StructuralMismatch {
        line: usize,
        #[source]
        source: NodeError,
    },
    /// No open node exists below the indentation column of a line
    #[error("line {line}: no node is open below indentation column {column}")]
    NoEnclosingScope { line: usize, column: isize },
    /// A shared reference was reached again while rendering its own slot
    #[error("shared reference '{identifier}' contains itself")]
    ReferenceCycle { identifier: String },
}

impl ConvertError {
    pub(crate) fn mismatch(line: usize) -> impl FnOnce(NodeError) -> Self {
        move |source| ConvertError::StructuralMismatch { line, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_carries_line() {
        let err = ConvertError::mismatch(4)(NodeError::AppendToMapping);
        assert_eq!(
            err.to_string(),
            "line 4: cannot append to a mapping-typed node"
        );
    }

    #[test]
    fn test_scope_message_carries_column() {
        let err = ConvertError::NoEnclosingScope { line: 1, column: 2 };
        assert_eq!(
            err.to_string(),
            "line 1: no node is open below indentation column 2"
        );
    }
}
