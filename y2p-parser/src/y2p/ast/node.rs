//! Node variants stored in the tree arena

use super::error::NodeError;
use indexmap::IndexMap;
use std::fmt;

/// Handle to a node stored in a [Tree](super::Tree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single node of the document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    String(String),
    Composite(Composite),
    Shared(SharedRef),
}

impl Node {
    /// Short name of the node kind, used in diagnostics and test failures
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::String(_) => "string",
            Node::Composite(composite) => composite.kind_name(),
            Node::Shared(_) => "shared",
        }
    }
}

/// Alias to a composite slot in the shared reference registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedRef {
    pub identifier: String,
    pub slot: NodeId,
}

/// A collection whose kind is fixed by its first write
///
/// `Empty` is the state of a freshly created composite, for instance the value of a key whose
/// children follow on deeper indented lines. `append` turns it into a `Sequence`, `assign` into
/// a `Mapping`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Composite {
    #[default]
    Empty,
    Sequence(Vec<NodeId>),
    Mapping(IndexMap<String, NodeId>),
}

impl Composite {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Composite::Empty => "empty",
            Composite::Sequence(_) => "sequence",
            Composite::Mapping(_) => "mapping",
        }
    }

    /// Append a value, fixing the composite to a sequence if it is still empty
    pub fn append(&mut self, value: NodeId) -> Result<(), NodeError> {
        match self {
            Composite::Empty => {
                *self = Composite::Sequence(vec![value]);
                Ok(())
            }
            Composite::Sequence(items) => {
                items.push(value);
                Ok(())
            }
            Composite::Mapping(_) => Err(NodeError::AppendToMapping),
        }
    }

    /// Assign `key`, fixing the composite to a mapping if it is still empty
    ///
    /// Re-assigning an existing key replaces its value and keeps its original position.
    pub fn assign(&mut self, key: impl Into<String>, value: NodeId) -> Result<(), NodeError> {
        match self {
            Composite::Empty => {
                let mut entries = IndexMap::new();
                entries.insert(key.into(), value);
                *self = Composite::Mapping(entries);
                Ok(())
            }
            Composite::Mapping(entries) => {
                entries.insert(key.into(), value);
                Ok(())
            }
            Composite::Sequence(_) => Err(NodeError::AssignToSequence),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Composite::Empty)
    }
}
