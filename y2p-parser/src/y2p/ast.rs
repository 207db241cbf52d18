//! Node model
//!
//!     Every node of a converted document lives in a [Tree] arena and is addressed by a
//!     [NodeId]. A node is one of three variants:
//!
//!         - String: an immutable text leaf.
//!         - Composite: a collection that starts out empty and becomes either a sequence or a
//!           mapping on its first write. The kind never changes afterwards.
//!         - Shared: an alias to a composite slot owned by the tree's shared reference registry.
//!           Every shared node created for the same identifier points at the same slot.
//!
//!     The tree owns its registry, so aliases never leak between two conversions.

pub mod error;
pub mod node;
pub mod registry;
pub mod tree;

pub use error::{ConvertError, NodeError};
pub use node::{Composite, Node, NodeId, SharedRef};
pub use registry::SharedRegistry;
pub use tree::Tree;
