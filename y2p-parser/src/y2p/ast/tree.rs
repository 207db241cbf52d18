//! Arena holding every node of one converted document

use super::error::NodeError;
use super::node::{Composite, Node, NodeId, SharedRef};
use super::registry::SharedRegistry;

/// A document tree
///
/// The root is a composite created together with the tree. Nodes are only ever added, never
/// removed; once building finishes the tree is treated as read-only.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
    registry: SharedRegistry,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::Composite(Composite::Empty)],
            root: NodeId(0),
            registry: SharedRegistry::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the arena, the root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Get a node. Panics if `id` was not created by this tree.
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn new_string_leaf(&mut self, text: impl Into<String>) -> NodeId {
        self.insert(Node::String(text.into()))
    }

    /// A composite with no kind yet
    pub fn new_composite(&mut self) -> NodeId {
        self.insert(Node::Composite(Composite::Empty))
    }

    /// A composite fixed to a sequence with no items (`[]`)
    pub fn new_sequence(&mut self) -> NodeId {
        self.insert(Node::Composite(Composite::Sequence(Vec::new())))
    }

    /// A composite fixed to a mapping with no entries (`{}`)
    pub fn new_mapping(&mut self) -> NodeId {
        self.insert(Node::Composite(Composite::Mapping(Default::default())))
    }

    /// Create a shared node aliasing the slot registered for `identifier`
    ///
    /// The slot is created as an empty composite on first use and reused afterwards, so every
    /// shared node with the same identifier observes the same writes.
    pub fn resolve_shared_ref(&mut self, identifier: &str) -> NodeId {
        let nodes = &mut self.nodes;
        let slot = self.registry.get_or_insert_with(identifier, || {
            let id = NodeId(nodes.len());
            nodes.push(Node::Composite(Composite::Empty));
            id
        });
        self.insert(Node::Shared(SharedRef {
            identifier: identifier.to_string(),
            slot,
        }))
    }

    /// Follow a shared node to its slot; other nodes resolve to themselves
    pub fn resolve(&self, id: NodeId) -> NodeId {
        match self.get(id) {
            Node::Shared(shared) => shared.slot,
            _ => id,
        }
    }

    /// The composite behind `id`, looking through shared references
    pub fn composite(&self, id: NodeId) -> Option<&Composite> {
        match self.get(self.resolve(id)) {
            Node::Composite(composite) => Some(composite),
            _ => None,
        }
    }

    fn composite_mut(&mut self, id: NodeId) -> Result<&mut Composite, NodeError> {
        let target = self.resolve(id);
        match &mut self.nodes[target.0] {
            Node::Composite(composite) => Ok(composite),
            _ => Err(NodeError::StringTarget),
        }
    }

    /// Append `value` to the composite behind `target`
    pub fn append(&mut self, target: NodeId, value: NodeId) -> Result<(), NodeError> {
        self.composite_mut(target)?.append(value)
    }

    /// Assign `key` on the composite behind `target`
    pub fn assign(
        &mut self,
        target: NodeId,
        key: impl Into<String>,
        value: NodeId,
    ) -> Result<(), NodeError> {
        self.composite_mut(target)?.assign(key, value)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_starts_empty() {
        let tree = Tree::new();
        assert_eq!(tree.composite(tree.root()), Some(&Composite::Empty));
    }

    #[test]
    fn test_shared_refs_alias_one_slot() {
        let mut tree = Tree::new();
        let first = tree.resolve_shared_ref("base");
        let second = tree.resolve_shared_ref("base");
        assert_ne!(first, second);
        assert_eq!(tree.resolve(first), tree.resolve(second));

        let leaf = tree.new_string_leaf("1");
        tree.assign(second, "x", leaf).unwrap();

        let Some(Composite::Mapping(entries)) = tree.composite(first) else {
            panic!("expected mapping behind the first alias");
        };
        assert_eq!(entries["x"], leaf);
        assert_eq!(tree.registry().len(), 1);
    }

    #[test]
    fn test_distinct_identifiers_get_distinct_slots() {
        let mut tree = Tree::new();
        let a = tree.resolve_shared_ref("a");
        let b = tree.resolve_shared_ref("b");
        assert_ne!(tree.resolve(a), tree.resolve(b));
    }

    #[test]
    fn test_append_after_assign_fails() {
        let mut tree = Tree::new();
        let root = tree.root();
        let leaf = tree.new_string_leaf("v");
        tree.assign(root, "k", leaf).unwrap();
        assert_eq!(tree.append(root, leaf), Err(NodeError::AppendToMapping));
    }

    #[test]
    fn test_assign_after_append_fails() {
        let mut tree = Tree::new();
        let list = tree.new_composite();
        let leaf = tree.new_string_leaf("v");
        tree.append(list, leaf).unwrap();
        assert_eq!(tree.assign(list, "k", leaf), Err(NodeError::AssignToSequence));
    }

    #[test]
    fn test_string_leaf_rejects_children() {
        let mut tree = Tree::new();
        let leaf = tree.new_string_leaf("");
        let other = tree.new_string_leaf("x");
        assert_eq!(tree.append(leaf, other), Err(NodeError::StringTarget));
    }
}
