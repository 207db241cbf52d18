//! Testing utilities for tree assertions
//!
//!     Tests should not walk the arena by hand. Node handles, composite states and shared
//!     slots are implementation details; a test that matches on them breaks whenever the
//!     representation changes, and tends to check little more than counts.
//!
//!     Instead, use the fluent [assert_tree] API, which looks through shared references and
//!     reports the path of the failing node:
//!
//!     ```rust,ignore
//!     use y2p_parser::y2p::testing::{assert_tree, sample};
//!
//!     let tree = build_tree(&sample("basic-items")).unwrap();
//!
//!     assert_tree(&tree)
//!         .is_mapping()
//!         .keys(&["name", "items"])
//!         .key("name", |name| {
//!             name.string("test");
//!         })
//!         .key("items", |items| {
//!             items.is_sequence().item_count(2).item(0, |first| {
//!                 first.string("one");
//!             });
//!         });
//!     ```
//!
//!     Source documents for tests live in `tests/fixtures/<name>.yml` and are read with
//!     [sample].

use crate::y2p::ast::{Composite, Node, NodeId, Tree};
use std::path::PathBuf;

/// Read the sample document `tests/fixtures/<name>.yml`. Panics if it is missing.
pub fn sample(name: &str) -> String {
    let path = sample_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read sample {}: {}", path.display(), e))
}

pub fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.yml", name))
}

/// Create an assertion builder for the root of a tree
pub fn assert_tree(tree: &Tree) -> NodeAssertion<'_> {
    NodeAssertion {
        tree,
        id: tree.root(),
        context: "root".to_string(),
    }
}

pub struct NodeAssertion<'a> {
    tree: &'a Tree,
    id: NodeId,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    fn node(&self) -> &'a Node {
        self.tree.get(self.tree.resolve(self.id))
    }

    fn composite(&self) -> &'a Composite {
        match self.node() {
            Node::Composite(composite) => composite,
            other => panic!(
                "{}: Expected composite, found {}",
                self.context,
                other.kind_name()
            ),
        }
    }

    fn child(&self, id: NodeId, segment: String) -> NodeAssertion<'a> {
        NodeAssertion {
            tree: self.tree,
            id,
            context: format!("{}{}", self.context, segment),
        }
    }

    /// Assert this node is a string with exactly `expected` as text
    pub fn string(self, expected: &str) -> Self {
        match self.node() {
            Node::String(text) => assert_eq!(
                text, expected,
                "{}: Expected string {:?}, found {:?}",
                self.context, expected, text
            ),
            other => panic!(
                "{}: Expected string, found {}",
                self.context,
                other.kind_name()
            ),
        }
        self
    }

    pub fn is_mapping(self) -> Self {
        self.kind("mapping")
    }

    pub fn is_sequence(self) -> Self {
        self.kind("sequence")
    }

    /// Assert this node is a composite that never received a write
    pub fn is_empty_composite(self) -> Self {
        self.kind("empty")
    }

    fn kind(self, expected: &str) -> Self {
        let found = self.node().kind_name();
        assert_eq!(
            found, expected,
            "{}: Expected {}, found {}",
            self.context, expected, found
        );
        self
    }

    /// Assert this node is a shared reference named `identifier`
    pub fn is_shared(self, identifier: &str) -> Self {
        match self.tree.get(self.id) {
            Node::Shared(shared) => assert_eq!(
                shared.identifier, identifier,
                "{}: Expected shared reference {:?}, found {:?}",
                self.context, identifier, shared.identifier
            ),
            other => panic!(
                "{}: Expected shared reference, found {}",
                self.context,
                other.kind_name()
            ),
        }
        self
    }

    /// Assert this node and `other` see the same underlying node
    pub fn aliases(self, other: NodeId) -> Self {
        assert_eq!(
            self.tree.resolve(self.id),
            self.tree.resolve(other),
            "{}: Expected an alias of {}",
            self.context,
            other
        );
        self
    }

    /// Handle of the node under assertion, for use with [aliases](Self::aliases)
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Assert the mapping keys, in order
    pub fn keys(self, expected: &[&str]) -> Self {
        match self.composite() {
            Composite::Mapping(entries) => {
                let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
                assert_eq!(keys, expected, "{}: Unexpected keys", self.context);
            }
            other => panic!(
                "{}: Expected mapping, found {}",
                self.context,
                other.kind_name()
            ),
        }
        self
    }

    pub fn key_count(self, expected: usize) -> Self {
        match self.composite() {
            Composite::Mapping(entries) => assert_eq!(
                entries.len(),
                expected,
                "{}: Expected {} keys, found {}",
                self.context,
                expected,
                entries.len()
            ),
            other => panic!(
                "{}: Expected mapping, found {}",
                self.context,
                other.kind_name()
            ),
        }
        self
    }

    /// Run assertions on the value of `key`
    pub fn key<F>(self, key: &str, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let value = match self.composite() {
            Composite::Mapping(entries) => match entries.get(key) {
                Some(value) => *value,
                None => panic!("{}: Missing key {:?}", self.context, key),
            },
            other => panic!(
                "{}: Expected mapping, found {}",
                self.context,
                other.kind_name()
            ),
        };
        assertion(self.child(value, format!(".{}", key)));
        self
    }

    pub fn item_count(self, expected: usize) -> Self {
        match self.composite() {
            Composite::Sequence(items) => assert_eq!(
                items.len(),
                expected,
                "{}: Expected {} items, found {}",
                self.context,
                expected,
                items.len()
            ),
            other => panic!(
                "{}: Expected sequence, found {}",
                self.context,
                other.kind_name()
            ),
        }
        self
    }

    /// Run assertions on the sequence item at `index`
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let item = match self.composite() {
            Composite::Sequence(items) => match items.get(index) {
                Some(item) => *item,
                None => panic!(
                    "{}: Item {} out of range ({} items)",
                    self.context,
                    index,
                    items.len()
                ),
            },
            other => panic!(
                "{}: Expected sequence, found {}",
                self.context,
                other.kind_name()
            ),
        };
        assertion(self.child(item, format!("[{}]", index)));
        self
    }

    /// Assert the sequence items are strings with exactly these texts
    pub fn strings(self, expected: &[&str]) -> Self {
        let items = match self.composite() {
            Composite::Sequence(items) => items,
            other => panic!(
                "{}: Expected sequence, found {}",
                self.context,
                other.kind_name()
            ),
        };
        let texts: Vec<&str> = items
            .iter()
            .map(|item| match self.tree.get(self.tree.resolve(*item)) {
                Node::String(text) => text.as_str(),
                other => panic!(
                    "{}: Expected only strings, found {}",
                    self.context,
                    other.kind_name()
                ),
            })
            .collect();
        assert_eq!(texts, expected, "{}: Unexpected items", self.context);
        self
    }
}
