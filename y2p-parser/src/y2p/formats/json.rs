//! JSON view of tree nodes
//!
//! Strings become JSON strings, sequences arrays and mappings objects in insertion order.
//! A composite that never received a write has no content and becomes `null`. Shared nodes
//! are shown through their slot; a shared node reached again inside its own slot is `null`.

use crate::y2p::ast::{Composite, Node, NodeId, Tree};
use serde_json::{Map, Value};

pub fn to_json(tree: &Tree, id: NodeId) -> Value {
    let mut active = Vec::new();
    node_to_json(tree, id, &mut active)
}

fn node_to_json(tree: &Tree, id: NodeId, active: &mut Vec<NodeId>) -> Value {
    match tree.get(id) {
        Node::String(text) => Value::String(text.clone()),
        Node::Composite(composite) => composite_to_json(tree, composite, active),
        Node::Shared(shared) => {
            if active.contains(&shared.slot) {
                return Value::Null;
            }
            active.push(shared.slot);
            let value = node_to_json(tree, shared.slot, active);
            active.pop();
            value
        }
    }
}

fn composite_to_json(tree: &Tree, composite: &Composite, active: &mut Vec<NodeId>) -> Value {
    match composite {
        Composite::Empty => Value::Null,
        Composite::Sequence(items) => Value::Array(
            items
                .iter()
                .map(|item| node_to_json(tree, *item, active))
                .collect(),
        ),
        Composite::Mapping(entries) => {
            let mut object = Map::new();
            for (key, value) in entries {
                object.insert(key.clone(), node_to_json(tree, *value, active));
            }
            Value::Object(object)
        }
    }
}
