//! Shared reference registry
//!
//! Maps a shared reference identifier (`&name` or `*name` in the source) to the composite slot
//! every reference with that identifier aliases. Definition and use share one syntax, so the
//! first occurrence of an identifier creates the slot and later ones reuse it.

use super::node::NodeId;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    slots: HashMap<String, NodeId>,
}

impl SharedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identifier: &str) -> Option<NodeId> {
        self.slots.get(identifier).copied()
    }

    /// Return the slot for `identifier`, creating it with `create` on first use
    pub fn get_or_insert_with(
        &mut self,
        identifier: &str,
        create: impl FnOnce() -> NodeId,
    ) -> NodeId {
        if let Some(slot) = self.get(identifier) {
            return slot;
        }
        let slot = create();
        self.slots.insert(identifier.to_string(), slot);
        slot
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
