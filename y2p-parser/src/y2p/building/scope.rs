//! Indentation scopes
//!
//! Maps an indentation column to the node currently open at that column. The root is bound to
//! the sentinel column [ROOT_COLUMN] and can never be closed. It only encloses column zero:
//! an indented line needs an open node at a column of its own indentation chain.

use crate::y2p::ast::NodeId;
use std::collections::BTreeMap;

/// Indentation column; signed to make room for the root sentinel
pub type Column = isize;

pub const ROOT_COLUMN: Column = -1;

#[derive(Debug, Clone)]
pub struct ScopeStack {
    open: BTreeMap<Column, NodeId>,
}

impl ScopeStack {
    pub fn new(root: NodeId) -> Self {
        let mut open = BTreeMap::new();
        open.insert(ROOT_COLUMN, root);
        Self { open }
    }

    /// Make `node` the open node at `column`, replacing any previous one
    pub fn open(&mut self, column: Column, node: NodeId) {
        self.open.insert(column, node);
    }

    /// Close every scope deeper than `indent` and return how many were closed
    ///
    /// `indent` itself stays open: a line at a sibling's column replaces that sibling with its
    /// own node instead of nesting under it.
    pub fn close_deeper(&mut self, indent: Column) -> usize {
        let before = self.open.len();
        self.open.retain(|column, _| *column <= indent);
        before - self.open.len()
    }

    /// The node open at the closest column strictly left of `column`
    pub fn enclosing(&self, column: Column) -> Option<NodeId> {
        match self.open.range(..column).next_back() {
            Some((&ROOT_COLUMN, _)) if column > 0 => None,
            Some((_, node)) => Some(*node),
            None => None,
        }
    }

    pub fn get(&self, column: Column) -> Option<NodeId> {
        self.open.get(&column).copied()
    }

    /// Columns with an open node, the root sentinel included
    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.open.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: usize) -> NodeId {
        NodeId(n)
    }

    #[test]
    fn test_root_encloses_column_zero_only() {
        let scopes = ScopeStack::new(id(0));
        assert_eq!(scopes.enclosing(0), Some(id(0)));
        assert_eq!(scopes.enclosing(2), None);
        assert_eq!(scopes.enclosing(ROOT_COLUMN), None);
    }

    #[test]
    fn test_enclosing_picks_closest_left_column() {
        let mut scopes = ScopeStack::new(id(0));
        scopes.open(0, id(1));
        scopes.open(4, id(2));

        assert_eq!(scopes.enclosing(2), Some(id(1)));
        assert_eq!(scopes.enclosing(4), Some(id(1)));
        assert_eq!(scopes.enclosing(5), Some(id(2)));
    }

    #[test]
    fn test_close_deeper_keeps_current_column() {
        let mut scopes = ScopeStack::new(id(0));
        scopes.open(0, id(1));
        scopes.open(2, id(2));
        scopes.open(4, id(3));
        scopes.open(8, id(4));

        assert_eq!(scopes.close_deeper(2), 2);

        assert_eq!(scopes.columns().collect::<Vec<_>>(), [ROOT_COLUMN, 0, 2]);
    }

    #[test]
    fn test_close_never_drops_root() {
        let mut scopes = ScopeStack::new(id(0));
        scopes.open(0, id(1));
        scopes.close_deeper(0);
        assert_eq!(scopes.get(ROOT_COLUMN), Some(id(0)));
        assert_eq!(scopes.get(0), Some(id(1)));
    }
}
