//! Line-oriented tree builder
//!
//!     For every physical line:
//!
//!         1. Measure the indentation of the raw line and close every scope deeper than it.
//!            This includes the scope a `- key: value` item opened right of its bullet.
//!         2. If the trimmed line starts with a bullet (`- `), handle the item:
//!             - `- *name` appends shared reference `name` to the enclosing node; done.
//!             - `- key: value` opens a new composite at the line's column, appends it to the
//!               enclosing node, and continues with `key: value` at the column right after the
//!               bullet.
//!             - anything else is an inline value appended to the enclosing node.
//!         3. If the (remaining) text is `key: value`, assign the parsed value on the enclosing
//!            node and open it at the current column, so deeper lines nest inside the value.
//!
//!     The enclosing node of a column is the node open at the closest column to its left. The
//!     root only encloses column zero, so a document whose first content line is indented fails
//!     with `NoEnclosingScope`.
//!
//!     Whitespace-only lines do not close scopes.

use super::scope::{Column, ScopeStack};
use super::trace::{NoTrace, TraceEvent, TraceSink};
use crate::y2p::ast::{ConvertError, NodeId, Tree};
use crate::y2p::formats::json::to_json;
use crate::y2p::parsing::{
    classify_mapping_entry, classify_sequence_item, measure_indent, parse_value,
    shared_identifier,
};

/// Build a tree from `source`, discarding trace events
pub fn build_tree(source: &str) -> Result<Tree, ConvertError> {
    build_tree_with_trace(source, &mut NoTrace)
}

/// Build a tree from `source`, reporting every parse decision to `sink`
pub fn build_tree_with_trace(
    source: &str,
    sink: &mut dyn TraceSink,
) -> Result<Tree, ConvertError> {
    let mut builder = TreeBuilder::new(sink);
    for line in source.split('\n') {
        builder.process_line(line)?;
    }
    let tree = builder.finish();
    tracing::debug!(nodes = tree.node_count(), shared = tree.registry().len(), "tree built");
    Ok(tree)
}

pub struct TreeBuilder<'s> {
    tree: Tree,
    scopes: ScopeStack,
    line_number: usize,
    sink: &'s mut dyn TraceSink,
}

impl<'s> TreeBuilder<'s> {
    pub fn new(sink: &'s mut dyn TraceSink) -> Self {
        let tree = Tree::new();
        let scopes = ScopeStack::new(tree.root());
        Self {
            tree,
            scopes,
            line_number: 0,
            sink,
        }
    }

    /// Feed the next physical line, without its newline
    pub fn process_line(&mut self, raw: &str) -> Result<(), ConvertError> {
        self.line_number += 1;
        let line = raw.trim();
        if line.is_empty() {
            self.record(TraceEvent::DocumentStart);
            return Ok(());
        }

        let indent = measure_indent(raw) as Column;
        let closed = self.scopes.close_deeper(indent);
        if closed > 0 {
            tracing::trace!(line = self.line_number, indent, closed, "closed scopes");
        }

        let mut column = indent;
        let mut text = line;
        if let Some(item) = classify_sequence_item(line) {
            if let Some(identifier) = shared_identifier(item.rest) {
                let node = self.tree.resolve_shared_ref(identifier);
                self.append_to_enclosing(column, node)?;
                self.record(TraceEvent::PushShared {
                    column,
                    identifier: identifier.to_string(),
                });
                return Ok(());
            }

            if classify_mapping_entry(item.rest).is_none() {
                let node = self.parse_or_empty(item.rest)?;
                self.append_to_enclosing(column, node)?;
                self.scopes.open(column, node);
                if self.sink.is_enabled() {
                    let value = to_json(&self.tree, node);
                    self.record(TraceEvent::PushValue { column, value });
                }
                return Ok(());
            }

            let node = self.tree.new_composite();
            self.append_to_enclosing(column, node)?;
            self.scopes.open(column, node);
            self.record(TraceEvent::PushObject { column });

            column += item.bullet_width as Column;
            text = item.rest;
        }

        let Some(entry) = classify_mapping_entry(text) else {
            self.record(TraceEvent::DocumentStart);
            return Ok(());
        };
        let value = self.parse_or_empty(entry.value)?;
        let parent = self.enclosing(column)?;
        self.tree
            .assign(parent, entry.key, value)
            .map_err(ConvertError::mismatch(self.line_number))?;
        self.scopes.open(column, value);
        if self.sink.is_enabled() {
            let json = to_json(&self.tree, value);
            self.record(TraceEvent::Assign {
                column,
                key: entry.key.to_string(),
                value: json,
            });
        }
        Ok(())
    }

    /// Finish building and hand out the tree
    pub fn finish(self) -> Tree {
        self.tree
    }

    fn parse_or_empty(&mut self, fragment: &str) -> Result<NodeId, ConvertError> {
        let parsed = parse_value(&mut self.tree, fragment)
            .map_err(ConvertError::mismatch(self.line_number))?;
        Ok(match parsed {
            Some(node) => node,
            None => self.tree.new_composite(),
        })
    }

    fn enclosing(&self, column: Column) -> Result<NodeId, ConvertError> {
        self.scopes
            .enclosing(column)
            .ok_or(ConvertError::NoEnclosingScope {
                line: self.line_number,
                column,
            })
    }

    fn append_to_enclosing(&mut self, column: Column, node: NodeId) -> Result<(), ConvertError> {
        let parent = self.enclosing(column)?;
        self.tree
            .append(parent, node)
            .map_err(ConvertError::mismatch(self.line_number))
    }

    fn record(&mut self, event: TraceEvent) {
        if !self.sink.is_enabled() {
            return;
        }
        tracing::trace!(line = self.line_number, %event, "parse decision");
        self.sink.record(event);
    }
}
