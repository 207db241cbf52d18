//! Inline value literals
//!
//!     The right-hand side of a `key: value` line, or one element of an inline collection, is a
//!     value fragment. Fragments are tried in a fixed order, first match wins:
//!
//!         1. `{a: 1, b: 2}`  inline mapping
//!         2. `[a, b]`        inline sequence
//!         3. `&name`/`*name` shared reference
//!         4. anything else   string, with a leading and a trailing quote stripped
//!
//!     An empty fragment yields no node; callers substitute an empty composite, which is how a
//!     key opens a block whose children follow on deeper lines.
//!
//!     Inline collections are split on every comma. Nested brackets and quoted commas are not
//!     understood: `[a, [b, c]]` splits into `a`, `[b` and `c]`.

use crate::y2p::ast::{NodeError, NodeId, Tree};

const QUOTES: &[char] = &['"', '\''];

/// Parse a value fragment into a new node of `tree`
pub fn parse_value(tree: &mut Tree, fragment: &str) -> Result<Option<NodeId>, NodeError> {
    let fragment = fragment.trim();

    if let Some(contents) = enclosed(fragment, '{', '}') {
        return parse_inline_mapping(tree, contents).map(Some);
    }
    if let Some(contents) = enclosed(fragment, '[', ']') {
        return parse_inline_sequence(tree, contents).map(Some);
    }
    if let Some(identifier) = shared_identifier(fragment) {
        return Ok(Some(tree.resolve_shared_ref(identifier)));
    }
    if fragment.is_empty() {
        return Ok(None);
    }
    Ok(Some(tree.new_string_leaf(unquote(fragment))))
}

/// Identifier of a `&name` or `*name` fragment
pub fn shared_identifier(fragment: &str) -> Option<&str> {
    fragment.strip_prefix(&['&', '*'][..])
}

fn enclosed(fragment: &str, open: char, close: char) -> Option<&str> {
    fragment.strip_prefix(open)?.strip_suffix(close)
}

fn unquote(text: &str) -> &str {
    let text = text.strip_prefix(QUOTES).unwrap_or(text);
    text.strip_suffix(QUOTES).unwrap_or(text)
}

fn parse_inline_mapping(tree: &mut Tree, contents: &str) -> Result<NodeId, NodeError> {
    let mapping = tree.new_mapping();
    if contents.trim().is_empty() {
        return Ok(mapping);
    }
    for item in contents.split(',') {
        let (key, value) = item.split_once(':').unwrap_or((item, ""));
        let value = parse_or_empty(tree, value)?;
        tree.assign(mapping, unquote(key.trim()), value)?;
    }
    Ok(mapping)
}

fn parse_inline_sequence(tree: &mut Tree, contents: &str) -> Result<NodeId, NodeError> {
    let sequence = tree.new_sequence();
    if contents.trim().is_empty() {
        return Ok(sequence);
    }
    for item in contents.split(',') {
        let value = parse_or_empty(tree, item)?;
        tree.append(sequence, value)?;
    }
    Ok(sequence)
}

fn parse_or_empty(tree: &mut Tree, fragment: &str) -> Result<NodeId, NodeError> {
    match parse_value(tree, fragment)? {
        Some(node) => Ok(node),
        None => Ok(tree.new_composite()),
    }
}
