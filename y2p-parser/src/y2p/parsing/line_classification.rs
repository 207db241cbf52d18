//! Line Classification
//!
//! A trimmed source line is looked at twice: first as a possible sequence item (a dash bullet),
//! then, on whatever text remains after the bullet, as a possible `key: value` mapping entry.
//! Lines matching neither are structurally inert.

use once_cell::sync::Lazy;
use regex::Regex;

/// Dash followed by anything but another dash (`---` separators are not bullets)
static SEQUENCE_ITEM_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-[^-]").unwrap());

/// The bullet itself: the dash and the whitespace after it
static BULLET_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-\s*").unwrap());

/// Bare identifier key, optionally quoted, then a colon and the value fragment
static MAPPING_ENTRY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^["']?([a-zA-Z0-9_]+)["']?\s*:\s*(.*)$"#).unwrap());

/// A line starting with a list bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceItem<'a> {
    /// On-screen width of the bullet, dash included
    pub bullet_width: usize,
    /// Text after the bullet, trimmed
    pub rest: &'a str,
}

/// A `key: value` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingEntry<'a> {
    pub key: &'a str,
    /// Value fragment, possibly empty when the children follow on deeper lines
    pub value: &'a str,
}

/// Count of leading whitespace characters on the raw, untrimmed line
pub fn measure_indent(raw: &str) -> usize {
    raw.chars().take_while(|c| c.is_whitespace()).count()
}

/// Classify a trimmed line as a sequence item
pub fn classify_sequence_item(line: &str) -> Option<SequenceItem<'_>> {
    if !SEQUENCE_ITEM_REGEX.is_match(line) {
        return None;
    }
    let bullet = BULLET_REGEX.find(line)?;
    Some(SequenceItem {
        bullet_width: bullet.as_str().chars().count(),
        rest: line[bullet.end()..].trim(),
    })
}

/// Classify a trimmed line as a mapping entry
pub fn classify_mapping_entry(line: &str) -> Option<MappingEntry<'_>> {
    let captures = MAPPING_ENTRY_REGEX.captures(line)?;
    Some(MappingEntry {
        key: captures.get(1)?.as_str(),
        value: captures.get(2).map_or("", |value| value.as_str()),
    })
}
