//! Parsing of single lines and inline value literals
//!
//! Nothing in here tracks indentation: [line_classification] looks at one trimmed line,
//! [literal] at one value fragment. The [building](crate::y2p::building) module drives both.

pub mod line_classification;
pub mod literal;

pub use line_classification::{
    classify_sequence_item, classify_mapping_entry, measure_indent, MappingEntry, SequenceItem,
};
pub use literal::{parse_value, shared_identifier};
