//! # y2p
//!
//! A converter from a small, indentation-based markup subset into Apple property-list XML.
//!
//! File Layout
//!
//! The conversion runs in a single pass over the source lines. Parsing and rendering are kept
//! apart so that the same tree can be rendered as PLIST, inspected as JSON, or walked by tests.
//!
//! src/y2p
//!   ├── ast        Node model: arena tree, composites, shared reference registry, errors
//!   ├── parsing    Line classification and inline value literals
//!   ├── building   Indentation scopes, trace events and the line-oriented tree builder
//!   ├── formats    PLIST and JSON output
//!   ├── loader     Reading sources from disk or strings
//!   ├── pipeline   Build + render with the output mode selected by the caller
//!   └── testing    Fluent tree assertions and sample documents for tests
//!
//! For testing guidelines, see the [testing module](y2p::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod y2p;
