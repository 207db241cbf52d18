//! Output formats for built trees
//!
//!     - plist: the Apple property-list XML document, the converter's primary output
//!     - json:  a `serde_json` view of any node, used by trace events

pub mod json;
pub mod plist;

pub use json::to_json;
pub use plist::{render_node, render_plist, PLIST_FOOTER, PLIST_HEADER};
