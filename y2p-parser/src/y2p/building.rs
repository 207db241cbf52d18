//! Tree building
//!
//!     The builder walks the source one physical line at a time. Nesting is decided by
//!     indentation only: each line attaches to the node that is open at the closest column to
//!     its left, and a line at a shallower column closes every scope deeper than itself.
//!
//!     Modules:
//!
//!         - scope:   column to open node bookkeeping
//!         - trace:   events describing each parse decision, and the sinks that receive them
//!         - builder: the line loop

pub mod builder;
pub mod scope;
pub mod trace;

pub use builder::{build_tree, build_tree_with_trace, TreeBuilder};
pub use scope::{Column, ScopeStack, ROOT_COLUMN};
pub use trace::{NoTrace, TraceEvent, TraceSink};
