//! Conversion pipeline
//!
//! The pipeline runs two sequential steps:
//!
//! 1. **Building** - the line-oriented tree builder turns the whole source into a tree
//! 2. **Rendering** - the tree is rendered as PLIST
//!
//! The tree is always built completely before anything is rendered, so a failing document
//! never produces partial output.
//!
//! In [Mode::Trace] the rendering step is skipped and the parse decisions recorded while
//! building are returned instead. The two outputs are mutually exclusive.
//!
//! ```rust
//! use y2p_parser::y2p::pipeline::{Mode, Pipeline};
//!
//! let pipeline = Pipeline::new();
//! let plist = pipeline.convert("name: test\n")?;
//! let trace = pipeline.execute("name: test\n", Mode::Trace)?;
//! ```

use crate::y2p::ast::{ConvertError, Tree};
use crate::y2p::building::{build_tree, build_tree_with_trace, TraceEvent};
use crate::y2p::formats::plist::render_plist;

/// What the pipeline should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Plist,
    Trace,
}

/// Output of a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutput {
    Plist(String),
    Trace(Vec<TraceEvent>),
}

impl ExecutionOutput {
    /// Printable form: the PLIST document, or one trace event per line
    pub fn into_text(self) -> String {
        match self {
            ExecutionOutput::Plist(plist) => plist,
            ExecutionOutput::Trace(events) => events
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline;

impl Pipeline {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, source: &str) -> Result<Tree, ConvertError> {
        build_tree(source)
    }

    pub fn convert(&self, source: &str) -> Result<String, ConvertError> {
        let tree = self.build(source)?;
        render_plist(&tree)
    }

    pub fn execute(&self, source: &str, mode: Mode) -> Result<ExecutionOutput, ConvertError> {
        tracing::debug!(?mode, bytes = source.len(), "conversion started");
        match mode {
            Mode::Plist => self.convert(source).map(ExecutionOutput::Plist),
            Mode::Trace => {
                let mut events = Vec::new();
                build_tree_with_trace(source, &mut events)?;
                Ok(ExecutionOutput::Trace(events))
            }
        }
    }
}
