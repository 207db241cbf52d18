//! Parse trace events
//!
//!     The builder reports one event per decision it takes, in line order. The `Display` form of
//!     each event is the line printed by the command line tool in debug mode:
//!
//!         ---                      line without structure (blank, `---`, plain text)
//!         2: push obj()            bullet opened a new composite at column 2
//!         2: push var(base)        bullet appended shared reference `base` at column 2
//!         4: push "one"            bullet appended an inline value at column 4
//!         4: set name="test"       key assigned at column 4, value as compact JSON

use super::scope::Column;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// A line that opened or assigned nothing
    DocumentStart,
    PushObject {
        column: Column,
    },
    PushShared {
        column: Column,
        identifier: String,
    },
    PushValue {
        column: Column,
        value: Value,
    },
    Assign {
        column: Column,
        key: String,
        value: Value,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::DocumentStart => write!(f, "---"),
            TraceEvent::PushObject { column } => write!(f, "{}: push obj()", column),
            TraceEvent::PushShared { column, identifier } => {
                write!(f, "{}: push var({})", column, identifier)
            }
            TraceEvent::PushValue { column, value } => write!(f, "{}: push {}", column, value),
            TraceEvent::Assign { column, key, value } => {
                write!(f, "{}: set {}={}", column, key, value)
            }
        }
    }
}

/// Receiver of trace events
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);

    /// Builders skip assembling event payloads when this returns false
    fn is_enabled(&self) -> bool {
        true
    }
}

impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: TraceEvent) {
        self.push(event);
    }
}

/// Sink that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _event: TraceEvent) {}

    fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_forms() {
        assert_eq!(TraceEvent::DocumentStart.to_string(), "---");
        assert_eq!(
            TraceEvent::PushObject { column: 2 }.to_string(),
            "2: push obj()"
        );
        assert_eq!(
            TraceEvent::PushShared {
                column: 0,
                identifier: "base".to_string()
            }
            .to_string(),
            "0: push var(base)"
        );
        assert_eq!(
            TraceEvent::Assign {
                column: 4,
                key: "tags".to_string(),
                value: json!(["a", "b"]),
            }
            .to_string(),
            r#"4: set tags=["a","b"]"#
        );
    }
}
