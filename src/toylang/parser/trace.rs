//! Trace of recognized constructs
//!
//! The parser reports each statement as soon as it has been fully matched, so a
//! failing parse still leaves the statements before the failure on record.

use serde::Serialize;
use std::fmt;

/// One recognized construct
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "statement", rename_all = "snake_case")]
pub enum TraceEvent {
    Declare {
        name: String,
    },
    Assign {
        target: String,
        left: String,
        operator: String,
        right: String,
    },
    Read {
        name: String,
    },
    Write {
        name: String,
    },
    /// The whole program matched and nothing follows it
    Program {
        statements: usize,
    },
}

/// Abstract shape of the construct, one trace line each
impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Declare { .. } => f.write_str("Declare statement: declare IDENTIFIER ;"),
            TraceEvent::Assign { .. } => {
                f.write_str("Assign statement: set IDENTIFIER = expression ;")
            }
            TraceEvent::Read { .. } => f.write_str("Read statement: read IDENTIFIER ;"),
            TraceEvent::Write { .. } => f.write_str("Write statement: write IDENTIFIER ;"),
            TraceEvent::Program { .. } => f.write_str("Program accepted: begin ... end"),
        }
    }
}

/// Receives trace events as the parser produces them
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: TraceEvent) {
        self.push(event);
    }
}
