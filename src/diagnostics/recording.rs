//! Recording sink for testing.
//!
//! `RecordingSink` implements the `DiagnosticSink` trait and keeps every
//! record it receives so tests can assert on level, tag, message and cause.

use tracing::Level;

use super::{DiagnosticSink, LOG_TAG};
use crate::error::ProbeError;

/// Type and message of the error attached to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCause {
    pub kind: String,
    pub message: String,
}

/// A single captured record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub level: Level,
    pub tag: String,
    pub message: String,
    pub cause: Option<RecordedCause>,
}

/// Sink that captures records instead of emitting them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Vec<DiagnosticRecord>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured records, oldest first.
    pub fn records(&self) -> &[DiagnosticRecord] {
        &self.records
    }

    /// The only captured record. Panics unless exactly one was emitted.
    pub fn single(&self) -> &DiagnosticRecord {
        assert_eq!(
            self.records.len(),
            1,
            "expected exactly one record, got {:?}",
            self.records
        );
        &self.records[0]
    }
}

impl DiagnosticSink for RecordingSink {
    fn info(&mut self, message: &str) {
        self.records.push(DiagnosticRecord {
            level: Level::INFO,
            tag: LOG_TAG.to_string(),
            message: message.to_string(),
            cause: None,
        });
    }

    fn error(&mut self, message: &str, cause: &ProbeError) {
        self.records.push(DiagnosticRecord {
            level: Level::ERROR,
            tag: LOG_TAG.to_string(),
            message: message.to_string(),
            cause: Some(RecordedCause {
                kind: cause.kind().to_string(),
                message: cause.to_string(),
            }),
        });
    }
}
