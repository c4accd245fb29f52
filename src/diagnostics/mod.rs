//! Diagnostic channel the probe reports through.
//!
//! This module provides:
//! - [`DiagnosticSink`] trait for the single record a probe run emits
//! - [`TracingSink`] which forwards records to `tracing`
//! - [`RecordingSink`] which captures records for assertions
//!
//! # Example
//!
//! ```
//! use nova_probe::diagnostics::{DiagnosticSink, RecordingSink};
//!
//! let mut sink = RecordingSink::new();
//! sink.info("MainActivity.onCreate FirebaseApp.getApps.size=0 hasDefault=false names=[]");
//! assert_eq!(sink.records().len(), 1);
//! ```

pub mod recording;

pub use recording::{DiagnosticRecord, RecordedCause, RecordingSink};

use crate::error::ProbeError;

/// Channel tag every probe record is addressed to.
pub const LOG_TAG: &str = "NovaFirebase";

/// Destination for probe records.
///
/// This trait allows capturing records in tests.
pub trait DiagnosticSink {
    /// Emit an informational record.
    fn info(&mut self, message: &str);

    /// Emit an error record with its cause attached.
    fn error(&mut self, message: &str, cause: &ProbeError);
}

/// Sink that emits through `tracing` with target [`LOG_TAG`].
///
/// Error records carry the cause as the `kind` and `cause` fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn info(&mut self, message: &str) {
        tracing::info!(target: LOG_TAG, "{}", message);
    }

    fn error(&mut self, message: &str, cause: &ProbeError) {
        tracing::error!(
            target: LOG_TAG,
            kind = cause.kind(),
            cause = %cause,
            "{}",
            message
        );
    }
}
