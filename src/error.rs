//! Error types for probe operations.
//!
//! This module defines [`AccessError`], the failure of a single call into a
//! resolved dependency, and [`ProbeError`], the failure branch of a whole
//! probe run, plus a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every call into the dependency returns `Result<_, AccessError>`
//! - Step failures are lifted into `ProbeError` and end up in the failure record
//! - Nothing here is ever returned to the host from `InitializationProbe::run`

use std::path::PathBuf;
use thiserror::Error;

/// Failure of one operation on a resolved dependency or one of its instances.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The expected method or field does not exist on the dependency.
    #[error("No such member: {member}")]
    MissingMember { member: String },

    /// The member exists but its shape is not the one the probe expects.
    #[error("Member '{member}' has unexpected shape: expected {expected}, found {found}")]
    SignatureMismatch {
        member: String,
        expected: String,
        found: String,
    },

    /// The member raised while running.
    #[error("Invocation of '{member}' failed: {message}")]
    Invocation { member: String, message: String },

    /// Adapter code panicked while servicing the call.
    #[error("Invocation of '{member}' panicked: {message}")]
    Panicked { member: String, message: String },
}

impl AccessError {
    /// Short stable identifier for the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            AccessError::MissingMember { .. } => "missing_member",
            AccessError::SignatureMismatch { .. } => "signature_mismatch",
            AccessError::Invocation { .. } => "invocation",
            AccessError::Panicked { .. } => "panicked",
        }
    }

    /// Name of the member the failed call targeted.
    pub fn member(&self) -> &str {
        match self {
            AccessError::MissingMember { member }
            | AccessError::SignatureMismatch { member, .. }
            | AccessError::Invocation { member, .. }
            | AccessError::Panicked { member, .. } => member,
        }
    }
}

/// Core error type for probe operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The dependency's entry-point type could not be resolved.
    #[error("Dependency type not available: {type_name}")]
    Unavailable { type_name: String },

    /// The entry-point type resolved but its surface did not behave as expected.
    #[error("Failed to query {type_name}: {source}")]
    Access {
        type_name: String,
        #[source]
        source: AccessError,
    },

    /// Settings file not found at the given location.
    #[error("Settings not found: {path}")]
    SettingsNotFound { path: PathBuf },

    /// Failed to parse probe settings.
    #[error("Failed to parse settings at {path}: {message}")]
    Settings { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProbeError {
    /// Short stable identifier attached to failure records as the cause type.
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeError::Unavailable { .. } => "unavailable",
            ProbeError::Access { .. } => "access",
            ProbeError::SettingsNotFound { .. } => "settings_not_found",
            ProbeError::Settings { .. } => "settings",
            ProbeError::Io(_) => "io",
        }
    }
}

/// Result type alias for probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;
