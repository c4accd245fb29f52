//! Probe result types and log message rendering.

use std::fmt;

use crate::error::ProbeError;

/// Summary of the dependency's live instances at the moment of the probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// Size of the instance collection, before any name lookup failed.
    pub instance_count: usize,
    /// Names that could be read, in the collection's order.
    pub instance_names: Vec<String>,
    /// Whether the default-name constant is among `instance_names`.
    pub has_default: bool,
}

impl ProbeResult {
    /// Build a result from the raw count, extracted names and default constant.
    pub fn new(instance_count: usize, instance_names: Vec<String>, default_name: &str) -> Self {
        let has_default = instance_names.iter().any(|name| name == default_name);
        Self {
            instance_count,
            instance_names,
            has_default,
        }
    }

    /// Render the success log message for the given startup hook label.
    pub fn message(&self, origin: &str) -> String {
        format!(
            "{} FirebaseApp.getApps.size={} hasDefault={} names={}",
            origin,
            self.instance_count,
            self.has_default,
            NameList(&self.instance_names)
        )
    }
}

/// Outcome of one probe evaluation.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// The dependency was queried successfully.
    Success(ProbeResult),
    /// The dependency was absent or could not be queried.
    Failure(ProbeError),
}

impl ProbeOutcome {
    /// Whether this is the success arm.
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success(_))
    }

    /// The result, if the probe succeeded.
    pub fn result(&self) -> Option<&ProbeResult> {
        match self {
            ProbeOutcome::Success(result) => Some(result),
            ProbeOutcome::Failure(_) => None,
        }
    }

    /// The cause, if the probe failed.
    pub fn error(&self) -> Option<&ProbeError> {
        match self {
            ProbeOutcome::Success(_) => None,
            ProbeOutcome::Failure(err) => Some(err),
        }
    }
}

/// Render the failure log message for the given startup hook label.
///
/// Absent and mismatched dependencies share this message; only the attached
/// cause tells them apart.
pub fn failure_message(origin: &str) -> String {
    format!("{} unable to query FirebaseApp", origin)
}

/// `[a, b, c]` rendering of a name list.
struct NameList<'a>(&'a [String]);

impl fmt::Display for NameList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
