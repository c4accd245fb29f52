//! Host context handed to the probe.
//!
//! The host passes this explicitly; the probe forwards it to the
//! dependency accessor that requires it and never looks up ambient state.

/// Default label for the startup hook the probe runs from.
pub const DEFAULT_ORIGIN: &str = "MainActivity.onCreate";

/// Identity of the host process at the point the probe runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    /// Application identifier of the host (e.g., "com.novacommerce.nova_commerce").
    pub package_name: String,
    /// Label of the startup hook that invoked the probe.
    pub origin: String,
}

impl HostContext {
    /// Create a context for the given package with the default origin label.
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }

    /// Set the startup hook label.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }
}
