//! Probe settings.
//!
//! Host-side settings for the startup hook label that prefixes every record.
//! The probe itself has no settings and always targets the Firebase
//! entry-point type. Loading happens on the host's side; the probe never
//! touches the filesystem.
//!
//! ```yaml
//! origin: MainActivity.onCreate
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::context::{HostContext, DEFAULT_ORIGIN};
use crate::error::{ProbeError, Result};

/// How the host labels the probe's records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbeSettings {
    /// Label of the startup hook, used as the record prefix.
    pub origin: String,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

impl ProbeSettings {
    /// Build the host context for `package_name` using the configured origin.
    pub fn context(&self, package_name: impl Into<String>) -> HostContext {
        HostContext::new(package_name).with_origin(self.origin.clone())
    }
}

/// Load settings from a YAML file.
///
/// # Errors
///
/// Returns `SettingsNotFound` if the file doesn't exist.
/// Returns `Settings` if the YAML is invalid.
pub fn load_settings_file(path: &Path) -> Result<ProbeSettings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProbeError::SettingsNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProbeError::Io(e)
        }
    })?;

    parse_settings(&content, path)
}

/// Parse YAML content into settings.
///
/// Empty content yields the defaults.
pub fn parse_settings(content: &str, source_path: &Path) -> Result<ProbeSettings> {
    if content.trim().is_empty() {
        return Ok(ProbeSettings::default());
    }
    serde_yaml::from_str(content).map_err(|e| ProbeError::Settings {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
