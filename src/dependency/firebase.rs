//! Compiled-in adapter for the Firebase app registry.
//!
//! Models the part of the SDK's surface the probe reads: the list of live
//! apps, each app's name, and the default app name constant. Apps are
//! created before the adapter is registered; afterwards the only change a
//! host can make is deleting an app through the handle it kept.
//!
//! # Example
//!
//! ```
//! use nova_probe::dependency::{FirebaseApps, TypeRegistry, DEFAULT_APP_NAME};
//!
//! let mut apps = FirebaseApps::new();
//! let default_app = apps.initialize_default().unwrap();
//! assert_eq!(default_app.name().unwrap(), DEFAULT_APP_NAME);
//!
//! let mut registry = TypeRegistry::new();
//! apps.register(&mut registry);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{DependencyHandle, InstanceHandle, TypeRegistry};
use crate::context::HostContext;
use crate::error::AccessError;

/// Fully-qualified name of the Firebase entry-point type.
pub const FIREBASE_APP_TYPE: &str = "com.google.firebase.FirebaseApp";

/// Name the SDK gives its default app.
pub const DEFAULT_APP_NAME: &str = "[DEFAULT]";

/// A single initialized Firebase app.
#[derive(Debug)]
pub struct FirebaseApp {
    name: String,
    deleted: AtomicBool,
}

impl FirebaseApp {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            deleted: AtomicBool::new(false),
        }
    }

    /// The app's name. Fails once the app has been deleted.
    pub fn name(&self) -> Result<String, AccessError> {
        if self.is_deleted() {
            return Err(AccessError::Invocation {
                member: "getName".to_string(),
                message: "FirebaseApp was deleted".to_string(),
            });
        }
        Ok(self.name.clone())
    }

    /// Mark the app deleted. Later name lookups fail.
    pub fn delete(&self) {
        self.deleted.store(true, Ordering::SeqCst);
    }

    /// Whether [`FirebaseApp::delete`] has been called.
    pub fn is_deleted(&self) -> bool {
        self.deleted.load(Ordering::SeqCst)
    }
}

impl InstanceHandle for Arc<FirebaseApp> {
    fn name(&self) -> Result<String, AccessError> {
        FirebaseApp::name(self)
    }
}

/// The set of apps initialized in this process, in initialization order.
#[derive(Debug, Default)]
pub struct FirebaseApps {
    apps: Vec<Arc<FirebaseApp>>,
}

impl FirebaseApps {
    /// Create an empty app set (nothing initialized yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the default app.
    pub fn initialize_default(&mut self) -> Result<Arc<FirebaseApp>, AccessError> {
        self.initialize_app(DEFAULT_APP_NAME)
    }

    /// Initialize a named app. Names must be unique.
    pub fn initialize_app(&mut self, name: &str) -> Result<Arc<FirebaseApp>, AccessError> {
        let name = name.trim();
        if self.apps.iter().any(|app| app.name == name) {
            return Err(AccessError::Invocation {
                member: "initializeApp".to_string(),
                message: format!("FirebaseApp name {} already exists!", name),
            });
        }
        let app = Arc::new(FirebaseApp::new(name));
        self.apps.push(Arc::clone(&app));
        Ok(app)
    }

    /// Number of initialized apps, deleted or not.
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Whether no app has been initialized.
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Install this adapter into `registry` under [`FIREBASE_APP_TYPE`].
    pub fn register(self, registry: &mut TypeRegistry) {
        registry.register(FIREBASE_APP_TYPE, Box::new(self));
    }
}

impl DependencyHandle for FirebaseApps {
    fn live_instances(
        &self,
        _ctx: &HostContext,
    ) -> Result<Vec<Box<dyn InstanceHandle>>, AccessError> {
        Ok(self
            .apps
            .iter()
            .map(|app| Box::new(Arc::clone(app)) as Box<dyn InstanceHandle>)
            .collect())
    }

    fn default_instance_name(&self) -> Result<String, AccessError> {
        Ok(DEFAULT_APP_NAME.to_string())
    }
}
