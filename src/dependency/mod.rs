//! Access surface of an optional dependency.
//!
//! The probe never links against the dependency directly. It asks a
//! [`DependencyResolver`] for the entry-point type by name and then talks to
//! whatever [`DependencyHandle`] comes back, treating every call as fallible.
//!
//! # Modules
//!
//! - [`firebase`] - Compiled-in adapter modelling the Firebase app registry
//! - [`registry`] - Name-based lookup of entry-point types

pub mod firebase;
pub mod registry;

pub use firebase::{FirebaseApp, FirebaseApps, DEFAULT_APP_NAME, FIREBASE_APP_TYPE};
pub use registry::TypeRegistry;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::context::HostContext;
use crate::error::AccessError;

/// A live instance of the dependency.
pub trait InstanceHandle {
    /// Display name of this instance.
    fn name(&self) -> Result<String, AccessError>;
}

/// The dependency's entry-point type, as seen through the probe.
pub trait DependencyHandle {
    /// All live instances, in the dependency's own iteration order.
    ///
    /// The host context satisfies the accessor's required argument.
    fn live_instances(&self, ctx: &HostContext)
        -> Result<Vec<Box<dyn InstanceHandle>>, AccessError>;

    /// The constant naming the instance the dependency treats as default.
    fn default_instance_name(&self) -> Result<String, AccessError>;
}

/// Outcome of looking up an entry-point type by name.
pub enum Resolution<'a> {
    /// The type is not present in this process.
    Absent,
    /// The type resolved; the handle is only borrowed for one probe run.
    Present(&'a dyn DependencyHandle),
}

impl Resolution<'_> {
    /// Whether the type resolved.
    pub fn is_present(&self) -> bool {
        matches!(self, Resolution::Present(_))
    }
}

/// Locates entry-point types by fully-qualified name.
pub trait DependencyResolver {
    /// Resolve `type_name`, returning [`Resolution::Absent`] when it is unknown.
    fn resolve(&self, type_name: &str) -> Resolution<'_>;
}

/// Run one call into adapter code, turning a panic into [`AccessError::Panicked`].
///
/// The panic is contained, not silenced: the process panic hook still runs,
/// so with the default hook each contained panic is also printed to stderr.
pub(crate) fn guarded<T>(
    member: &str,
    call: impl FnOnce() -> Result<T, AccessError>,
) -> Result<T, AccessError> {
    contained(member, call)?
}

/// Run `call`, reporting a panic as [`AccessError::Panicked`] against `member`.
///
/// Same stderr caveat as [`guarded`].
pub(crate) fn contained<T>(member: &str, call: impl FnOnce() -> T) -> Result<T, AccessError> {
    panic::catch_unwind(AssertUnwindSafe(call)).map_err(|payload| AccessError::Panicked {
        member: member.to_string(),
        message: panic_message(payload.as_ref()),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
