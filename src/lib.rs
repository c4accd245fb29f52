//! Nova probe - startup diagnostics for an optional singleton SDK.
//!
//! The probe answers one question early in host startup: has the optional
//! SDK already initialized itself? It looks the SDK up by name, reads its
//! live instances and logs a single record. It never initializes anything
//! and never fails the host.
//!
//! # Modules
//!
//! - [`context`] - Host context passed explicitly to the probe
//! - [`dependency`] - Access surface of the optional dependency and its lookup
//! - [`diagnostics`] - Record sinks and the probe's log channel
//! - [`error`] - Error types and result aliases
//! - [`host`] - Startup hook integration
//! - [`logging`] - Tracing subscriber setup
//! - [`probe`] - The initialization probe and its results
//! - [`settings`] - Probe settings loading
//!
//! # Example
//!
//! ```
//! use nova_probe::context::HostContext;
//! use nova_probe::dependency::TypeRegistry;
//! use nova_probe::diagnostics::RecordingSink;
//! use nova_probe::probe::InitializationProbe;
//!
//! // Nothing registered: the SDK is not linked into this host.
//! let registry = TypeRegistry::new();
//! let mut sink = RecordingSink::new();
//! let ctx = HostContext::new("com.novacommerce.nova_commerce");
//! InitializationProbe::new(&registry).run(&ctx, &mut sink);
//!
//! assert_eq!(sink.single().message, "MainActivity.onCreate unable to query FirebaseApp");
//! ```

pub mod context;
pub mod dependency;
pub mod diagnostics;
pub mod error;
pub mod host;
pub mod logging;
pub mod probe;
pub mod settings;

pub use context::HostContext;
pub use error::{AccessError, ProbeError, Result};
pub use probe::{InitializationProbe, ProbeOutcome, ProbeResult};
