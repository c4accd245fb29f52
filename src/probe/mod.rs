//! Startup probe for an optional singleton SDK.
//!
//! The host calls [`InitializationProbe::run`] once from its startup hook,
//! before handing control to anything else. The probe looks the SDK's
//! entry-point type up by name, lists its live instances, reads the default
//! instance name and emits exactly one record describing what it saw. It
//! never initializes the SDK and never returns an error to the host.
//!
//! # Example
//!
//! ```
//! use nova_probe::context::HostContext;
//! use nova_probe::dependency::{FirebaseApps, TypeRegistry};
//! use nova_probe::diagnostics::RecordingSink;
//! use nova_probe::probe::InitializationProbe;
//!
//! let mut apps = FirebaseApps::new();
//! apps.initialize_default().unwrap();
//! let mut registry = TypeRegistry::new();
//! apps.register(&mut registry);
//!
//! let mut sink = RecordingSink::new();
//! let ctx = HostContext::new("com.novacommerce.nova_commerce");
//! InitializationProbe::new(&registry).run(&ctx, &mut sink);
//!
//! assert_eq!(
//!     sink.single().message,
//!     "MainActivity.onCreate FirebaseApp.getApps.size=1 hasDefault=true names=[[DEFAULT]]"
//! );
//! ```

pub mod result;

pub use result::{failure_message, ProbeOutcome, ProbeResult};

use crate::context::HostContext;
use crate::dependency::{
    contained, guarded, DependencyHandle, DependencyResolver, Resolution, FIREBASE_APP_TYPE,
};
use crate::diagnostics::DiagnosticSink;
use crate::error::{AccessError, ProbeError, Result};

/// Member names used when reporting which call failed.
const RESOLVE_MEMBER: &str = "forName";
const INSTANCES_MEMBER: &str = "getApps";
const DEFAULT_NAME_MEMBER: &str = "DEFAULT_APP_NAME";
const NAME_MEMBER: &str = "getName";

/// One-shot check of whether the Firebase SDK is already initialized.
pub struct InitializationProbe<'r> {
    resolver: &'r dyn DependencyResolver,
}

impl<'r> InitializationProbe<'r> {
    /// Create a probe that looks up [`FIREBASE_APP_TYPE`] through `resolver`.
    pub fn new(resolver: &'r dyn DependencyResolver) -> Self {
        Self { resolver }
    }

    /// Fully-qualified name of the type this probe looks for.
    pub fn entry_type(&self) -> &'static str {
        FIREBASE_APP_TYPE
    }

    /// Query the dependency and emit one record to `sink`.
    ///
    /// Always returns normally, whatever the dependency does.
    pub fn run(&self, ctx: &HostContext, sink: &mut dyn DiagnosticSink) {
        match self.evaluate(ctx) {
            ProbeOutcome::Success(result) => sink.info(&result.message(&ctx.origin)),
            ProbeOutcome::Failure(err) => sink.error(&failure_message(&ctx.origin), &err),
        }
    }

    /// Query the dependency without emitting anything.
    pub fn evaluate(&self, ctx: &HostContext) -> ProbeOutcome {
        // Adapter code also runs outside the guarded calls, e.g. when the
        // instance list is dropped, so the whole query is contained too.
        match contained(INSTANCES_MEMBER, || self.query(ctx)) {
            Ok(Ok(result)) => ProbeOutcome::Success(result),
            Ok(Err(err)) => ProbeOutcome::Failure(err),
            Err(source) => ProbeOutcome::Failure(access_error(source)),
        }
    }

    fn query(&self, ctx: &HostContext) -> Result<ProbeResult> {
        let handle = self.resolve()?;

        let instances = guarded(INSTANCES_MEMBER, || handle.live_instances(ctx))
            .map_err(access_error)?;
        let default_name = guarded(DEFAULT_NAME_MEMBER, || handle.default_instance_name())
            .map_err(access_error)?;

        // A failing instance is dropped from the names but still counted.
        let names = instances
            .iter()
            .filter_map(|instance| guarded(NAME_MEMBER, || instance.name()).ok())
            .collect();

        Ok(ProbeResult::new(instances.len(), names, &default_name))
    }

    fn resolve(&self) -> Result<&'r dyn DependencyHandle> {
        let resolver = self.resolver;
        match guarded(RESOLVE_MEMBER, || Ok(resolver.resolve(FIREBASE_APP_TYPE))) {
            Ok(Resolution::Present(handle)) => Ok(handle),
            Ok(Resolution::Absent) => Err(ProbeError::Unavailable {
                type_name: FIREBASE_APP_TYPE.to_string(),
            }),
            Err(source) => Err(access_error(source)),
        }
    }
}

fn access_error(source: AccessError) -> ProbeError {
    ProbeError::Access {
        type_name: FIREBASE_APP_TYPE.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency::{InstanceHandle, TypeRegistry};
    use crate::diagnostics::RecordingSink;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tracing::Level;

    fn ctx() -> HostContext {
        HostContext::new("com.novacommerce.nova_commerce")
    }

    /// Instance whose name lookup returns a fixed result.
    struct FakeInstance(std::result::Result<String, AccessError>);

    impl InstanceHandle for FakeInstance {
        fn name(&self) -> std::result::Result<String, AccessError> {
            self.0.clone()
        }
    }

    /// Instance whose name lookup panics.
    struct PanickingInstance;

    impl InstanceHandle for PanickingInstance {
        fn name(&self) -> std::result::Result<String, AccessError> {
            panic!("name accessor exploded")
        }
    }

    /// Instance that names itself fine but panics when dropped.
    struct ExplodingDrop;

    impl InstanceHandle for ExplodingDrop {
        fn name(&self) -> std::result::Result<String, AccessError> {
            Ok("[DEFAULT]".to_string())
        }
    }

    impl Drop for ExplodingDrop {
        fn drop(&mut self) {
            panic!("instance teardown exploded");
        }
    }

    /// Entry point with configurable behavior per member.
    #[derive(Default)]
    struct FakeSdk {
        names: Vec<Option<&'static str>>,
        panicking_instance: bool,
        exploding_drop: bool,
        instances_error: Option<AccessError>,
        default_error: Option<AccessError>,
        panic_in_instances: bool,
        panic_in_default: bool,
        seen_package: Rc<RefCell<Option<String>>>,
    }

    impl DependencyHandle for FakeSdk {
        fn live_instances(
            &self,
            ctx: &HostContext,
        ) -> std::result::Result<Vec<Box<dyn InstanceHandle>>, AccessError> {
            *self.seen_package.borrow_mut() = Some(ctx.package_name.clone());
            if self.panic_in_instances {
                panic!("getApps blew up");
            }
            if let Some(err) = &self.instances_error {
                return Err(err.clone());
            }
            let mut instances: Vec<Box<dyn InstanceHandle>> = self
                .names
                .iter()
                .map(|name| {
                    let result = match name {
                        Some(n) => Ok(n.to_string()),
                        None => Err(AccessError::Invocation {
                            member: "getName".into(),
                            message: "FirebaseApp was deleted".into(),
                        }),
                    };
                    Box::new(FakeInstance(result)) as Box<dyn InstanceHandle>
                })
                .collect();
            if self.panicking_instance {
                instances.push(Box::new(PanickingInstance));
            }
            if self.exploding_drop {
                instances.push(Box::new(ExplodingDrop));
            }
            Ok(instances)
        }

        fn default_instance_name(&self) -> std::result::Result<String, AccessError> {
            if self.panic_in_default {
                panic!("DEFAULT_APP_NAME read failed");
            }
            match &self.default_error {
                Some(err) => Err(err.clone()),
                None => Ok("[DEFAULT]".to_string()),
            }
        }
    }

    fn registry_with(sdk: FakeSdk) -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register(FIREBASE_APP_TYPE, Box::new(sdk));
        registry
    }

    /// Resolver that panics on lookup.
    struct PanickingResolver;

    impl DependencyResolver for PanickingResolver {
        fn resolve(&self, _type_name: &str) -> Resolution<'_> {
            panic!("class loader unavailable")
        }
    }

    #[test]
    fn absent_dependency_is_unavailable() {
        let registry = TypeRegistry::new();
        let outcome = InitializationProbe::new(&registry).evaluate(&ctx());

        match outcome {
            ProbeOutcome::Failure(ProbeError::Unavailable { type_name }) => {
                assert_eq!(type_name, "com.google.firebase.FirebaseApp");
            }
            other => panic!("Expected Unavailable, got {:?}", other),
        }
    }

    #[test]
    fn absent_dependency_logs_one_error() {
        let registry = TypeRegistry::new();
        let mut sink = RecordingSink::new();
        InitializationProbe::new(&registry).run(&ctx(), &mut sink);

        let record = sink.single();
        assert_eq!(record.level, Level::ERROR);
        assert_eq!(record.tag, "NovaFirebase");
        assert_eq!(
            record.message,
            "MainActivity.onCreate unable to query FirebaseApp"
        );
        assert_eq!(record.cause.as_ref().unwrap().kind, "unavailable");
    }

    #[test]
    fn zero_instances() {
        let registry = registry_with(FakeSdk::default());
        let outcome = InitializationProbe::new(&registry).evaluate(&ctx());

        let result = outcome.result().unwrap();
        assert_eq!(result.instance_count, 0);
        assert!(result.instance_names.is_empty());
        assert!(!result.has_default);
    }

    #[test]
    fn single_default_instance() {
        let registry = registry_with(FakeSdk {
            names: vec![Some("[DEFAULT]")],
            ..Default::default()
        });
        let mut sink = RecordingSink::new();
        InitializationProbe::new(&registry).run(&ctx(), &mut sink);

        let record = sink.single();
        assert_eq!(record.level, Level::INFO);
        assert_eq!(
            record.message,
            "MainActivity.onCreate FirebaseApp.getApps.size=1 hasDefault=true names=[[DEFAULT]]"
        );
    }

    #[test]
    fn names_keep_source_order() {
        let registry = registry_with(FakeSdk {
            names: vec![Some("secondary"), Some("[DEFAULT]"), Some("analytics")],
            ..Default::default()
        });
        let outcome = InitializationProbe::new(&registry).evaluate(&ctx());

        assert_eq!(
            outcome.result().unwrap().instance_names,
            vec!["secondary", "[DEFAULT]", "analytics"]
        );
    }

    #[test]
    fn failed_instance_is_skipped_but_counted() {
        let registry = registry_with(FakeSdk {
            names: vec![Some("[DEFAULT]"), None, Some("secondary")],
            ..Default::default()
        });
        let mut sink = RecordingSink::new();
        InitializationProbe::new(&registry).run(&ctx(), &mut sink);

        let record = sink.single();
        assert_eq!(record.level, Level::INFO);
        assert_eq!(
            record.message,
            "MainActivity.onCreate FirebaseApp.getApps.size=3 hasDefault=true names=[[DEFAULT], secondary]"
        );
    }

    #[test]
    fn panicking_instance_is_skipped() {
        let registry = registry_with(FakeSdk {
            names: vec![Some("secondary")],
            panicking_instance: true,
            ..Default::default()
        });
        let outcome = InitializationProbe::new(&registry).evaluate(&ctx());

        let result = outcome.result().unwrap();
        assert_eq!(result.instance_count, 2);
        assert_eq!(result.instance_names, vec!["secondary"]);
        assert!(!result.has_default);
    }

    #[test]
    fn default_instance_failing_name_means_no_default() {
        let registry = registry_with(FakeSdk {
            names: vec![None],
            ..Default::default()
        });
        let outcome = InitializationProbe::new(&registry).evaluate(&ctx());

        let result = outcome.result().unwrap();
        assert_eq!(result.instance_count, 1);
        assert!(result.instance_names.is_empty());
        assert!(!result.has_default);
    }

    #[test]
    fn instances_error_is_access_failure() {
        let registry = registry_with(FakeSdk {
            instances_error: Some(AccessError::SignatureMismatch {
                member: "getApps".into(),
                expected: "list of instances".into(),
                found: "string".into(),
            }),
            ..Default::default()
        });
        let mut sink = RecordingSink::new();
        InitializationProbe::new(&registry).run(&ctx(), &mut sink);

        let record = sink.single();
        assert_eq!(record.level, Level::ERROR);
        assert_eq!(
            record.message,
            "MainActivity.onCreate unable to query FirebaseApp"
        );
        let cause = record.cause.as_ref().unwrap();
        assert_eq!(cause.kind, "access");
        assert!(cause.message.contains("list of instances"));
    }

    #[test]
    fn default_name_error_is_access_failure() {
        let registry = registry_with(FakeSdk {
            names: vec![Some("[DEFAULT]")],
            default_error: Some(AccessError::MissingMember {
                member: "DEFAULT_APP_NAME".into(),
            }),
            ..Default::default()
        });
        let outcome = InitializationProbe::new(&registry).evaluate(&ctx());

        match outcome {
            ProbeOutcome::Failure(ProbeError::Access { source, .. }) => {
                assert_eq!(source.member(), "DEFAULT_APP_NAME");
            }
            other => panic!("Expected Access, got {:?}", other),
        }
    }

    #[test]
    fn panic_in_accessor_is_contained() {
        let registry = registry_with(FakeSdk {
            panic_in_instances: true,
            ..Default::default()
        });
        let mut sink = RecordingSink::new();
        InitializationProbe::new(&registry).run(&ctx(), &mut sink);

        let record = sink.single();
        assert_eq!(record.level, Level::ERROR);
        let cause = record.cause.as_ref().unwrap();
        assert_eq!(cause.kind, "access");
        assert!(cause.message.contains("getApps blew up"));
    }

    #[test]
    fn panic_in_resolver_is_contained() {
        let resolver = PanickingResolver;
        let outcome = InitializationProbe::new(&resolver).evaluate(&ctx());

        match outcome {
            ProbeOutcome::Failure(ProbeError::Access { source, .. }) => {
                assert_eq!(source.kind(), "panicked");
                assert_eq!(source.member(), "forName");
            }
            other => panic!("Expected Access, got {:?}", other),
        }
    }

    #[test]
    fn absent_and_mismatch_share_message() {
        let empty = TypeRegistry::new();
        let broken = registry_with(FakeSdk {
            instances_error: Some(AccessError::MissingMember {
                member: "getApps".into(),
            }),
            ..Default::default()
        });

        let mut absent_sink = RecordingSink::new();
        let mut broken_sink = RecordingSink::new();
        InitializationProbe::new(&empty).run(&ctx(), &mut absent_sink);
        InitializationProbe::new(&broken).run(&ctx(), &mut broken_sink);

        assert_eq!(absent_sink.single().message, broken_sink.single().message);
        assert_ne!(absent_sink.single().cause, broken_sink.single().cause);
    }

    #[test]
    fn default_name_error_logs_one_error() {
        let registry = registry_with(FakeSdk {
            names: vec![Some("[DEFAULT]")],
            default_error: Some(AccessError::MissingMember {
                member: "DEFAULT_APP_NAME".into(),
            }),
            ..Default::default()
        });
        let mut sink = RecordingSink::new();
        InitializationProbe::new(&registry).run(&ctx(), &mut sink);

        let record = sink.single();
        assert_eq!(record.level, Level::ERROR);
        assert_eq!(
            record.message,
            "MainActivity.onCreate unable to query FirebaseApp"
        );
        let cause = record.cause.as_ref().unwrap();
        assert_eq!(cause.kind, "access");
        assert!(cause.message.contains("No such member: DEFAULT_APP_NAME"));
    }

    #[test]
    fn panic_reading_default_name_logs_one_error() {
        let registry = registry_with(FakeSdk {
            names: vec![Some("[DEFAULT]")],
            panic_in_default: true,
            ..Default::default()
        });
        let mut sink = RecordingSink::new();
        InitializationProbe::new(&registry).run(&ctx(), &mut sink);

        let record = sink.single();
        assert_eq!(record.level, Level::ERROR);
        assert_eq!(
            record.message,
            "MainActivity.onCreate unable to query FirebaseApp"
        );
        let cause = record.cause.as_ref().unwrap();
        assert_eq!(cause.kind, "access");
        assert!(cause.message.contains("DEFAULT_APP_NAME read failed"));
    }

    #[test]
    fn panic_while_dropping_instances_logs_one_error() {
        let registry = registry_with(FakeSdk {
            names: vec![Some("secondary")],
            exploding_drop: true,
            ..Default::default()
        });
        let mut sink = RecordingSink::new();

        let returned = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            InitializationProbe::new(&registry).run(&ctx(), &mut sink);
        }));
        assert!(returned.is_ok());

        let record = sink.single();
        assert_eq!(record.level, Level::ERROR);
        assert_eq!(
            record.message,
            "MainActivity.onCreate unable to query FirebaseApp"
        );
        let cause = record.cause.as_ref().unwrap();
        assert_eq!(cause.kind, "access");
        assert!(cause.message.contains("instance teardown exploded"));
    }

    #[test]
    fn host_context_reaches_accessor() {
        let sdk = FakeSdk::default();
        let seen = Rc::clone(&sdk.seen_package);
        let registry = registry_with(sdk);
        let ctx = HostContext::new("com.example.host");

        let lookup = InitializationProbe::new(&registry);
        assert_eq!(lookup.entry_type(), "com.google.firebase.FirebaseApp");
        assert!(lookup.evaluate(&ctx).is_success());
        assert_eq!(seen.borrow().as_deref(), Some("com.example.host"));
    }

    #[test]
    fn origin_comes_from_context() {
        let registry = registry_with(FakeSdk::default());
        let mut sink = RecordingSink::new();
        let ctx = ctx().with_origin("SplashActivity.onCreate");
        InitializationProbe::new(&registry).run(&ctx, &mut sink);

        assert!(sink
            .single()
            .message
            .starts_with("SplashActivity.onCreate FirebaseApp.getApps.size=0"));
    }

    #[test]
    fn repeated_runs_are_independent() {
        let registry = registry_with(FakeSdk {
            names: vec![Some("[DEFAULT]")],
            ..Default::default()
        });
        let probe = InitializationProbe::new(&registry);
        let mut sink = RecordingSink::new();
        probe.run(&ctx(), &mut sink);
        probe.run(&ctx(), &mut sink);

        assert_eq!(sink.records().len(), 2);
        assert_eq!(sink.records()[0], sink.records()[1]);
    }
}
