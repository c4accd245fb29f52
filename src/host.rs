//! Host startup hook integration.
//!
//! The probe runs once, synchronously, at the top of the host's startup
//! hook and before the host's own base initialization. Its outcome has no
//! say in whether base initialization runs.

use crate::context::HostContext;
use crate::diagnostics::DiagnosticSink;
use crate::probe::InitializationProbe;

/// Run the probe, then the host's base initialization.
///
/// Returns whatever `base_init` returns.
pub fn run_startup<T>(
    ctx: &HostContext,
    probe: &InitializationProbe<'_>,
    sink: &mut dyn DiagnosticSink,
    base_init: impl FnOnce(&HostContext) -> T,
) -> T {
    probe.run(ctx, sink);
    base_init(ctx)
}
