//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! The engine itself only emits `tracing` events; hosts that have no
//! subscriber of their own call [`init_tracing`] once at startup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber with an env-filter.
/// `default_directive` applies when RUST_LOG is unset (e.g. "parley=info").
pub fn init_tracing(default_directive: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive.to_string())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
