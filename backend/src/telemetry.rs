//! Tracing/logging initialization
//!
//! The backend is a library, so it never installs a subscriber on its
//! own; embedding applications (and the integration tests) call
//! [`init`] once at startup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with an environment-driven filter
///
/// Honors `RUST_LOG`; defaults to info-level output for this crate with
/// sqlx noise turned down. Safe to call more than once: subsequent calls
/// are no-ops.
pub fn init() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "food_finder_backend=info,sqlx=warn".into());

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
