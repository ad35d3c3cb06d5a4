//! Opt-in tracing setup.
//!
//! The library only ever emits `tracing` events; installing a subscriber is
//! left to the embedding application, or to [`init_default_tracing`] for
//! quick starts and examples.

/// Installs a compact stderr subscriber honoring `RUST_LOG`, falling back to
/// `barline=info`.
///
/// Returns `false` when the `telemetry` feature is disabled or another global
/// subscriber is already installed; the call never panics.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(concat!(env!("CARGO_PKG_NAME"), "=info")));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
