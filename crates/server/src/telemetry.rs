use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// Filter directives come from `RUST_LOG`; defaults to `info` for the
/// workspace crates and `warn` for everything else. Safe to call once at
/// startup; a second call is a no-op (the global default is already set).
pub fn init_telemetry() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,server=info,app=info,sqlx=warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
