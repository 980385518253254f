use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured JSON tracing on stdout. Call once at service startup.
///
/// `RUST_LOG` takes precedence; `default_directives` applies when it is unset
/// or unparsable. Later calls are ignored.
pub fn init_tracing(default_directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init();
}
