use tracing_subscriber::{fmt, EnvFilter};

/// Route library diagnostics to stderr. `RUST_LOG` overrides the default
/// `warn` level.
pub fn init() {
    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
