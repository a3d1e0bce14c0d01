use tracing_subscriber::{EnvFilter, fmt};

/// Install a fmt subscriber filtered by `RUST_LOG`, defaults to `info`
///
/// Safe to call more than once, later calls are ignored
pub fn init() {
    // forward `log` records from dependencies into tracing
    let _ = tracing_log::LogTracer::init();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(filter).finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
