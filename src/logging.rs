//! Installs a global tracing subscriber writing to stderr.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Filter comes from `RUST_LOG`, defaulting to `info`. Subsequent calls are
/// no-ops.
pub fn init() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = INSTALLED.set(());

    Ok(())
}
