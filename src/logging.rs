//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `WEIGHTGEN_LOG=weightgen=debug`.
pub const LOG_ENV: &str = "WEIGHTGEN_LOG";

static INIT: Once = Once::new();

/// Install a stderr subscriber filtered by [`LOG_ENV`], falling back to
/// `weightgen=warn`. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("weightgen=warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
