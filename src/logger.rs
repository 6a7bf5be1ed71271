use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Install the global subscriber. Verbosity comes from `RUST_LOG`; output goes
/// to stderr so stdout only carries rendered lists.
pub fn init() {
    // only once, tests may call this repeatedly
    if LOGGER_INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
