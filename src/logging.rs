//! Diagnostic logging setup
//!
//! Library code logs through `tracing` macros. The binary installs a stderr
//! subscriber here once at startup. Diagnostics are silent unless
//! `VENV_DEBUG` is set, in which case everything at `debug` and above from
//! this crate is shown.

use std::sync::Once;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Filter directive for the given configuration
pub fn filter_directive(config: &Config) -> &'static str {
    if config.debug {
        "venv=debug"
    } else {
        "off"
    }
}

/// Install the global subscriber. Subsequent calls are ignored.
pub fn init_logging(config: &Config) {
    let directive = filter_directive(config);

    INIT.call_once(|| {
        let filter = EnvFilter::new(directive);

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .without_time()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init();
    });
}
