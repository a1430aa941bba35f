//! Structured logging to stderr.
//!
//! `DOCKERC_LOG` takes a full `tracing` filter (e.g. `dockerc=trace,reqwest=debug`).
//! Without it, only warnings are shown unless `--verbose` is given.

use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;

pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "warn,dockerc=debug" } else { "warn" }
}
