//! Tracing/logging initialization
//!
//! Log output goes to stderr so it never interleaves with the menu on stdout.
//! `RUST_LOG` overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for the process
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "registrar=debug"
    } else {
        "registrar=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
