//! Diagnostic logging setup
//!
//! User-facing progress goes to stdout through the styling helpers; these
//! diagnostic events go to stderr so they never mix with report output.

use tracing_subscriber::EnvFilter;

/// Map `-v` occurrences to a default filter directive.
pub fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "featscale=warn",
        1 => "featscale=info",
        2 => "featscale=debug",
        _ => "featscale=trace",
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the verbosity flag when set. Calling this twice is
/// harmless; the second install is ignored.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
