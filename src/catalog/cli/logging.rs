//! Diagnostics go to stderr so they never interleave with rendered views on stdout.
//!
//!   catalog -v ...                  # debug events from this crate
//!   RUST_LOG=catalog=trace catalog  # fine-grained control, wins over -v

use tracing_subscriber::EnvFilter;

pub fn init_tracing(verbose: bool) {
    let default = if verbose { "catalog=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .try_init();
}
