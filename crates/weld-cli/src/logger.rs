//! Tracing setup for the weld CLI.
//!
//! Logs go to stderr so stdout stays clean for bundle output. `--verbose`
//! turns on debug events for the weld crates, `--quiet` drops everything
//! but errors, and `RUST_LOG` overrides the default otherwise.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_logger(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("weld_graph=debug,weld_bundler=debug,weld_cli=debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
