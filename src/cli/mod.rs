//! Command-line support for the `geonames-conf` binary

pub mod commands;

pub use commands::OutputFormat;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise `debug` with `verbose`, `warn` without.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
