//! Fluency command-line front end
//!
//! Wraps the learning path engine and the seeded catalogs in a `fluency`
//! binary:
//!
//! ```text
//! fluency analyze --progress progress.json --student student-1
//! fluency categories --operation addition
//! fluency games --grouping derived --json
//! fluency seed
//! ```

pub mod commands;
pub mod config;
pub mod render;

pub use commands::{cli, run};
pub use config::{FluencyConfig, OutputFormat};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level; `verbose` forces `debug`.
/// Logs go to stderr so command output on stdout stays machine-readable.
/// Calling this twice is harmless.
pub fn init_tracing(config: &FluencyConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
