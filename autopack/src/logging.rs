//! Logging initialization.
//!
//! Library crates emit `tracing` events; this installs the subscriber that
//! prints them to stderr, filtered by the global verbosity flags.

use eyre::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::commands::Cli;

/// Level selected by the global flags: `-v` for debug output, `-q` for
/// errors only, warnings otherwise.
fn level(cli: &Cli) -> Level {
    if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level(cli))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
