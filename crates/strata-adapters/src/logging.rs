//! Tracing subscriber initialisation.
//!
//! `strata-core` only *emits* spans and events; whichever program embeds
//! Strata calls [`init_logging`] once at startup.
//!
//! # Verbosity mapping
//!
//! | verbosity | Filter level |
//! |-----------|--------------|
//! | 0         | WARN         |
//! | 1         | INFO         |
//! | 2         | DEBUG        |
//! | 3+        | TRACE        |
//! | quiet     | ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise the global tracing subscriber.
///
/// Returns an error if a subscriber was already set in this process.
pub fn init_logging(verbosity: u8, quiet: bool) -> anyhow::Result<()> {
    let level = derive_level(verbosity, quiet);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("strata_core={level},strata_adapters={level}"))
    });

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
