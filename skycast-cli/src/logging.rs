//! Tracing subscriber initialisation.
//!
//! Only the binary installs a subscriber; `skycast-core` only emits events.
//! `RUST_LOG` overrides the `-v` mapping when set.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: u8) -> anyhow::Result<()> {
    let level = derive_level(verbose);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("skycast_core={level},skycast_cli={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

fn derive_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
