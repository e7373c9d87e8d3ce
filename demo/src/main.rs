//! Patternworks demonstration binary
//!
//! Runs the Prototype, Adapter and Observer demonstrations and exits.
//! Takes no arguments. Diagnostic logging goes to stderr and is controlled
//! with `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use patternworks_demo::run_demo;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let lines = run_demo().context("demonstration aborted")?;
    info!(lines = lines.len(), "demonstration complete");
    Ok(())
}
