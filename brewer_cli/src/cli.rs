//! CLI argument definitions and logging bootstrap.
//!
//! The stdin command protocol itself takes no flags; the only option here
//! controls observability.

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "brewer", version, about = "Interactive coffee machine simulator")]
pub struct Cli {
    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

/// Logs go to stderr; stdout carries only protocol replies.
pub fn init_tracing(level: &str) -> eyre::Result<()> {
    let filter = EnvFilter::try_new(level).or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| eyre::eyre!("tracing init: {e}"))?;
    Ok(())
}
