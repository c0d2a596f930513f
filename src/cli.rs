//! CLI argument definitions for riskbook.

use clap::Parser;

/// Riskbook - track risk records over a JSON API.
#[derive(Parser, Debug)]
#[command(name = "riskbook")]
#[command(author, version, about = "An HTTP service for tracking risk records", long_about = None)]
pub struct Cli {
    /// Address to bind the API server to.
    /// Can also be set via the RISKBOOK_HOST environment variable.
    #[arg(long, default_value = "0.0.0.0", env = "RISKBOOK_HOST")]
    pub host: String,

    /// Port to listen on.
    /// Can also be set via the RISKBOOK_PORT environment variable.
    #[arg(short, long, default_value_t = 8080, env = "RISKBOOK_PORT")]
    pub port: u16,
}
