use clap::{Parser, Subcommand};
use container_inventory::runtime::DEFAULT_DOCKER_HOST;

#[derive(Parser)]
#[command(name = "ctinv")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIME"), ")"))]
#[command(about = "Point-in-time container inventory collector", long_about = None)]
pub struct Cli {
    /// Runtime API endpoint (unix:///path, /path, tcp://host:port)
    #[arg(long, global = true, env = "DOCKER_HOST", default_value = DEFAULT_DOCKER_HOST)]
    pub host: String,

    /// Per-request timeout in seconds, 0 waits forever
    #[arg(long, global = true, env = "CTINV_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log format on stderr (text or json)
    #[arg(long, global = true, env = "CTINV_LOG_FORMAT", default_value = "text", value_parser = ["text", "json"])]
    pub log_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Snapshot every container on the host, stopped ones included
    Collect {
        /// Output format (text or json)
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        output: String,

        /// Include environment variables in text output
        #[arg(short, long, default_value = "false")]
        verbose: bool,
    },

    /// Inspect a single container
    #[command(arg_required_else_help = true)]
    Inspect {
        /// Container ID or name
        id: String,

        /// Output format (text or json)
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        output: String,
    },
}
