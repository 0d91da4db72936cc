//! Coursecast CLI - Command-line interface
//!
//! Runs one-off video searches and the development server.

mod commands;

use clap::Parser;
use coursecast_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "coursecast")]
#[command(about = "Find videos and add them to a course")]
struct Cli {
    /// Console log level (RUST_LOG takes precedence)
    #[arg(long, global = true, value_enum, default_value_t = CliLogLevel::Info)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_path = init_tracing(cli.log_level.as_tracing_level(), None)?;
    tracing::debug!("Full trace written to {}", log_path.display());

    commands::handle_command(cli.command).await
}
