//! LFW CLI - Command line tool for querying the Landmark Firewatch backend.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lfw-cli",
    version,
    about = "Landmark Firewatch data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: lfw_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    lfw_cmd::run(cli.command).await
}
