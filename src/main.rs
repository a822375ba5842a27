use clap::Parser;

use clipkeep_lib::bootstrap::run_app;
use clipkeep_lib::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_app(Cli::parse()).await
}
