use anyhow::Result;
use clap::Parser;

use dockerc::cli::Cli;
use dockerc::config::ProcessEnv;
use dockerc::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    cli.run(&ProcessEnv).await
}
