use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::EnvLookup;

use super::commands;

/// Entry point for the `dockerc` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "dockerc",
    about = "Container engine client",
    version,
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Location of client config files (overrides DOCKER_CONFIG)
    #[arg(long = "config", global = true, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Engine address, e.g. tcp://127.0.0.1:2375 (overrides DOCKER_HOST)
    #[arg(short = 'H', long = "host", global = true, value_name = "ADDR")]
    pub host: Option<String>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List containers.
    Ps(PsArgs),
    /// Show client and engine versions.
    Version,
    /// Check that the engine is reachable.
    Ping,
    /// Show the resolved config directory and custom headers.
    Config,
}

#[derive(Debug, Args)]
pub struct PsArgs {
    /// Show all containers (default shows just running).
    #[arg(short = 'a', long = "all")]
    pub all: bool,
}

impl Cli {
    pub async fn run(self, env: &dyn EnvLookup) -> Result<()> {
        commands::run(self, env).await
    }
}
