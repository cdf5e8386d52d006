//! quarry - CLI tool for exploring a paged object-query service.
//!
//! This is a thin wrapper over `quarry-core` and `quarry-http`. Each
//! command logs in, performs one operation and exits.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{call, describe, describe_global, login, query};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so record output on stdout stays clean.
    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::Login(args) => login::run(&cli.connection, args).await,
        Commands::Query(args) => query::run(&cli.connection, args).await,
        Commands::DescribeGlobal(args) => describe_global::run(&cli.connection, args).await,
        Commands::Describe(args) => describe::run(&cli.connection, args).await,
        Commands::Call(args) => call::run(&cli.connection, args).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
