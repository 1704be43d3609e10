//
//  graph-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use graph_client::cli::{Cli, Commands};
use graph_client::exit_codes;
use graph_client::output::{OutputFormat, OutputWriter};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            OutputWriter::new(OutputFormat::default()).write_error(&format!("{e:#}"));
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

/// Logs go to stderr; `GRAPH_DEBUG` takes an env-filter directive.
fn init_logging() {
    let filter = EnvFilter::try_from_env("GRAPH_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Call(cmd) => cmd.run(&cli.global).await,
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Endpoints(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("{} version {}", graph_client::APP_NAME, graph_client::VERSION);
            Ok(())
        }
    }
}
