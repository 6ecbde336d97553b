//! Bedrock Chat - HTTP chat service for Amazon Bedrock models

#![allow(missing_docs)]

use anyhow::Context;
use bedrock_chat::config::{Config, DEFAULT_CONFIG_PATH};
use bedrock_chat::server;
use bedrock_chat::utils::logging::init_logging;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "bedrock-chat", version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "CONFIG_PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::load(&args.config)
        .await
        .with_context(|| format!("failed to load configuration from {:?}", args.config))?;

    if let Some(port) = args.port {
        config.gateway.server.port = port;
    }

    init_logging(config.logging());

    server::builder::run_server(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display with causes, not Debug
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
