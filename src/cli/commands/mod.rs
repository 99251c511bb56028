mod echo;

use crate::config::load_config;
use crate::gateway::GatewayClient;
use crate::webhook;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "rcs-chatbot")]
#[command(about = "RCS MaaP chatbot toolkit", version = crate::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the echo bot: webhook receiver + gateway client
    Serve {
        /// Path to the JSON config file (default: ./rcs-chatbot.json)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override webhook.port from the config
        #[arg(long)]
        port: Option<u16>,
    },
    /// Load and validate the configuration, then print it with secrets redacted
    CheckConfig {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, port } => {
            serve(config, port).await?;
        }
        Commands::CheckConfig { config } => {
            check_config(config)?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>, port: Option<u16>) -> Result<()> {
    let mut config = load_config(config_path.as_deref())?;
    if let Some(port) = port {
        config.webhook.port = port;
    }

    let client = Arc::new(GatewayClient::from_config(&config.gateway));
    let dispatcher = Arc::new(echo::build_dispatcher(client));
    info!(
        "echo bot ready with {} event handler(s)",
        dispatcher.handler_count()
    );

    let (server_task, addr) = webhook::start(&config.webhook, dispatcher)
        .await
        .with_context(|| {
            format!(
                "Failed to bind webhook listener on {}:{}",
                config.webhook.host, config.webhook.port
            )
        })?;
    println!("{} rcs-chatbot v{} listening on {}", crate::LOGO, crate::VERSION, addr);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            println!("\nShutting down...");
        }
        _ = server_task => {}
    }

    Ok(())
}

fn check_config(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    println!("{:#?}", config);
    println!("Configuration OK");
    Ok(())
}
