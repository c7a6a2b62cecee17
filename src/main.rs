mod cli;

use anyhow::Context;
use clap::Parser;
use scout_tools::Tool;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = scout_config::load(cli.config.as_deref())?;

    match &cli.command {
        Some(Commands::ShowConfig) => {
            println!("{}", serde_yaml::to_string(&config).unwrap_or_default());
            Ok(())
        }
        Some(Commands::Tools) => list_tools(&config).await,
        None => bootstrap_and_report(&config).await,
    }
}

/// Discover the tool server's tools, print their contracts, release the
/// connection.  Degraded discovery prints an empty listing and still exits 0.
async fn list_tools(config: &scout_config::Config) -> anyhow::Result<()> {
    let (tools, connection) = scout_mcp_client::connect_or_degrade(&config.server).await;

    if tools.is_empty() {
        println!("No tools discovered.");
    } else {
        let name_w = tools.iter().map(|t| t.name().len()).max().unwrap_or(10).max(10);
        println!("{:<name_w$}  DESCRIPTION", "NAME");
        println!("{}", "-".repeat(name_w + 40));
        for tool in &tools {
            println!("{:<name_w$}  {}", tool.name(), tool.description());
        }
        println!("\nTotal: {} tool(s)", tools.len());
    }

    connection.close().await.context("releasing tool server connection")
}

/// Default mode: run the full bootstrap, report the assembled agent, then
/// release the connection.  This is the sequence an external runner performs
/// before driving the agent; the binary stops where the model runtime would
/// take over.
async fn bootstrap_and_report(config: &scout_config::Config) -> anyhow::Result<()> {
    let (agent, connection) = scout_bootstrap::initialize(config).await;

    println!("Agent       : {}", agent.name);
    println!("Model       : {} ({})", agent.model, config.model.provider);
    let credentials = if config.model.resolve_api_key().is_some() {
        "configured"
    } else {
        "missing"
    };
    println!("Credentials : {credentials}");

    if agent.tools.is_empty() {
        println!("Tools       : (none — degraded mode)");
    } else {
        println!("Tools       : {}", agent.tool_names().join(", "));
    }
    println!("\n{}", agent.description);

    connection.close().await.context("releasing tool server connection")
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
