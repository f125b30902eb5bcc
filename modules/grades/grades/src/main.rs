use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use grades::config::{CliOverrides, GradesConfig};
use grades::{GradesService, InMemoryGradeRepository, logging, server, shutdown};
use tokio_util::sync::CancellationToken;

/// Grades Server - in-memory student grades over gRPC
#[derive(Parser)]
#[command(name = "grades-server")]
#[command(about = "Grades Server - in-memory student grades over gRPC")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address override, e.g. 127.0.0.1:50052
    #[arg(short, long)]
    listen: Option<String>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) defaults -> 2) YAML -> 3) env (GRADES__*) -> 4) CLI overrides
    let mut config = GradesConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        listen_addr: cli.listen.clone(),
        verbose: cli.verbose,
    });

    logging::init_logging(&config.logging)?;

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_pretty_json()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &GradesConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config.server.socket_addr()?;
    println!("Configuration is valid");
    println!("{}", config.to_pretty_json()?);
    Ok(())
}

async fn run_server(config: GradesConfig) -> Result<()> {
    tracing::info!(listen_addr = %config.server.listen_addr, "Grades Server starting");

    let repo = Arc::new(InMemoryGradeRepository::new());
    let service = Arc::new(GradesService::new(repo));

    let cancel = CancellationToken::new();
    shutdown::cancel_on_signal(cancel.clone());

    server::serve(&config.server, Arc::clone(&service), cancel).await?;

    tracing::info!(grades = service.grade_count(), "Grades Server stopped");
    Ok(())
}
