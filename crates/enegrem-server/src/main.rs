//! ENEGREM server
//!
//! Main entry point: serves the comparison page and API, or runs a single
//! comparison from the command line.

mod report;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use enegrem_api::{AppState, ShareState};
use enegrem_config::AppConfig;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Exit status on success, including a complete comparison
const EXIT_SUCCESS: u8 = 0;
/// Exit status of `compare` when the candidate is incomplete
const EXIT_INCOMPLETE: u8 = 1;
/// Exit status for any error, kept apart from an incomplete result
const EXIT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "enegrem", version, about = "Check that a text uses exactly the letters of another")]
struct Cli {
    /// Directory containing enegrem.yaml
    #[arg(long, short, global = true, default_value = ".")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the page and the HTTP API (default)
    Serve(ServeArgs),
    /// Compare a candidate against a source text
    Compare {
        source: String,
        candidate: String,
        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the link that restores a source/candidate pair
    Share {
        source: String,
        candidate: String,
        /// Base URL (defaults to the configured public URL)
        #[arg(long)]
        base: Option<String>,
    },
}

#[derive(Args, Default)]
struct ServeArgs {
    /// Override server.host
    #[arg(long)]
    host: Option<String>,
    /// Override server.port
    #[arg(long, short)]
    port: Option<u16>,
}

fn load_config(config_dir: &Path) -> Result<AppConfig> {
    AppConfig::load(config_dir)
        .with_context(|| format!("failed to load configuration from {}", config_dir.display()))
}

fn init_tracing(level: &str) -> Result<()> {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

async fn serve(mut config: AppConfig, args: ServeArgs) -> Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    let addr = config.server.bind_addr();
    info!("Starting ENEGREM on {}", addr);
    info!("Share links point to {}", config.server.base_url());

    let state = AppState::new(config).context("failed to compile page template")?;

    tokio::select! {
        result = enegrem_api::start_server(state, &addr) => {
            result.with_context(|| format!("server on {} failed", addr))?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down...");
        }
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<u8> {
    let config = load_config(&cli.config)?;
    init_tracing(&config.logging.level)?;

    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => {
            serve(config, args).await?;
            Ok(EXIT_SUCCESS)
        }
        Command::Compare {
            source,
            candidate,
            json,
        } => {
            let comparison = enegrem_core::compare(&source, &candidate);
            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                print!("{}", report::render(&config.frontend.title, &comparison));
            }
            Ok(if comparison.is_complete {
                EXIT_SUCCESS
            } else {
                EXIT_INCOMPLETE
            })
        }
        Command::Share {
            source,
            candidate,
            base,
        } => {
            let base = base.unwrap_or_else(|| config.server.base_url());
            println!("{}", ShareState::new(source, candidate).share_url(&base));
            Ok(EXIT_SUCCESS)
        }
    }
}

fn exit_status(result: Result<u8>) -> u8 {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {:#}", e);
        EXIT_ERROR
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    ExitCode::from(exit_status(run(cli).await))
}
