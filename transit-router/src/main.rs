use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_router::config::ServerConfig;
use transit_router::network::Network;
use transit_router::requests::{self, Document, RequestError};
use transit_router::web::{AppState, create_router};

#[derive(Parser, Debug)]
#[command(
    name = "transit-router",
    version,
    about = "Bus network statistics and fastest-route planning",
    long_about = "Reads a JSON document of base requests, routing settings and stat \
                  requests, and prints the answers as a JSON array.\n\n\
                  With the `serve` subcommand, answers the same queries over HTTP.",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Request document to process; stdin when absent or `-`
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Network document to load at startup
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Some(Command::Serve { file }) => serve(file.as_deref()).await,
        None => process(cli.file.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// `-` names stdin.
fn input_file(file: Option<&Path>) -> Option<&Path> {
    file.filter(|path| *path != Path::new("-"))
}

fn process(file: Option<&Path>) -> Result<(), RequestError> {
    let mut stdout = std::io::stdout().lock();
    process_to(file, &mut stdout)
}

/// Answer the document at `file` (or stdin) and write the responses to `out`.
fn process_to(file: Option<&Path>, out: &mut impl Write) -> Result<(), RequestError> {
    let document = match input_file(file) {
        Some(path) => Document::from_path(path)?,
        None => Document::from_reader(std::io::stdin().lock())?,
    };

    let responses = requests::process(&document)?;

    serde_json::to_writer_pretty(&mut *out, &responses)?;
    writeln!(out)?;
    Ok(())
}

async fn serve(file: Option<&Path>) -> Result<(), RequestError> {
    let config = ServerConfig::from_env();

    let network = match file {
        Some(path) => {
            let network = Network::from_path(path)?;
            info!(
                path = %path.display(),
                stops = network.catalogue().stop_count(),
                buses = network.catalogue().bus_count(),
                "loaded network"
            );
            network
        }
        None => Network::empty(),
    };

    let state = AppState::new(network, config.cache);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "transit router listening");
    info!("  GET  /health            - Health check");
    info!("  GET  /buses/:name       - Bus statistics");
    info!("  GET  /stops/:name       - Stop statistics");
    info!("  GET  /route?from=&to=   - Fastest route");
    info!("  POST /network           - Replace the network");
    info!("  POST /stats             - Answer stat requests");

    axum::serve(listener, app).await?;
    Ok(())
}
