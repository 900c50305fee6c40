//! Weather API service entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::net::TcpListener;

use weather_api::config::load_config;
use weather_api::lifecycle::{signals, Shutdown};
use weather_api::observability::init_logging;
use weather_api::HttpServer;

#[derive(Parser)]
#[command(name = "weather-api")]
#[command(about = "Synthetic weather query service", long_about = None)]
struct Args {
    /// Optional TOML configuration file. `PORT` overrides its listener port.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref())?;

    init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address(),
        max_location_bytes = config.weather.max_location_bytes,
        "weather-api starting"
    );

    let listener = match TcpListener::bind((config.listener.host.as_str(), config.listener.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(
                bind_address = %config.listener.bind_address(),
                error = %e,
                "Failed to bind listener"
            );
            return Err(e.into());
        }
    };

    let server = HttpServer::new(config)?;
    let shutdown = Shutdown::new();
    let mut server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        _ = signals::wait_for_signal() => {
            shutdown.trigger();
            server_task.await??;
        }
        result = &mut server_task => result??,
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
