use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "weather-cli")]
#[command(about = "Query a running weather-api service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the reading for a location
    Weather { location: String },
    /// Check service liveness
    Health,
    /// Dump the Prometheus exposition
    Metrics,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Weather { location } => {
            let mut url = reqwest::Url::parse(base)?;
            url.path_segments_mut()
                .map_err(|_| "service URL cannot be a base")?
                .pop_if_empty()
                .extend(["weather", location.as_str()]);
            let res = client.get(url).send().await?;
            print_json(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{base}/health")).send().await?;
            print_json(res).await?;
        }
        Commands::Metrics => {
            let res = client.get(format!("{base}/metrics")).send().await?;
            let res = check_status(res).await?;
            print!("{}", res.text().await?);
        }
    }

    Ok(())
}

async fn check_status(res: reqwest::Response) -> Result<reqwest::Response, Box<dyn std::error::Error>> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let text = res.text().await.unwrap_or_default();
    Err(format!("service returned status {status}: {text}").into())
}

async fn print_json(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let json: Value = check_status(res).await?.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
