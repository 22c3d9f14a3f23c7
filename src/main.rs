use clap::Parser;
use owo_colors::OwoColorize;

mod error;
mod headers;
mod mock;
mod models;
mod probe;
mod render;

use error::GaugeError;
use probe::ProbeClient;

#[derive(Parser)]
#[command(name = "fuelgauge")]
#[command(about = "Show remaining Anthropic API rate-limit capacity as a terminal gauge")]
#[command(version)]
struct Cli {
    /// Model used for the minimal probe request
    #[arg(long, default_value = probe::DEFAULT_MODEL)]
    model: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = probe::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Render the gauge from fabricated data instead of probing the API
    #[arg(long)]
    mock: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli).await {
        println!("{}", format!("Error: {}", err).red());
        if matches!(err, GaugeError::MissingApiKey) {
            println!("Export your key:  export ANTHROPIC_API_KEY=sk-ant-...");
        }
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), GaugeError> {
    let snapshot = if cli.mock {
        mock::mock_snapshot()
    } else {
        let api_key = probe::api_key_from_env()?;
        let client = ProbeClient::new(cli.timeout)?;
        let response_headers = client.probe(&api_key, &cli.model).await?;
        headers::parse_rate_limits(&response_headers)?
    };

    print!("{}", render::report(&snapshot, chrono::Utc::now()));
    Ok(())
}
