use color_eyre::eyre::{Result, eyre};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use slotio_client::{ClientConfig, HttpApiClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Initialize logging; quiet by default so it stays out of the prompts
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    // Load configuration and build the API client
    let config = ClientConfig::from_env()?;
    let api = HttpApiClient::new(&config)?;

    let command = std::env::args().nth(1).unwrap_or_else(|| "book".to_string());
    match command.as_str() {
        "book" => slotio_cli::run_book(&api).await?,
        "status" => slotio_cli::run_status(&api).await?,
        other => return Err(eyre!("unknown command `{other}` (expected `book` or `status`)")),
    }

    Ok(())
}
