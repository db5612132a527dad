//! Intercom whoami binary.
//!
//! Reads the strategy options from `INTERCOM_*` variables, fetches the
//! profile that owns `INTERCOM_ACCESS_TOKEN` and prints it as JSON.

use intercom_auth_application::ProfileFetcher;
use intercom_auth_infrastructure::{IntercomOptions, IntercomStrategy};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = IntercomOptions::from_env()?;
    let strategy = IntercomStrategy::new(&options)?;

    let access_token = std::env::var("INTERCOM_ACCESS_TOKEN")
        .map_err(|_| "INTERCOM_ACCESS_TOKEN must be set")?;

    tracing::info!(
        strategy = strategy.name(),
        "Fetching profile with intercom-whoami v{}",
        env!("CARGO_PKG_VERSION")
    );

    let profile = strategy.fetch_profile(&access_token).await?;
    println!("{}", serde_json::to_string_pretty(&profile)?);

    Ok(())
}
