//! Pokedex CLI - An interactive client for the PokeAPI
//!
//! Browses location areas, explores them, and catches Pokemon, caching every
//! API response for a short TTL.

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::{Cache, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so logs stay out of the REPL)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Run the REPL on stdin/stdout until `exit` or end of input
/// 5. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_ttl={}ms, request_timeout={}s",
        config.base_url, config.cache_ttl_ms, config.request_timeout_secs
    );

    let cache = Cache::new(config.cache_ttl());
    let client =
        PokeApiClient::new(&config, cache.clone()).context("Failed to build HTTP client")?;
    let mut session = Session::new(client, config.catch_difficulty);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let result = session.run(stdin, &mut stdout).await;

    cache.close().await;
    info!("Pokedex closed");

    result.context("Terminal I/O failed")
}
