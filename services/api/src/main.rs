use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use api::routes;
use api::state::AppState;
use common::config::{ServerConfig, TmdbConfig};
use tmdb::TmdbClient;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting API service");

    // A missing provider credential aborts startup; it is a hard
    // configuration error, never retried.
    let tmdb_config = TmdbConfig::from_env()?;
    let server_config = ServerConfig::from_env()?;

    info!(
        "Provider at {} with {} relay paths",
        tmdb_config.base_url,
        tmdb_config.relay_prefixes.len()
    );

    let app_state = AppState::new(TmdbClient::new(tmdb_config));

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = TcpListener::bind(&server_config.bind_addr).await?;
    info!("API service listening on {}", server_config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
