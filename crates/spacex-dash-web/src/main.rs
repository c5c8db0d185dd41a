//! SpaceX Launch Records Dashboard server
//!
//! Run with: cargo run -p spacex-dash-web

use spacex_dash_common::Config;
use spacex_dash_data::{DataSource, DatasetLoader};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialize tracing; RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting SpaceX launch dashboard...");

    // Load the dataset once; failure here means we never serve
    let loader = DatasetLoader::new(config.data.request_timeout_secs)?;
    let dataset = loader.load(&DataSource::parse(&config.data.source)).await?;

    // Create app state and build router
    let state = spacex_dash_web::state::AppState::new(dataset);
    let app = spacex_dash_web::router::build_router(state);

    let addr = config.bind_addr()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
