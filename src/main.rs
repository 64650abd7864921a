//! event-catalog server entry point.
//!
//! Loads the seed file, builds the repository, and starts the Axum HTTP
//! server with the REST endpoints.

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use event_catalog::api;
use event_catalog::app_state::AppState;
use event_catalog::config::{CatalogConfig, LogFormat};
use event_catalog::domain::EventRepository;
use event_catalog::persistence::load_seed_events;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = CatalogConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting event-catalog");

    // Build domain layer
    let seed = load_seed_events(&config.seed_data_path);
    let repository = EventRepository::with_events(seed);

    // Build application state
    let app_state = AppState::new(repository);

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
