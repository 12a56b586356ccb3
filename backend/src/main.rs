//! La Esquina Marketplace - backend server binary

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use esquina_backend::storage::{FileBackend, JsonStore};
use esquina_backend::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "esquina_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting La Esquina Marketplace Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Data directory: {}", config.storage.data_dir);

    // Create the record store over the data directory
    let backend = FileBackend::new(&config.storage.data_dir);
    let store = Arc::new(JsonStore::new(Arc::new(backend)));

    // Create application state
    let state = AppState { store };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
