//! FoodStory API server.
//!
//! # Configuration
//!
//! Environment variables:
//! - `FOODSTORY_PORT`: port to listen on (default: 3000)
//! - `FOODSTORY_DATA_FILE`: path of the menu document
//!   (default: `<user data dir>/foodstory/menus.json`)
//! - `FOODSTORY_CONFIG`: path to a YAML config file
//!   (default: `<user config dir>/foodstory/config.yaml`)
//!
//! # Config file format
//!
//! ```yaml
//! port: 3000
//! data_file: /var/lib/foodstory/menus.json
//! ```

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use foodstory::{server, AppState, Config, MenuStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "foodstory=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::load(None) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // A missing data directory is not fatal: the store falls back to its
    // in-memory copy on read-only deployments.
    if let Some(parent) = config.data_file.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!("Failed to create data directory {}: {}", parent.display(), e);
        }
    }

    tracing::info!("Menu data file: {}", config.data_file.display());

    let state = AppState::new(MenuStore::new(&config.data_file));
    let app = server::router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
