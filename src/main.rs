//! SIAMA Toolbox server
//!
//! Loads configuration from the environment, initialises logging and
//! serves the JSON API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use siama_toolbox::adapters::{
    api_router, AppState, InMemorySessionRepository, JsonExporter, XlsxExporter,
};
use siama_toolbox::application::ExportSettings;
use siama_toolbox::config::{AppConfig, ExportConfig, ServerConfig};
use siama_toolbox::ports::StoreExporter;

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(server.log_level.as_str()));

    if server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn export_settings(export: &ExportConfig) -> ExportSettings {
    ExportSettings {
        filename_prefix: export.filename_prefix.clone(),
        spreadsheet_enabled: export.spreadsheet_enabled,
    }
}

/// Periodically drops sessions that have gone idle.
fn spawn_session_sweeper(repository: Arc<InMemorySessionRepository>, every: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let purged = repository.purge_idle().await;
            if purged > 0 {
                tracing::info!(purged, "Idle sessions discarded");
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let repository = Arc::new(
        InMemorySessionRepository::new().with_idle_timeout(config.server.session_idle_timeout()),
    );
    spawn_session_sweeper(repository.clone(), config.server.session_sweep_interval());

    let exporters: Vec<Arc<dyn StoreExporter>> =
        vec![Arc::new(JsonExporter::new()), Arc::new(XlsxExporter::new())];
    let state = AppState::new(repository, exporters, export_settings(&config.export));

    let app = api_router(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        spreadsheet_export = config.export.spreadsheet_enabled,
        session_idle_secs = config.server.session_idle_secs,
        "SIAMA Toolbox listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
