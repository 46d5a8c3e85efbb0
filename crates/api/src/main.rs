use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lumina_api::config::ServerConfig;
use lumina_api::router::build_app_router;
use lumina_api::state::AppState;
use lumina_genai::{GeminiClient, GeminiConfig};
use lumina_store::{DraftStore, JsonFileStore, SnapshotStore};
use lumina_studio::Studio;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumina=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let gemini_config = GeminiConfig::from_env();
    if gemini_config.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; generative calls will fail with AUTH_INVALID");
    }

    // --- Draft snapshot (hydrated once at startup) ---
    let snapshot = Arc::new(JsonFileStore::new(&config.data_file));
    let drafts = snapshot.load().await?;
    tracing::info!(drafts = drafts.len(), file = %config.data_file, "Draft library hydrated");
    let store = DraftStore::from_snapshot(drafts);

    // --- Studio ---
    let service = Arc::new(GeminiClient::new(gemini_config)?);
    let studio = Studio::new(service, snapshot, store);

    let state = AppState {
        studio: Arc::new(studio),
        config: Arc::new(config.clone()),
    };

    // --- Router & serve ---
    let app = build_app_router(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(%addr, "Lumina studio listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
