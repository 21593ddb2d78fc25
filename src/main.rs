mod domain;
mod services;
mod state;
mod web;

use crate::services::prompts::{FsPromptStore, NullPromptStore, PromptStore};
use crate::state::{AppState, SharedState};
use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // PROMPTS_DIR="" disables template lookups entirely
    let prompts: Arc<dyn PromptStore> =
        match std::env::var("PROMPTS_DIR").unwrap_or_else(|_| "prompts".to_string()) {
            dir if dir.is_empty() => {
                tracing::info!("Prompt templates disabled");
                Arc::new(NullPromptStore)
            }
            dir => {
                tracing::info!("Prompt templates read from {dir} (optional)");
                Arc::new(FsPromptStore::new(dir))
            }
        };

    let shared: SharedState = Arc::new(AppState { prompts });

    // Browser SPA calls from another origin during development
    let app = Router::new()
        .nest("/api", web::routes(shared))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| {
        let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
        format!("0.0.0.0:{}", port)
    });
    tracing::info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
