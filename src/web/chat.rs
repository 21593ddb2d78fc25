use crate::domain::models::ChatTurn;
use crate::services::responder;
use crate::state::SharedState;
use crate::web::error::ApiError;
use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatPayload {
    message: Option<String>,
    #[serde(default)]
    history: Vec<ChatTurn>,
    user_name: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    reply: String,
    timestamp: String,
}

pub fn router(state: SharedState) -> Router {
    Router::new().route("/chat", post(chat)).with_state(state)
}

async fn chat(
    State(state): State<SharedState>,
    Json(payload): Json<ChatPayload>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = payload.message.as_deref().map(str::trim).unwrap_or("");
    tracing::info!(history_len = payload.history.len(), "chat request");

    if message.is_empty() {
        return Err(ApiError::BadRequest("Message is required".to_string()));
    }

    let reply = responder::select_response(
        message,
        &payload.history,
        payload.user_name.as_deref(),
        state.prompts.as_ref(),
    );
    tracing::debug!(%reply, "generated response");

    Ok(Json(ChatResponse {
        reply,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
