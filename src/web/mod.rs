pub mod chat;
pub mod error;
pub mod plan;

use crate::state::SharedState;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

async fn ping() -> Json<Value> {
    Json(json!({ "message": "Server running correctly 🚀" }))
}

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .merge(chat::router(state))
        .merge(plan::router())
}
