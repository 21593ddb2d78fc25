use crate::domain::models::WeeklyPlan;
use crate::services::planner;
use crate::web::error::ApiError;
use axum::{
    extract::Path,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanPayload {
    mood: Option<String>,
    // Accepted for wire compatibility; generation does not consume them.
    #[serde(default)]
    goals: Vec<String>,
    #[serde(default)]
    preferences: Vec<String>,
    time_available: Option<String>,
}

#[derive(Debug, Serialize)]
struct PlanResponse {
    success: bool,
    plan: WeeklyPlan,
    timestamp: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/weekly-plan", post(create_plan))
        .route("/weekly-plan/:plan_id", get(retrieve_plan))
}

async fn create_plan(Json(payload): Json<PlanPayload>) -> Result<Json<PlanResponse>, ApiError> {
    let mood = payload.mood.as_deref().map(str::trim).unwrap_or("");
    if mood.is_empty() {
        return Err(ApiError::BadRequest("Mood is required".to_string()));
    }
    tracing::info!(
        mood,
        goals = payload.goals.len(),
        preferences = ?payload.preferences,
        time_available = ?payload.time_available,
        "weekly plan request"
    );

    let plan = planner::generate_weekly_plan(mood, &payload.preferences);

    Ok(Json(PlanResponse {
        success: true,
        plan,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// Not a real lookup: the id only carries a mood hint, and a fresh plan
/// is regenerated from it on every call.
async fn retrieve_plan(Path(plan_id): Path<String>) -> Json<PlanResponse> {
    tracing::info!(%plan_id, "full weekly plan request");
    let mood = mood_from_plan_id(&plan_id);
    let plan = planner::generate_weekly_plan(mood, &[]);

    Json(PlanResponse {
        success: true,
        plan,
        timestamp: Utc::now().to_rfc3339(),
    })
}

pub(crate) fn mood_from_plan_id(plan_id: &str) -> &'static str {
    if plan_id.contains("anxious") {
        "anxious"
    } else if plan_id.contains("sad") {
        "sad"
    } else if plan_id.contains("stressed") {
        "stressed"
    } else {
        "calm"
    }
}
