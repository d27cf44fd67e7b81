use axum::{extract::State, Json};
use serde_json::Value;

use crate::database::{activities_repo, ActivityStore};

pub async fn health_handler(State(store): State<ActivityStore>) -> Json<Value> {
    let activities = activities_repo::count_activities(&store).await;
    Json(serde_json::json!({ "status": "ok", "activities": activities }))
}
