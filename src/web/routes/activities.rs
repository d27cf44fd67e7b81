use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::database::ActivityStore;
use crate::error::DirectoryError;
use crate::models::ActivityDirectory;
use crate::services::activities_service;

type ApiError = (StatusCode, Json<Value>);

fn unprocessable(detail: impl Into<String>) -> ApiError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(serde_json::json!({ "detail": detail.into() })),
    )
}

fn activity_name(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    path.map(|Path(name)| name).map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "rejected activity path");
        unprocessable(rejection.body_text())
    })
}

/// The last `email` wins when the parameter is repeated.
fn require_email(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<String, ApiError> {
    let Query(params) = query.map_err(|rejection| unprocessable(rejection.body_text()))?;
    params
        .into_iter()
        .filter(|(key, _)| key == "email")
        .map(|(_, value)| value)
        .last()
        .ok_or_else(|| unprocessable("Missing required query parameter: email"))
}

fn directory_error_response(e: DirectoryError) -> ApiError {
    tracing::warn!(
        activity = %e.activity(),
        email = e.email().unwrap_or_default(),
        reason = %e,
        "command rejected"
    );
    let status = if e.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(serde_json::json!({ "detail": e.to_string() })))
}

pub async fn list_activities_handler(
    State(store): State<ActivityStore>,
) -> Json<ActivityDirectory> {
    Json(activities_service::list_activities(&store).await)
}

pub async fn signup_handler(
    State(store): State<ActivityStore>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let activity_name = activity_name(path)?;
    let email = require_email(query)?;
    activities_service::sign_up(&store, &activity_name, &email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(directory_error_response)
}

pub async fn unregister_handler(
    State(store): State<ActivityStore>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let activity_name = activity_name(path)?;
    let email = require_email(query)?;
    activities_service::unregister(&store, &activity_name, &email)
        .await
        .map(|message| Json(serde_json::json!({ "message": message })))
        .map_err(directory_error_response)
}
