//! Handler for the user detail aggregate.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

use crate::domain::entities::UserDetail;
use crate::error::AppError;
use crate::state::AppState;

/// Serves the aggregated user detail view.
///
/// # Endpoint
///
/// `GET /user/{id}`
///
/// # Request Flow
///
/// 1. Parse and validate the path identifier (positive decimal integer)
/// 2. Hand off to the aggregation service, which resolves profile, family,
///    and transportation concurrently with cache-aside semantics
/// 3. Return the merged aggregate, or the full error list
///
/// # Responses
///
/// - **200 OK**: `{"Profile": {...}, "Family": [...], "Transportation": [...]}`
/// - **400 Bad Request**: identifier is not a positive integer; resolution
///   never starts
/// - **500 Internal Server Error**: one or more resolutions failed; the body
///   is a JSON array with one structured error per failed resolution
pub async fn user_detail_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UserDetail>, Response> {
    let user_id = parse_user_id(&id).map_err(|e| e.into_response())?;

    state
        .user_detail_service
        .get_user_detail(user_id)
        .await
        .map(Json)
        .map_err(|e| {
            warn!(user_id, failed = e.errors().len(), "user detail aggregation failed");
            e.into_response()
        })
}

/// Validates the raw path segment as a positive user identifier.
fn parse_user_id(raw: &str) -> Result<i64, AppError> {
    let id: i64 = raw.parse().map_err(|_| {
        AppError::bad_request("User id must be a decimal integer", json!({ "id": raw }))
    })?;

    if id <= 0 {
        return Err(AppError::bad_request(
            "User id must be positive",
            json!({ "id": id }),
        ));
    }

    Ok(id)
}
