//! JSON HTTP surface for the tracker.
//!
//! `POST /api/track` tracks a batch, `GET /api/track?number=` a single
//! number. Per-number failures are reported inside the results with a 200;
//! only malformed requests get a 4xx.

use crate::core::registry::CARRIERS;
use crate::core::tracker::Tracker;
use crate::domain::model::TrackingResult;
use crate::utils::error::{ErrorCategory, TrackerError};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    pub tracking_numbers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub results: Vec<TrackingResult>,
}

#[derive(Debug, Deserialize)]
pub struct SingleQuery {
    pub number: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        let status = match err.category() {
            ErrorCategory::Input => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("Request failed: {}", self.message);
        } else {
            tracing::warn!("Rejected request: {}", self.message);
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub fn create_router(tracker: Arc<Tracker>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/carriers", get(list_carriers))
        .route("/api/track", get(track_single).post(track_batch))
        .with_state(tracker)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn list_carriers() -> impl IntoResponse {
    let carriers: Vec<_> = CARRIERS
        .iter()
        .map(|c| json!({ "id": c.id, "name": c.name, "color": c.color }))
        .collect();
    Json(json!({ "carriers": carriers }))
}

async fn track_batch(
    State(tracker): State<Arc<Tracker>>,
    payload: Result<Json<TrackRequest>, JsonRejection>,
) -> Result<Json<TrackResponse>, ApiError> {
    let Json(request) = payload?;
    let results = tracker.track_batch(&request.tracking_numbers).await?;
    Ok(Json(TrackResponse { results }))
}

async fn track_single(
    State(tracker): State<Arc<Tracker>>,
    Query(query): Query<SingleQuery>,
) -> Result<Json<TrackingResult>, ApiError> {
    let number = query
        .number
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Query parameter 'number' is required"))?;

    Ok(Json(tracker.track_one(&number).await))
}
