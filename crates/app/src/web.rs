//! Minimal health/status web surface.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use tokio::sync::RwLock;

use crate::scheduler::SchedulerStatus;

pub fn build_app(status: Arc<RwLock<SchedulerStatus>>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/status", get(scheduler_status))
        .layer(Extension(status))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn scheduler_status(
    Extension(status): Extension<Arc<RwLock<SchedulerStatus>>>,
) -> impl IntoResponse {
    let snapshot = status.read().await.clone();
    Json(snapshot)
}
