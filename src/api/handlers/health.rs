//! # Health Check Handler
//!
//! برای بررسی سلامت سرویس

use axum::{extract::State, Json};

use crate::{models::HealthResponse, services::AppState};

/// بررسی سلامت سرویس
///
/// # Endpoint
/// `GET /health`
///
/// # Response
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "stored_links": 12,
///   "uptime_seconds": 3600
/// }
/// ```
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let stored_links = state.shortener.stored_links().await;

    Json(HealthResponse::healthy(stored_links, state.uptime_seconds()))
}
