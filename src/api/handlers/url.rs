//! # URL Handlers
//!
//! Handler‌های کوتاه‌سازی و redirect

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::{
    api::extractors::JsonBody,
    error::{Result, ResultExt},
    models::{ShortenRequest, ShortenResponse},
    services::AppState,
};

// =====================================
// Shorten
// =====================================
/// ساخت URL کوتاه
///
/// # Endpoint
/// `POST /shorten`
///
/// # Request Body
/// ```json
/// { "url": "https://example.com/long-url" }
/// ```
///
/// # Response
/// - 200 با `ShortenResponse` (JSON)
/// - 400 plain text اگه بدنه decode نشه یا `url` خالی باشه
pub async fn shorten(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ShortenRequest>,
) -> Result<Json<ShortenResponse>> {
    let response = state.shortener.shorten(request).await?;
    Ok(Json(response))
}

// =====================================
// Redirect
// =====================================
/// Redirect به URL اصلی
///
/// # Endpoint
/// `GET /redirect/*code` - کل ادامه مسیر به عنوان کد استفاده میشه
///
/// # Response
/// - 302 Found با header `Location`
/// - 404 با بدنه `URL not found`
pub async fn redirect(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response> {
    redirect_to_original(&state, &code).await
}

/// `GET /redirect/` بدون کد؛ مثل کد خالی رفتار میکنه (404)
pub async fn redirect_without_code(State(state): State<AppState>) -> Result<Response> {
    redirect_to_original(&state, "").await
}

/// ساخت پاسخ 302
///
/// `Redirect::temporary` در axum کد 307 میده، برای همین پاسخ دستی ساخته میشه.
async fn redirect_to_original(state: &AppState, code: &str) -> Result<Response> {
    let original_url = state.shortener.redirect(code).await?;

    // URL ذخیره شده opaque هست؛ ممکنه کاراکتر غیرمجاز برای header داشته باشه
    let location = HeaderValue::try_from(original_url.as_str()).map_internal()?;

    info!(short_code = %code, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
