//! # Middleware
//!
//! Middleware‌های سفارشی برای پردازش request/response
//!
//! ## مفاهیم:
//! - **Middleware**: کد که قبل/بعد از handler اجرا میشه
//! - **Tower**: کتابخانه middleware در اکوسیستم Rust
//! - **`from_fn`**: تبدیل یک async fn به Layer

use axum::{
    body::Body,
    http::{header::HeaderValue, Request},
    middleware::Next,
    response::IntoResponse,
};
use std::time::Instant;
use tracing::{info, warn};

/// نام header شناسه درخواست
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

// =====================================
// Request Timing Middleware
// =====================================
/// اندازه‌گیری زمان پردازش request
///
/// پاسخ‌های 5xx با سطح `warn` لاگ میشن.
pub async fn request_timing(request: Request<Body>, next: Next) -> impl IntoResponse {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;
    let duration = start.elapsed();

    if response.status().is_server_error() {
        warn!(
            method = %method,
            uri = %uri,
            status = %response.status(),
            duration_ms = %duration.as_millis(),
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            uri = %uri,
            status = %response.status(),
            duration_ms = %duration.as_millis(),
            "Request completed"
        );
    }

    response
}

// =====================================
// Request ID Middleware
// =====================================
/// اضافه کردن Request ID به هر request
///
/// اگه کلاینت `X-Request-Id` فرستاده باشه همون استفاده میشه،
/// وگرنه یه nanoid دوازده کاراکتری ساخته میشه.
pub async fn request_id(mut request: Request<Body>, next: Next) -> impl IntoResponse {
    let id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .cloned()
        .or_else(|| HeaderValue::from_str(&generate_request_id()).ok());

    if let Some(id) = &id {
        request.headers_mut().insert(REQUEST_ID_HEADER, id.clone());
    }

    let mut response = next.run(request).await;

    if let Some(id) = id {
        response.headers_mut().insert(REQUEST_ID_HEADER, id);
    }

    response
}

/// تولید request ID برای tracing
#[must_use]
pub fn generate_request_id() -> String {
    nanoid::nanoid!(12)
}
