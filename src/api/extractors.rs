//! # Custom Extractors
//!
//! Extractor‌های سفارشی برای استخراج داده از request
//!
//! ## چرا `Json` خود axum نه؟
//! - `Json` بدون header `Content-Type: application/json` درخواست رو با 415 رد میکنه
//! - پیام خطاهاش JSON و مخصوص axum هست
//!
//! اینجا بدنه به صورت خام خونده میشه و با `serde_json` decode میشه؛ هر خطایی
//! به `AppError::InvalidInput` با پیام خود decoder تبدیل میشه (400، plain text).

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

// =====================================
// JSON Body Extractor
// =====================================
/// بدنه JSON بدون نیاز به Content-Type
///
/// # استفاده در handler:
/// ```rust,ignore
/// async fn handler(JsonBody(request): JsonBody<ShortenRequest>) -> ... {
///     // request حالا deserialize شده
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state)
            .await
            .map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::InvalidInput(e.to_string()))
    }
}
