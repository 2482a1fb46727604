//! # لایه API
//!
//! این ماژول HTTP handlers و routing رو مدیریت میکنه.
//!
//! ## مفاهیم Rust + Axum:
//! - **Router**: تعریف مسیرها
//! - **Extractors**: استخراج داده از request
//! - **State**: اشتراک state بین handlers
//! - **Middleware**: پردازش قبل/بعد از handler
//!
//! ## ساختار URL‌ها:
//! - `POST /shorten` - ساخت URL کوتاه
//! - `GET /redirect/:code` - Redirect به URL اصلی
//! - `GET /health` - Health check
//! - `GET /` و بقیه مسیرها - یک خط متن

mod extractors;
mod handlers;
mod middleware;

pub use extractors::*;
pub use handlers::*;
pub use middleware::*;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware as axum_middleware,
    routing::{any, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{config::Config, services::AppState, store::LinkStore};

// =====================================
// Router Builder
// =====================================
/// ساخت Router اصلی برنامه
///
/// # Arguments
/// * `store` - پیاده‌سازی Link Store (معمولا `MemoryStore`)
/// * `config` - تنظیمات برنامه
pub fn create_router(store: Arc<dyn LinkStore>, config: Config) -> Router {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let state = AppState::new(store, config);

    Router::new()
        .route("/", any(handlers::root::index))
        .route("/shorten", post(handlers::url::shorten))
        .route("/redirect/", get(handlers::url::redirect_without_code))
        .route("/redirect/*code", get(handlers::url::redirect))
        .route("/health", get(handlers::health::health_check))
        .fallback(handlers::root::index)
        .layer(
            ServiceBuilder::new()
                // Tracing - لاگ کردن request‌ها
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(axum_middleware::from_fn(middleware::request_timing))
                // Timeout - حداکثر زمان پردازش
                .layer(TimeoutLayer::new(timeout))
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
