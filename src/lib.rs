//! # Linkhash
//!
//! سرویس کوتاه‌کننده URL درون حافظه با کدهای قطعی (deterministic).
//!
//! ## ساختار پروژه
//!
//! ```text
//! src/
//! ├── lib.rs          # نقطه ورود کتابخانه - اینجا!
//! ├── main.rs         # نقطه ورود باینری
//! ├── config/         # مدیریت تنظیمات
//! ├── error/          # تعریف خطاها
//! ├── store/          # Link Store (trait + حافظه)
//! ├── models/         # مدل‌های داده
//! ├── services/       # shorten / redirect
//! ├── api/            # لایه HTTP
//! └── utils/          # تولید short code
//! ```
//!
//! ## مثال استفاده
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use linkhash::{api::create_router, config::Config, store::MemoryStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::load().unwrap();
//!     let app = create_router(Arc::new(MemoryStore::new()), config.clone());
//!     let listener = tokio::net::TcpListener::bind(config.server_addr()).await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

// =====================================
// Module Declarations
// =====================================

/// ماژول مدیریت تنظیمات برنامه
pub mod config;

/// ماژول تعریف و مدیریت خطاها
pub mod error;

/// ماژول ذخیره‌سازی لینک‌ها
pub mod store;

/// ماژول مدل‌های داده
pub mod models;

/// ماژول سرویس‌ها (Business Logic)
pub mod services;

/// ماژول API و HTTP Handlers
pub mod api;

/// ماژول توابع کمکی
pub mod utils;

// =====================================
// Re-exports
// =====================================

/// نتیجه عملیات با خطای سفارشی ما
pub use error::Result;

/// خطای اصلی برنامه
pub use error::AppError;

// =====================================
// Prelude Module
// =====================================
/// ماژول prelude برای import راحت‌تر آیتم‌های پرکاربرد
///
/// ```rust
/// use linkhash::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{AppError, Result};
    pub use crate::models::*;
    pub use crate::services::*;
    pub use crate::store::{LinkStore, MemoryStore};
}
