//! # ماژول سرویس‌ها (Business Logic Layer)
//!
//! ## لایه‌بندی معماری
//!
//! ```text
//! ┌─────────────────┐
//! │    API Layer    │  <-- HTTP handlers (axum)
//! ├─────────────────┤
//! │  Service Layer  │  <-- shorten / redirect (اینجا!)
//! ├─────────────────┤
//! │   Link Store    │  <-- trait LinkStore
//! └─────────────────┘
//! ```
//!
//! ## مفاهیم Rust:
//! - **Dependency Injection**: store از بیرون تزریق میشه، نه global
//! - **Arc<T>**: اشتراک امن بین threads

mod shortener_service;

pub use shortener_service::*;

use std::sync::Arc;
use std::time::Instant;

use crate::{config::Config, store::LinkStore};

// =====================================
// Application State
// =====================================
/// وضعیت برنامه که بین همه handlers اشتراک‌گذاری میشه
///
/// clone کردنش فقط شمارنده‌های `Arc` رو زیاد میکنه.
#[derive(Clone)]
pub struct AppState {
    /// تنظیمات برنامه
    pub config: Arc<Config>,

    /// سرویس کوتاه‌سازی
    pub shortener: Arc<ShortenerService>,

    /// زمان شروع، برای uptime در health
    pub started_at: Instant,
}

impl AppState {
    /// ساخت AppState جدید
    ///
    /// # مفاهیم:
    /// - Factory method: ساخت object پیچیده
    /// - `Arc<dyn LinkStore>`: هر پیاده‌سازی store قابل استفاده‌ست
    #[must_use]
    pub fn new(store: Arc<dyn LinkStore>, config: Config) -> Self {
        let config = Arc::new(config);
        let shortener = Arc::new(ShortenerService::new(store, config.clone()));

        Self {
            config,
            shortener,
            started_at: Instant::now(),
        }
    }

    /// دسترسی به config
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// چند ثانیه از شروع گذشته
    #[must_use]
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
