//! # Data Transfer Objects (DTOs)
//!
//! DTO‌های عمومی که به کوتاه‌سازی ربطی ندارن

use serde::{Deserialize, Serialize};

// =====================================
// Health Check
// =====================================
/// پاسخ health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,

    /// تعداد رکوردهای فعلی در store
    pub stored_links: usize,

    pub uptime_seconds: u64,
}

impl HealthResponse {
    /// ساخت پاسخ healthy
    #[must_use]
    pub fn healthy(stored_links: usize, uptime_seconds: u64) -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            stored_links,
            uptime_seconds,
        }
    }
}
