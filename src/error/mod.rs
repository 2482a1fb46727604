//! # ماژول مدیریت خطاها (Error Handling)
//!
//! این ماژول سیستم مدیریت خطای برنامه رو تعریف میکنه.
//!
//! ## مفاهیم Rust:
//! - **Custom Error Types**: تعریف نوع خطای سفارشی
//! - **thiserror**: derive macro برای Error trait
//! - **From Trait**: تبدیل خودکار نوع‌ها
//! - **Result Type Alias**: alias برای ساده‌تر شدن کد
//!
//! ## دسته‌بندی خطاها
//!
//! فقط دو خطای "کاربری" داریم:
//! - `InvalidInput`: بدنه درخواست خراب یا URL خالی (400)
//! - `NotFound`: کد کوتاه ثبت نشده (404)
//!
//! بقیه خطاها مربوط به راه‌اندازی یا موارد غیرعادی سرور هستن.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// پیام ثابت برای کدی که پیدا نشد
pub const URL_NOT_FOUND: &str = "URL not found";

// =====================================
// Result Type Alias
// =====================================
/// نوع Result سفارشی برنامه
///
/// به جای نوشتن `Result<UrlRecord, AppError>` میتونیم بنویسیم `Result<UrlRecord>`
pub type Result<T, E = AppError> = std::result::Result<T, E>;

// =====================================
// Custom Error Enum
// =====================================
/// خطای اصلی برنامه
///
/// # مفاهیم:
/// - `#[derive(Error)]`: از thiserror برای پیاده‌سازی Error trait
/// - `#[error("...")]`: پیام خطا برای هر نوع
/// - `#[from]`: تبدیل خودکار از نوع‌های دیگه
///
/// پیام خطاهای 4xx عینا به کلاینت برمیگرده، برای همین `{0}` بدون پیشوند هست.
#[derive(Debug, Error)]
pub enum AppError {
    // ----------------------------------------
    // خطاهای کاربر (4xx)
    // ----------------------------------------

    /// ورودی نامعتبر - 400
    #[error("{0}")]
    InvalidInput(String),

    /// پیدا نشد - 404
    #[error("{0}")]
    NotFound(String),

    // ----------------------------------------
    // خطاهای سرور (5xx)
    // ----------------------------------------

    /// خطای داخلی سرور - 500
    #[error("Internal server error: {0}")]
    Internal(String),

    /// خطای سرور (مثلا شکست در serve)
    #[error("Server error: {0}")]
    Server(String),

    /// خطای تنظیمات
    #[error("Configuration error: {0}")]
    Config(String),

    /// خطای IO (مثلا bind نشدن پورت)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// گرفتن HTTP status code متناسب با خطا
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,

            Self::Internal(_)
            | Self::Server(_)
            | Self::Config(_)
            | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// آیا این یه خطای سرور هست؟
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// خطای استاندارد برای کدی که در store نیست
    #[must_use]
    pub fn url_not_found() -> Self {
        Self::NotFound(URL_NOT_FOUND.to_string())
    }
}

// =====================================
// IntoResponse Implementation
// =====================================
/// تبدیل AppError به Response HTTP
///
/// بدنه همیشه plain text هست:
/// - خطاهای کاربر: همون پیام (مثلا `URL not found`)
/// - خطاهای سرور: لاگ میشن و یه پیام کلی برمیگرده
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_server_error() {
            error!(error = %self, "Server error occurred");
            let reason = status.canonical_reason().unwrap_or("Error");
            return (status, reason).into_response();
        }

        (status, self.to_string()).into_response()
    }
}

// =====================================
// From Implementations
// =====================================
// این‌ها برای تبدیل خودکار خطاهای دیگه به AppError هستن

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<::config::ConfigError> for AppError {
    fn from(err: ::config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

// =====================================
// Result Extensions
// =====================================
/// Extension trait برای Result
///
/// # مفاهیم:
/// - Extension Trait: اضافه کردن متد به نوع‌های موجود
pub trait ResultExt<T> {
    /// تبدیل خطا به AppError::Internal
    fn map_internal(self) -> Result<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn map_internal(self) -> Result<T> {
        self.map_err(|e| AppError::Internal(e.to_string()))
    }
}

// =====================================
// Option Extensions
// =====================================
/// Extension trait برای Option
pub trait OptionExt<T> {
    /// تبدیل None به AppError::NotFound
    fn ok_or_not_found(self, message: impl Into<String>) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| AppError::NotFound(message.into()))
    }
}
