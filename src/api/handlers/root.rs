//! # Root Handler
//!
//! مسیر `/` و هر مسیر ناشناخته یک خط متنی برمیگردونه.

/// متن پاسخ پیش‌فرض
pub const ROOT_MESSAGE: &str = "Handling request\n";

/// `GET /` و fallback
pub async fn index() -> &'static str {
    ROOT_MESSAGE
}
