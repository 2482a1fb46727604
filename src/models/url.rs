//! # مدل URL
//!
//! Entity و DTO‌های مربوط به کوتاه کردن URL

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =====================================
// URL Entity
// =====================================
/// رکورد ذخیره شده برای هر کوتاه‌سازی
///
/// `id` و `short_code` همیشه برابرن؛ هر دو از روی `original_url` ساخته میشن.
/// برای همین constructor فقط یک کد میگیره.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    /// شناسه یکتا (همون short code)
    pub id: String,

    /// آدرس اصلی، بدون هیچ تغییری
    pub original_url: String,

    /// کد کوتاه
    pub short_code: String,

    /// زمان ساخت (با هر کوتاه‌سازی مجدد همون URL بازنویسی میشه)
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// ساخت رکورد جدید با زمان فعلی
    #[must_use]
    pub fn new(short_code: impl Into<String>, original_url: impl Into<String>) -> Self {
        let short_code = short_code.into();
        Self {
            id: short_code.clone(),
            original_url: original_url.into(),
            short_code,
            created_at: Utc::now(),
        }
    }
}

// =====================================
// API Request DTOs
// =====================================
/// درخواست ساخت URL کوتاه
///
/// # مفاهیم:
/// - `#[serde(default)]`: نبودن فیلد `url` خطای decode نیست، رشته خالی میشه
/// - `#[validate(length(min = 1))]`: رشته خالی بعدا در سرویس رد میشه
#[derive(Debug, Clone, Default, Serialize, Deserialize, validator::Validate)]
pub struct ShortenRequest {
    /// آدرس اصلی
    #[serde(default)]
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
}

impl ShortenRequest {
    /// ساخت درخواست از یک URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

// =====================================
// HATEOAS Links
// =====================================
/// رابطه لینک به redirect
pub const REL_REDIRECT: &str = "redirect_to_original";

/// رابطه لینک به خود endpoint
pub const REL_SELF: &str = "self";

/// یک لینک ناوبری در پاسخ
///
/// `type` کلمه رزرو شده Rust هست، برای همین `media_type` با rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,

    #[serde(rename = "type")]
    pub media_type: String,
}

impl Link {
    /// ساخت لینک
    #[must_use]
    pub fn new(
        href: impl Into<String>,
        rel: impl Into<String>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            media_type: media_type.into(),
        }
    }

    /// لینک redirect برای یک کد: `{base}/redirect/{code}`
    #[must_use]
    pub fn redirect_to_original(base_url: &str, short_code: &str) -> Self {
        Self::new(
            format!("{}/redirect/{}", base_url, short_code),
            REL_REDIRECT,
            "text/html",
        )
    }

    /// لینک به خود endpoint کوتاه‌سازی: `{base}/shorten`
    #[must_use]
    pub fn shorten_self(base_url: &str) -> Self {
        Self::new(format!("{}/shorten", base_url), REL_SELF, "application/json")
    }
}

// =====================================
// API Response DTOs
// =====================================
/// پاسخ کوتاه‌سازی
///
/// ```json
/// {
///   "short_code": "c984d06a",
///   "_links": [
///     {"href": "http://localhost:3000/redirect/c984d06a", "rel": "redirect_to_original", "type": "text/html"},
///     {"href": "http://localhost:3000/shorten", "rel": "self", "type": "application/json"}
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_code: String,

    #[serde(rename = "_links")]
    pub links: Vec<Link>,
}

impl ShortenResponse {
    /// ساخت پاسخ از روی رکورد
    ///
    /// `base_url` باید بدون `/` انتهایی باشه (`Config::link_base`).
    #[must_use]
    pub fn from_record(record: &UrlRecord, base_url: &str) -> Self {
        Self {
            short_code: record.short_code.clone(),
            links: vec![
                Link::redirect_to_original(base_url, &record.short_code),
                Link::shorten_self(base_url),
            ],
        }
    }

    /// پیدا کردن لینک با rel مشخص
    #[must_use]
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.rel == rel)
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use validator::Validate;

    #[test]
    fn test_record_id_matches_code() {
        let record = UrlRecord::new("abcd1234", "https://example.com");
        assert_eq!(record.id, record.short_code);
        assert_eq!(record.original_url, "https://example.com");
    }

    #[test]
    fn test_missing_url_decodes_to_empty() {
        let request: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.url, "");
        assert!(request.validate().is_err());
        assert!(ShortenRequest::new("x").validate().is_ok());
    }

    #[test]
    fn test_response_wire_shape() {
        let record = UrlRecord::new("abcd1234", "https://example.com");
        let response = ShortenResponse::from_record(&record, "http://localhost:3000");

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "short_code": "abcd1234",
                "_links": [
                    {
                        "href": "http://localhost:3000/redirect/abcd1234",
                        "rel": "redirect_to_original",
                        "type": "text/html"
                    },
                    {
                        "href": "http://localhost:3000/shorten",
                        "rel": "self",
                        "type": "application/json"
                    }
                ]
            })
        );
    }

    #[test]
    fn test_link_lookup() {
        let record = UrlRecord::new("abcd1234", "https://example.com");
        let response = ShortenResponse::from_record(&record, "https://sho.rt");

        assert_eq!(
            response.link(REL_SELF).map(|l| l.href.as_str()),
            Some("https://sho.rt/shorten")
        );
        assert!(response.link("missing").is_none());
    }
}
