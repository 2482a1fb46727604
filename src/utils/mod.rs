//! # ماژول توابع کمکی (Utilities)
//!
//! تولید short code و توابع کمکی مرتبط.
//!
//! ## مفاهیم Rust:
//! - **Pure functions**: بدون side effect، همیشه خروجی یکسان
//! - **Traits از crate‌های دیگه**: `Digest` از RustCrypto
//! - **Iterator adapters**: `chars().all(...)`

use md5::{Digest, Md5};

// =====================================
// Constants
// =====================================
/// طول ثابت short code (تعداد کاراکتر hex)
pub const SHORT_CODE_LENGTH: usize = 8;

// =====================================
// Short Code Generation
// =====================================
/// تولید short code از روی URL اصلی
///
/// هش MD5 روی بایت‌های UTF-8 گرفته میشه، به hex کوچک تبدیل میشه
/// و ۸ کاراکتر اولش برمیگرده.
///
/// # مفاهیم:
/// - Deterministic: یک URL همیشه یک کد میده، پس نیازی به counter یا retry نیست
/// - `format!("{:x}", ...)`: خروجی digest خودش `LowerHex` رو پیاده‌سازی کرده
///
/// # مثال
/// ```rust
/// use linkhash::utils::generate_short_code;
///
/// let code = generate_short_code("https://example.com/a");
/// assert_eq!(code.len(), 8);
/// assert_eq!(code, generate_short_code("https://example.com/a"));
/// ```
#[must_use]
pub fn generate_short_code(original_url: &str) -> String {
    let digest = Md5::digest(original_url.as_bytes());
    let mut hex = format!("{:x}", digest);

    // ۳۲ کاراکتر hex، فقط ۸ تای اول
    hex.truncate(SHORT_CODE_LENGTH);
    hex
}

// =====================================
// Validation Functions
// =====================================
/// آیا این رشته شکل یک short code تولید شده رو داره؟
///
/// دقیقا ۸ کاراکتر و فقط `0-9a-f`.
///
/// ```rust
/// use linkhash::utils::is_short_code;
///
/// assert!(is_short_code("0a1b2c3d"));
/// assert!(!is_short_code("0A1B2C3D")); // حروف بزرگ نه
/// assert!(!is_short_code("zzzzzzzz"));
/// ```
#[must_use]
pub fn is_short_code(code: &str) -> bool {
    code.len() == SHORT_CODE_LENGTH
        && code
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

/// حذف `/` های انتهایی از آدرس پایه
///
/// برای اینکه `http://host/` و `http://host` لینک یکسان بسازن.
#[must_use]
pub fn trim_base_url(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest_prefix() {
        // md5("") = d41d8cd98f00b204e9800998ecf8427e
        assert_eq!(generate_short_code(""), "d41d8cd9");
        // md5("hello") = 5d41402abc4b2a76b9719d911017c592
        assert_eq!(generate_short_code("hello"), "5d41402a");
    }

    #[test]
    fn test_generate_is_deterministic() {
        let url = "https://gemini.google.com/app/0f81ef95d7aacd96";
        assert_eq!(generate_short_code(url), generate_short_code(url));
    }

    #[test]
    fn test_different_urls_different_codes() {
        assert_ne!(
            generate_short_code("https://example.com/a"),
            generate_short_code("https://example.com/b")
        );
    }

    #[test]
    fn test_generated_code_shape() {
        for url in ["a", "https://example.com", "ünïcödé/路径", " "] {
            let code = generate_short_code(url);
            assert!(is_short_code(&code), "bad code {code} for {url}");
        }
    }

    #[test]
    fn test_is_short_code() {
        assert!(is_short_code("deadbeef"));
        assert!(is_short_code("01234567"));
        assert!(!is_short_code("deadbee")); // too short
        assert!(!is_short_code("deadbeef0")); // too long
        assert!(!is_short_code("DEADBEEF")); // upper case
        assert!(!is_short_code("zzzzzzzz"));
        assert!(!is_short_code(""));
    }

    #[test]
    fn test_trim_base_url() {
        assert_eq!(trim_base_url("http://localhost:3000/"), "http://localhost:3000");
        assert_eq!(trim_base_url("http://localhost:3000"), "http://localhost:3000");
        assert_eq!(trim_base_url("https://s.io/x//"), "https://s.io/x");
    }
}
