//! # ماژول مدل‌ها (Domain Models)
//!
//! این ماژول مدل‌های داده برنامه رو تعریف میکنه.
//!
//! ## تفاوت انواع مدل:
//! - **Entity**: `UrlRecord` که در store نگه داشته میشه
//! - **DTO (Data Transfer Object)**: درخواست/پاسخ API
//! - **Link**: لینک‌های HATEOAS داخل پاسخ

mod url;
mod dto;

// Re-export همه مدل‌ها
pub use url::*;
pub use dto::*;
