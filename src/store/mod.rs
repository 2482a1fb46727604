//! # لایه ذخیره‌سازی (Link Store)
//!
//! نگاشت short code به `UrlRecord`.
//!
//! ## Repository Pattern
//! سرویس‌ها فقط trait `LinkStore` رو میشناسن و پیاده‌سازی به صورت
//! `Arc<dyn LinkStore>` تزریق میشه. پیاده‌سازی فعلی `MemoryStore` هست
//! که با ری‌استارت پروسه همه چیز از بین میره.
//!
//! ## مفاهیم Rust:
//! - **async_trait**: async در traits + امکان `dyn`
//! - **Send + Sync**: استفاده همزمان از چند task
//! - **automock**: در تست‌ها `MockLinkStore` ساخته میشه

mod memory;

pub use memory::*;

use async_trait::async_trait;

use crate::models::UrlRecord;

// =====================================
// Link Store Trait
// =====================================
/// قرارداد store
///
/// هیچ‌کدوم از متدها خطا برنمیگردونن؛ نبودن رکورد با `None` مشخص میشه.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// درج یا بازنویسی رکورد زیر `code`
    ///
    /// رکورد قبلی (اگه بود) برگردونده میشه.
    async fn put(&self, code: &str, record: UrlRecord) -> Option<UrlRecord>;

    /// گرفتن رکورد
    async fn get(&self, code: &str) -> Option<UrlRecord>;

    /// تعداد رکوردها
    async fn len(&self) -> usize;

    /// آیا store خالیه؟
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
