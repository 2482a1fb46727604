//! # Store درون حافظه
//!
//! `HashMap` محافظت شده با `RwLock`:
//! - چند `get` همزمان میتونن بخونن
//! - `put` دسترسی انحصاری میگیره، پس هیچ خواننده‌ای map نیمه‌کاره نمیبینه

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::trace;

use super::LinkStore;
use crate::models::UrlRecord;

/// Store درون حافظه
///
/// # مفاهیم:
/// - `Arc<RwLock<...>>`: clone ارزان، همه clone‌ها یک map رو share میکنن
/// - `tokio::sync::RwLock`: قفل async، thread رو block نمیکنه
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<HashMap<String, UrlRecord>>>,
}

impl MemoryStore {
    /// ساخت store خالی
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn put(&self, code: &str, record: UrlRecord) -> Option<UrlRecord> {
        let mut records = self.records.write().await;
        trace!(short_code = %code, "Storing record");
        records.insert(code.to_string(), record)
    }

    async fn get(&self, code: &str) -> Option<UrlRecord> {
        self.records.read().await.get(code).cloned()
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}
