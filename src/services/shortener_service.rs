//! # سرویس کوتاه‌سازی
//!
//! دو عملیات اصلی برنامه:
//! - `shorten`: تولید کد، ذخیره رکورد، ساخت پاسخ با لینک‌ها
//! - `redirect`: پیدا کردن URL اصلی از روی کد
//!
//! کد از هش خود URL ساخته میشه، پس کوتاه‌سازی دوباره یک URL همون کد رو میده
//! و فقط `created_at` رکورد قبلی بازنویسی میشه. اگه دو URL متفاوت به یک کد
//! برسن، رکورد دوم روی اولی مینشینه و فقط یک warning لاگ میشه.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::{
    config::Config,
    error::{OptionExt, Result, URL_NOT_FOUND},
    models::{ShortenRequest, ShortenResponse, UrlRecord},
    store::LinkStore,
    utils,
};

// =====================================
// Shortener Service
// =====================================
/// سرویس کوتاه‌سازی URL
///
/// # مسئولیت‌ها:
/// - اعتبارسنجی ورودی (فقط خالی نبودن)
/// - تولید کد و ذخیره
/// - ساخت لینک‌های HATEOAS با آدرس پایه از config
#[derive(Clone)]
pub struct ShortenerService {
    store: Arc<dyn LinkStore>,
    config: Arc<Config>,
}

impl ShortenerService {
    /// ساخت سرویس جدید
    #[must_use]
    pub fn new(store: Arc<dyn LinkStore>, config: Arc<Config>) -> Self {
        Self { store, config }
    }

    /// ساخت URL کوتاه
    ///
    /// # Errors
    /// - `InvalidInput`: URL خالی یا موجود نبودن فیلد `url`
    #[instrument(skip(self, request), fields(url = %request.url))]
    pub async fn shorten(&self, request: ShortenRequest) -> Result<ShortenResponse> {
        request.validate()?;

        let ShortenRequest { url } = request;
        let short_code = utils::generate_short_code(&url);

        let record = UrlRecord::new(short_code.clone(), url.clone());
        let response = ShortenResponse::from_record(&record, self.config.link_base());

        match self.store.put(&short_code, record).await {
            Some(previous) if previous.original_url != url => {
                warn!(
                    short_code = %short_code,
                    replaced_url = %previous.original_url,
                    "Short code collision, previous record overwritten"
                );
            }
            Some(_) => {
                debug!(short_code = %short_code, "URL shortened again, created_at refreshed");
            }
            None => {
                info!(short_code = %short_code, "Created new short URL");
            }
        }

        Ok(response)
    }

    /// گرفتن URL اصلی برای redirect
    ///
    /// # Errors
    /// - `NotFound` با پیام `URL not found`
    #[instrument(skip(self))]
    pub async fn redirect(&self, short_code: &str) -> Result<String> {
        let record = self.store.get(short_code).await;

        if record.is_none() {
            debug!(
                short_code = %short_code,
                well_formed = utils::is_short_code(short_code),
                "Unknown short code"
            );
        }

        let record = record.ok_or_not_found(URL_NOT_FOUND)?;
        Ok(record.original_url)
    }

    /// تعداد رکوردهای ذخیره شده
    pub async fn stored_links(&self) -> usize {
        self.store.len().await
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, store::MockLinkStore};
    use pretty_assertions::assert_eq;

    fn service_with(store: MockLinkStore) -> ShortenerService {
        ShortenerService::new(Arc::new(store), Arc::new(Config::default()))
    }

    #[tokio::test]
    async fn test_shorten_stores_record_under_generated_code() {
        let url = "https://example.com/a";
        let expected = utils::generate_short_code(url);

        let mut store = MockLinkStore::new();
        let code_check = expected.clone();
        store
            .expect_put()
            .withf(move |code, record| {
                code == code_check.as_str()
                    && record.id == code_check
                    && record.short_code == code_check
                    && record.original_url == "https://example.com/a"
            })
            .times(1)
            .returning(|_, _| None);

        let response = service_with(store)
            .shorten(ShortenRequest::new(url))
            .await
            .unwrap();

        assert_eq!(response.short_code, expected);
        assert_eq!(
            response.links[0].href,
            format!("http://localhost:3000/redirect/{expected}")
        );
        assert_eq!(response.links[1].href, "http://localhost:3000/shorten");
    }

    #[tokio::test]
    async fn test_shorten_rejects_empty_url_without_touching_store() {
        let mut store = MockLinkStore::new();
        store.expect_put().never();

        let result = service_with(store).shorten(ShortenRequest::default()).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_shorten_tolerates_overwrite() {
        let mut store = MockLinkStore::new();
        store
            .expect_put()
            .returning(|code, _| Some(UrlRecord::new(code, "https://other.example")));

        let result = service_with(store)
            .shorten(ShortenRequest::new("https://example.com"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_redirect_found() {
        let mut store = MockLinkStore::new();
        store
            .expect_get()
            .withf(|code| code == "abcd1234")
            .returning(|code| Some(UrlRecord::new(code, "https://example.com")));

        let url = service_with(store).redirect("abcd1234").await.unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[tokio::test]
    async fn test_redirect_unknown_code() {
        let mut store = MockLinkStore::new();
        store.expect_get().returning(|_| None);

        let result = service_with(store).redirect("doesnotexist").await;

        match result {
            Err(AppError::NotFound(message)) => assert_eq!(message, "URL not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_links_use_configured_base() {
        let mut store = MockLinkStore::new();
        store.expect_put().returning(|_, _| None);

        let config = crate::config::ConfigBuilder::new()
            .base_url("https://sho.rt/")
            .build();
        let service = ShortenerService::new(Arc::new(store), Arc::new(config));

        let response = service
            .shorten(ShortenRequest::new("https://example.com"))
            .await
            .unwrap();

        assert!(response.links[0].href.starts_with("https://sho.rt/redirect/"));
        assert_eq!(response.links[1].href, "https://sho.rt/shorten");
    }
}
