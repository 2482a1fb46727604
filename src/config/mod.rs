//! # ماژول تنظیمات (Configuration)
//!
//! این ماژول مسئول خوندن و مدیریت تنظیمات برنامه هست.
//!
//! ## مفاهیم Rust:
//! - **Derive Macros**: تولید خودکار کد با `#[derive(...)]`
//! - **Default Trait**: مقادیر پیش‌فرض
//! - **Serde**: سریالایز/دسریالایز
//! - **Builder Pattern**: ساخت تدریجی آبجکت
//!
//! ## ترتیب لایه‌ها (از کم‌اولویت به پراولویت)
//!
//! 1. مقادیر پیش‌فرض (`Config::default()`)
//! 2. فایل اختیاری `linkhash.toml` / `linkhash.yaml` / `linkhash.json`
//! 3. متغیرهای محیطی با پیشوند `LINKHASH_` (مثلا `LINKHASH_PORT`)

use ::config::{Config as Settings, Environment as EnvSource, File};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::utils;

/// نام پیش‌فرض فایل تنظیمات (بدون پسوند)
pub const DEFAULT_CONFIG_FILE: &str = "linkhash";

/// پیشوند متغیرهای محیطی
pub const ENV_PREFIX: &str = "LINKHASH";

/// تنظیمات اصلی برنامه
///
/// # مثال
/// ```rust
/// use linkhash::config::Config;
///
/// let config = Config::default();
/// println!("Port: {}", config.port);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// آدرس هاست سرور
    pub host: String,

    /// پورت سرور
    pub port: u16,

    /// آدرس پایه عمومی برای ساخت لینک‌های `_links`
    pub base_url: String,

    /// محیط اجرا (development, testing, production)
    pub environment: Environment,

    /// حداکثر زمان پردازش هر درخواست (ثانیه)
    pub request_timeout_secs: u64,
}

/// محیط اجرای برنامه
///
/// # مفاهیم:
/// - `#[serde(from = "String")]`: موقع deserialize از `From<String>` استفاده میشه،
///   پس مقدارهای ناشناخته به Development برمیگردن
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Environment {
    /// محیط توسعه
    #[default]
    Development,

    /// محیط تست
    Testing,

    /// محیط تولید - لاگ‌ها JSON میشن
    Production,
}

impl Environment {
    /// آیا در محیط توسعه هستیم؟
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// آیا در محیط تولید هستیم؟
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// تبدیل String به Environment
impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            environment: Environment::Development,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// لود تنظیمات از فایل پیش‌فرض و متغیرهای محیطی
    ///
    /// # Errors
    /// خطا برمیگردونه اگه فایل یا متغیری قابل parse نباشه
    ///
    /// # مثال
    /// ```rust,no_run
    /// use linkhash::config::Config;
    ///
    /// let config = Config::load().expect("Failed to load config");
    /// ```
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// لود تنظیمات با یک فایل مشخص
    ///
    /// # مفاهیم:
    /// - `Settings::try_from(&defaults)`: خود struct پیش‌فرض به عنوان پایین‌ترین لایه
    /// - `required(false)`: نبودن فایل خطا نیست
    /// - `try_parsing(true)`: `"3000"` از env به عدد تبدیل میشه
    ///
    /// # Errors
    /// خطا برمیگردونه اگه ساخت یا deserialize کردن لایه‌ها fail بشه
    pub fn load_from(file: &str) -> Result<Self> {
        let settings = Settings::builder()
            .add_source(Settings::try_from(&Config::default())?)
            .add_source(File::with_name(file).required(false))
            .add_source(EnvSource::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// اعتبارسنجی تنظیمات
    ///
    /// # Errors
    /// - پورت صفر
    /// - `base_url` که آدرس مطلق http/https نیست یا query/fragment داره
    /// - timeout صفر
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::Config("port cannot be 0".to_string()));
        }

        let base = url::Url::parse(&self.base_url).map_err(|e| {
            AppError::Config(format!("base_url '{}' is invalid: {}", self.base_url, e))
        })?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "base_url must use http or https, got '{}'",
                base.scheme()
            )));
        }

        if base.query().is_some() || base.fragment().is_some() {
            return Err(AppError::Config(
                "base_url must not contain a query or fragment".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "request_timeout_secs cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// آدرس کامل سرور برای bind
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// آدرس پایه لینک‌ها بدون `/` انتهایی
    #[must_use]
    pub fn link_base(&self) -> &str {
        utils::trim_base_url(&self.base_url)
    }
}

// =====================================
// Builder Pattern
// =====================================
/// ساخت Config با Builder Pattern
///
/// # مثال
/// ```rust
/// use linkhash::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .port(8080)
///     .host("0.0.0.0")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// ساخت builder جدید
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// تنظیم پورت
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// تنظیم هاست
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// تنظیم base_url
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// تنظیم محیط
    #[must_use]
    pub fn environment(mut self, env: Environment) -> Self {
        self.config.environment = env;
        self
    }

    /// تنظیم timeout درخواست
    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = secs;
        self
    }

    /// ساخت Config نهایی
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }

    /// ساخت Config با اعتبارسنجی
    ///
    /// # Errors
    /// خطا برمیگردونه اگه اعتبارسنجی fail بشه
    pub fn build_validated(self) -> Result<Config> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .port(8080)
            .host("0.0.0.0")
            .base_url("https://sho.rt/")
            .build();

        assert_eq!(config.port, 8080);
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.link_base(), "https://sho.rt");
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from("production".to_string()), Environment::Production);
        assert_eq!(Environment::from("PROD".to_string()), Environment::Production);
        assert_eq!(Environment::from("test".to_string()), Environment::Testing);
        assert_eq!(Environment::from("unknown".to_string()), Environment::Development);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(ConfigBuilder::new().port(0).build_validated().is_err());
        assert!(ConfigBuilder::new().base_url("not a url").build_validated().is_err());
        assert!(ConfigBuilder::new().base_url("ftp://host").build_validated().is_err());
        assert!(ConfigBuilder::new()
            .base_url("http://host/?q=1")
            .build_validated()
            .is_err());
        assert!(ConfigBuilder::new()
            .request_timeout_secs(0)
            .build_validated()
            .is_err());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("linkhash-test-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "port = 8081\nbase_url = \"https://sho.rt\"\nenvironment = \"prod\"\n",
        )
        .unwrap();

        let config = Config::load_from(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.port, 8081);
        assert_eq!(config.base_url, "https://sho.rt");
        assert_eq!(config.environment, Environment::Production);
        // از لایه پیش‌فرض
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let config = Config::load_from("/nonexistent/linkhash-missing").unwrap();
        assert_eq!(config.port, Config::default().port);
    }
}
