//! # Linkhash - نقطه ورود برنامه
//!
//! ترتیب راه‌اندازی:
//! 1. `.env` (اختیاری) و تنظیمات
//! 2. لاگینگ (pretty در توسعه، JSON در production)
//! 3. ساخت store درون حافظه و router
//! 4. bind و serve تا وقتی سیگنال توقف بیاد

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use linkhash::{
    api::create_router,
    config::{Config, Environment},
    error::{AppError, Result},
    store::{LinkStore, MemoryStore},
};

#[tokio::main]
async fn main() -> Result<()> {
    // اگه فایل .env نباشه اوکیه
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    init_tracing(config.environment);

    info!("🚀 Starting Linkhash URL shortener...");
    info!(
        environment = ?config.environment,
        base_url = %config.base_url,
        "✅ Configuration loaded successfully"
    );

    // همه رکوردها با پایان پروسه از بین میرن
    let store: Arc<dyn LinkStore> = Arc::new(MemoryStore::new());

    let app = create_router(store, config.clone());

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        error!(error = %e, addr = %addr, "Failed to bind listener");
        e
    })?;
    info!("🌐 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    info!("👋 Server stopped");
    Ok(())
}

/// راه‌اندازی سیستم tracing برای لاگینگ
///
/// `RUST_LOG` اولویت داره؛ اگه نبود `linkhash=debug,tower_http=debug`.
fn init_tracing(environment: Environment) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("linkhash=debug,tower_http=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if environment.is_production() {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_level(true)
                    .pretty(),
            )
            .init();
    }
}

/// منتظر Ctrl+C یا SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
