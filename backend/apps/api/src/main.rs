//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthConfig, LocalStorage, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use dashboard::{DashboardConfig, InMemoryDashboard, driver_router, fleet_router, landing_router};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

fn auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        AuthConfig::default()
    };

    if let Ok(path) = env::var("SMARTGUARD_STORAGE_PATH") {
        config = config.with_storage_path(path);
    }
    if let Ok(ms) = env::var("SMARTGUARD_SIMULATED_LATENCY_MS") {
        config = config.with_latency(Duration::from_millis(ms.parse()?));
    }
    if env::var("SMARTGUARD_GATEWAY_FAIL").is_ok_and(|v| v == "1" || v == "true") {
        config = config.with_failure(true);
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                //.unwrap_or_else(|_| "api=debug,auth=debug,dashboard=debug,tower_http=debug".into()),
                .unwrap_or_else(|_| "api=info,auth=info,dashboard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let auth_config = auth_config()?;

    if let Some(dir) = auth_config.storage_path.parent()
        && !dir.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(dir).await?;
    }

    tracing::info!(
        storage = %auth_config.storage_path.display(),
        latency_ms = auth_config.simulated_latency_ms(),
        "Session storage ready"
    );

    // One store shared by the auth endpoints and both route guards
    let store = Arc::new(LocalStorage::new(auth_config.storage_path.clone()));

    if auth_config.simulate_failure {
        tracing::warn!("Simulated account service will reject every request");
    }

    let dashboard_config = Arc::new(DashboardConfig::default());
    let repo = Arc::new(InMemoryDashboard::new());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api/auth", auth_router(store.clone(), &auth_config))
        .nest(
            "/api/landing",
            landing_router(repo.clone(), dashboard_config.clone()),
        )
        .nest(
            "/driver",
            driver_router(repo.clone(), store.clone(), dashboard_config.clone()),
        )
        .nest("/fleet", fleet_router(repo, store, dashboard_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("SMARTGUARD_BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:31113".to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
