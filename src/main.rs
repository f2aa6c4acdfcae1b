mod backend;
mod config;
mod forms;
mod i18n;
mod pages;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // A missing .env is fine; real env vars still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let backend = match backend::HttpBackend::new(config.api_url.clone(), config.auth_routes) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!(error = %e, "backend client init failed");
            std::process::exit(1);
        }
    };

    let port = config.port;
    tracing::info!(api_url = %config.api_url, secure_cookies = config.cookie_secure, "backend configured");

    let state = state::AppState::new(config, Arc::new(backend));
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "langaimage listening");
    axum::serve(listener, app).await
}
