mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::SiteConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;

    let app = routes::app(&config).inspect_err(|e| tracing::error!(error = %e, "router setup failed"))?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, "linkpage listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
