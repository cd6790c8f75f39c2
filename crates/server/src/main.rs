use anyhow::Context;
use tracing::info;

mod config;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vouchex_server=info,tower_http=info".into()),
        )
        .init();

    let config = config::ServerConfig::from_env();
    let app = routes::router();

    info!("Listening on {}", config.addr);
    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
