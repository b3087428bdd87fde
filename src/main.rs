//! Healthy Tummies Score — Binary Entrypoint
//! Boots the Axum HTTP server: config, tracing, metrics recorder, routes.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use healthy_tummies_score::{api, config::ServiceConfig, metrics::Metrics};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op elsewhere.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = ServiceConfig::load()?;
    let metrics = Metrics::init();
    let app = api::router(&cfg).merge(metrics.router());

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(addr = %cfg.bind_addr, "healthy tummies score service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
