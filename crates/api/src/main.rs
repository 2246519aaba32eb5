//! Barbershop agenda - HTTP server entry point

use std::sync::Arc;

use agenda_lib::utils::logging::init_logging;
use agenda_lib::{build_router, AppContext};
use anyhow::Context;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before logging so RUST_LOG from the file applies
    let dotenv = dotenvy::dotenv();
    init_logging();

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) => warn!(error = %e, "no .env file loaded"),
    }

    let config = agenda_infra::config::load().context("failed to load configuration")?;
    let bind_addr = config.server.bind_addr.clone();

    let ctx = AppContext::new(config).context("failed to initialise application context")?;
    info!(backend = ctx.backend_name(), "agenda starting");

    let app = build_router(Arc::new(ctx));
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    info!(%bind_addr, "listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
