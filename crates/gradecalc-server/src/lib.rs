//! gradecalc-server — The web form front end.
//!
//! Serves a single page: `GET /` shows the empty form, `POST /` validates
//! the submission and answers with either the results or the form again,
//! pre-filled and carrying the validation message.

pub mod config;
pub mod routes;

use std::future::Future;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

pub use config::{load_config_from, GradecalcConfig};
pub use routes::router;

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: GradecalcConfig) -> Result<()> {
    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    run(listener, &config, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` completes.
pub async fn run<F>(listener: TcpListener, config: &GradecalcConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("gradecalc listening on http://{addr}");

    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    tracing::info!("gradecalc stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
