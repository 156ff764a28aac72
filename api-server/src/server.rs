//! Listener setup and graceful shutdown.

use std::future::Future;

use axum::Router;
use tracing::info;

/// Serves `router` on `address` until `shutdown` resolves.
pub async fn serve<F>(address: &str, router: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!(address = %address, "API server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("API server stopped");
    Ok(())
}
