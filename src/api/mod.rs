//! HTTP surface: the stories route, error responses and the server loop.

pub mod response;
pub mod routes;

pub use routes::{router, STORIES_PATH};

use axum::Router;
use tokio::net::TcpListener;

use crate::errors::StoriesResult;

/// Serve `app` until Ctrl-C
pub async fn serve(listener: TcpListener, app: Router) -> StoriesResult<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            // Keep serving; the process can still be killed
            tracing::error!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await
        }
    }
}
