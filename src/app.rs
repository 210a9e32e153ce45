use crate::{modules, types::Context};
use axum::{extract::DefaultBodyLimit, Router};
use std::{future::Future, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace;

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

pub fn get_router(ctx: Arc<Context>) -> Router {
    Router::new()
        .merge(modules::get_router())
        .with_state(ctx)
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(trace::TraceLayer::new_for_http())
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = get_router(ctx.clone());
        Self { ctx, router }
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let listener = TcpListener::bind(format!("{}:{}", self.ctx.app.host, self.ctx.app.port))
            .await?;

        tracing::info!(
            "Server is running at http://{}:{}",
            self.ctx.app.host,
            self.ctx.app.port
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        self.ctx.store.close().await;

        Ok(())
    }
}

/// Resolves when `signal` fires. A listener that cannot be installed never
/// resolves, so it cannot trigger a shutdown by itself.
async fn until_signal(name: &str, signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(err) = signal.await {
        tracing::error!("Failed to listen for {}: {}", name, err);
        std::future::pending::<()>().await;
    }
}

async fn shutdown_signal() {
    let ctrl_c = until_signal("Ctrl+C", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::warn!("Received SIGTERM, shutting down"),
    }
}
