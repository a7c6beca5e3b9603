mod fallback;
mod health;
mod json;
mod recover;

use std::net::SocketAddr;

use axum::{Extension, Router};
use faultline_config::Config;
use faultline_responder::Responder;
use tower_http::trace::TraceLayer;

pub use json::ApiJson;
pub use recover::HandlerPanic;

/// Assembled server with the caller's routes and error handling
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server around the caller's API routes
    ///
    /// Unmatched paths, unsupported methods, and panicking handlers are all
    /// answered through `responder`. Handlers can reach the same responder
    /// via `Extension<Responder>`.
    pub fn new(config: Config, api: Router, responder: Responder) -> Self {
        let listen_address = config.server.listen_address;

        let mut app = api;

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Fallbacks must be registered after every route they cover
        app = app
            .fallback(fallback::not_found)
            .method_not_allowed_fallback(fallback::method_not_allowed);

        // Apply middleware layers (innermost first)

        // Panic recovery (innermost, reads the responder extension added below)
        app = app.layer(axum::middleware::from_fn(recover::recover_middleware));

        // Responder for fallbacks, extractors, and handlers
        app = app.layer(Extension(responder));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Self { router: app, listen_address }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Override the configured listen address
    #[must_use]
    pub fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
