//! Test server wrapper that starts faultline on a random port

use std::net::SocketAddr;
use std::sync::Arc;

use faultline_config::Config;
use faultline_responder::{LogRecord, MemoryLog, Responder};
use faultline_server::Server;
use tokio_util::sync::CancellationToken;

use super::api;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
    log: Arc<MemoryLog>,
}

impl TestServer {
    /// Start a test server serving the sample API
    ///
    /// Binds to port 0 for automatic port assignment. Operator log records
    /// are captured in memory instead of going to `tracing`.
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let log = Arc::new(MemoryLog::default());
        let server = Server::new(config, api::router(), Responder::new(log.clone()));
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self {
            addr,
            shutdown,
            client,
            log,
        })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Operator log records written so far
    pub fn log_records(&self) -> Vec<LogRecord> {
        self.log.records()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
