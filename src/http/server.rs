//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the callback handler
//! - Wire up middleware (tracing)
//! - Serve on a caller-provided listener
//! - Drain in-flight requests on shutdown, optionally bounded by a deadline

use std::future::IntoFuture;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, Notify};
use tower_http::trace::TraceLayer;

use crate::config::ReceiverConfig;
use crate::console::Console;
use crate::http::callback::CallbackFields;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub console: Console,
}

/// HTTP server for the beacon receiver.
///
/// An explicit per-process object rather than process-wide globals, so tests
/// can run several independent instances side by side.
pub struct HttpServer {
    router: Router,
    config: ReceiverConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration, logging
    /// callbacks to standard output.
    pub fn new(config: ReceiverConfig) -> Self {
        let console = Console::stdout(config.console.color);
        Self::with_console(config, console)
    }

    /// Create a server that logs callbacks to the given console sink.
    pub fn with_console(config: ReceiverConfig, console: Console) -> Self {
        let state = AppState { console };
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Only `/` is registered; every other path gets Axum's default 404.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", any(callback_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown receiver fires, then drain in-flight requests.
    ///
    /// Returns `Ok(())` on intentional shutdown, including a drain that hit
    /// the configured deadline. Bind and accept-loop failures propagate.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "Beacon receiver listening"
        );

        let draining = Arc::new(Notify::new());
        let drain_started = draining.clone();
        let serve = axum::serve(listener, self.router).with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
            tracing::info!("Shutdown signal received, draining in-flight requests");
            drain_started.notify_one();
        });

        match self.config.shutdown.drain_timeout() {
            None => serve.await?,
            Some(limit) => {
                let serve = serve.into_future();
                let deadline = async {
                    draining.notified().await;
                    tokio::time::sleep(limit).await;
                };
                tokio::select! {
                    result = serve => result?,
                    _ = deadline => {
                        tracing::warn!(
                            timeout_secs = limit.as_secs(),
                            "Drain deadline expired, aborting remaining requests"
                        );
                    }
                }
            }
        }

        tracing::info!("Beacon receiver stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ReceiverConfig {
        &self.config
    }
}

/// Callback handler for `/`.
///
/// Accepts any method, extracts `hostname` and `username` from the query
/// string (absent or malformed queries yield empty fields), writes the
/// callback block to the console, and responds 200 with an empty body.
async fn callback_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> StatusCode {
    let fields = uri
        .query()
        .map(CallbackFields::from_query)
        .unwrap_or_default();

    tracing::debug!(
        method = %method,
        uri = %uri,
        "Callback received"
    );

    state.console.log_callback(&method, &uri, &fields);

    StatusCode::OK
}
