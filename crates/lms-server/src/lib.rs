mod cors;
mod health;
mod panic;
mod rejection;
mod root;
mod security_headers;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use lms_config::Config;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub use security_headers::SECURITY_HEADERS;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// `api` holds the application routes and is mounted under `/api`.
    /// Every error response is an envelope, including extractor rejections
    /// and handler panics.
    ///
    /// # Errors
    ///
    /// Returns an error if the CORS configuration contains invalid values
    pub fn new(config: &Config, api: Router) -> anyhow::Result<Self> {
        let listen_address = config.server.listen_address_or_default();

        let mut app = Router::new().route("/", get(root::root_handler));

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(health::health_handler));
        }

        app = app
            .nest("/api", api)
            .fallback(root::fallback_handler)
            .method_not_allowed_fallback(rejection::method_not_allowed_handler);

        // Apply middleware layers (innermost first)

        // Panics become the generic failure envelope; innermost so the
        // response still passes through every layer below
        app = app.layer(CatchPanicLayer::custom(panic::handle_panic));

        // Framework rejections (extractors, unserved methods) as envelopes
        app = app.layer(axum::middleware::map_response(rejection::envelope_rejections));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // Compression
        if config.server.compression {
            app = app.layer(CompressionLayer::new());
        }

        // Security headers
        if config.server.security_headers {
            app = app.layer(axum::middleware::from_fn(security_headers::security_headers_middleware));
        }

        // CORS
        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config)?);
        }

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
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
