//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the three service routes
//! - Wire up middleware (request ID, tracing, CORS)
//! - Serve on a bound listener until shutdown
//! - Run the metrics upkeep task alongside the server

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::BuildError;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers::{export_metrics, get_weather, health_check, not_found};
use crate::http::middleware::{cors_middleware, CorsError, CorsPolicy};
use crate::http::request::request_span;
use crate::lifecycle::shutdown;
use crate::observability::ServiceMetrics;
use crate::weather::{Clock, ClockSynthesizer, ReadingSynthesizer, SystemClock};

/// Errors raised while assembling the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("metrics setup failed: {0}")]
    Metrics(#[from] BuildError),

    #[error("invalid CORS policy: {0}")]
    Cors(#[from] CorsError),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub synthesizer: Arc<dyn ReadingSynthesizer>,
    pub clock: Arc<dyn Clock>,
    pub metrics: Arc<ServiceMetrics>,
    pub service_name: Arc<str>,
    pub max_location_bytes: usize,
}

/// HTTP server for the weather service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
    metrics: Arc<ServiceMetrics>,
}

impl HttpServer {
    /// Create a server reading the system clock.
    pub fn new(config: ServiceConfig) -> Result<Self, ServerError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a server whose readings and health timestamps come from `clock`.
    pub fn with_clock(config: ServiceConfig, clock: Arc<dyn Clock>) -> Result<Self, ServerError> {
        let synthesizer = Arc::new(ClockSynthesizer::new(clock.clone(), config.weather.source.clone()));
        Self::with_parts(config, clock, synthesizer)
    }

    /// Create a server from explicit collaborators.
    pub fn with_parts(
        config: ServiceConfig,
        clock: Arc<dyn Clock>,
        synthesizer: Arc<dyn ReadingSynthesizer>,
    ) -> Result<Self, ServerError> {
        let metrics = Arc::new(ServiceMetrics::new()?);
        let cors = Arc::new(CorsPolicy::from_config(&config.cors)?);

        let state = AppState {
            synthesizer,
            clock,
            metrics: metrics.clone(),
            service_name: Arc::from(config.observability.service_name.as_str()),
            max_location_bytes: config.weather.max_location_bytes,
        };

        let router = build_router(state, cors);
        Ok(Self {
            router,
            config,
            metrics,
        })
    }

    /// A handle to the router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn metrics(&self) -> &Arc<ServiceMetrics> {
        &self.metrics
    }

    /// Serve on `listener` until a shutdown notice arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let upkeep_every = Duration::from_secs(self.config.observability.upkeep_interval_secs);
        let upkeep = self.metrics.spawn_upkeep(upkeep_every, shutdown_rx.resubscribe());

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown::wait(shutdown_rx).await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        upkeep.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: AppState, cors: Arc<CorsPolicy>) -> Router {
    Router::new()
        .route("/weather/{location}", get(get_weather))
        .route("/health", get(health_check))
        .route("/metrics", get(export_metrics))
        .fallback(not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::from_fn_with_state(cors, cors_middleware)),
        )
}
