//! # Request Metrics
//!
//! Prometheus counters kept in a per-app [`Registry`] and encoded with the
//! text exposition format at `GET /metrics`.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Extension;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

use crate::error::AppError;

/// Shared metrics state backed by a Prometheus registry.
#[derive(Clone)]
pub struct ApiMetrics {
    inner: Arc<Inner>,
}

struct Inner {
    registry: Registry,
    http_requests_total: IntCounter,
    http_errors_total: IntCounter,
}

impl std::fmt::Debug for ApiMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiMetrics")
            .field("requests", &self.requests())
            .field("errors", &self.errors())
            .finish()
    }
}

impl ApiMetrics {
    /// Create a metrics instance with a fresh registry.
    pub fn new() -> Self {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("msme_http_requests_total", "Total HTTP requests")
                .expect("metric can be created");
        let http_errors_total =
            IntCounter::new("msme_http_errors_total", "Total HTTP errors (4xx and 5xx)")
                .expect("metric can be created");

        registry
            .register(Box::new(http_requests_total.clone()))
            .expect("metric can be registered");
        registry
            .register(Box::new(http_errors_total.clone()))
            .expect("metric can be registered");

        Self {
            inner: Arc::new(Inner {
                registry,
                http_requests_total,
                http_errors_total,
            }),
        }
    }

    /// Requests seen so far.
    pub fn requests(&self) -> u64 {
        self.inner.http_requests_total.get()
    }

    /// Responses with a 4xx or 5xx status.
    pub fn errors(&self) -> u64 {
        self.inner.http_errors_total.get()
    }

    fn record(&self, status: StatusCode) {
        self.inner.http_requests_total.inc();
        if status.is_client_error() || status.is_server_error() {
            self.inner.http_errors_total.inc();
        }
    }

    /// Gather the registry and encode it in the Prometheus text format.
    pub fn gather_and_encode(&self) -> Result<String, String> {
        let encoder = TextEncoder::new();
        let metric_families = self.inner.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| format!("failed to encode metrics: {e}"))?;
        String::from_utf8(buffer)
            .map_err(|e| format!("metrics encoding produced invalid UTF-8: {e}"))
    }
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Middleware that increments request and error counters.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let metrics = request.extensions().get::<ApiMetrics>().cloned();

    let response = next.run(request).await;

    if let Some(m) = metrics {
        m.record(response.status());
    }

    response
}

/// GET /metrics
pub async fn metrics_handler(
    Extension(metrics): Extension<ApiMetrics>,
) -> Result<impl IntoResponse, AppError> {
    let body = metrics.gather_and_encode().map_err(AppError::Internal)?;
    Ok((
        [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
        body,
    ))
}
