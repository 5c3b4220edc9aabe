//! # Middleware Stack
//!
//! - [`metrics`]: request and error counters, exposed at `/metrics`.
//!
//! Request tracing uses `tower_http::trace::TraceLayer` directly in
//! [`crate::app`].

pub mod metrics;
