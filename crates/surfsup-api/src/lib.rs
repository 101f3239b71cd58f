//! Climate API server for the SurfsUp Hawaii dataset.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Route list** (`GET /`) as a small HTML page
//! - **Fixed JSON endpoints** for precipitation, the station directory,
//!   and temperature observations of the reference station
//! - **Date-range endpoints** summarizing reference station temperatures
//!   from a start date, or between a start and an end date
//!
//! # Architecture
//!
//! Handlers are stateless. The only shared value is the
//! [`ConnectionFactory`](surfsup_db::ConnectionFactory) in [`AppState`];
//! each request opens its own read-only connection through it, runs one
//! query, and closes the connection before the [`response`] module shapes
//! the rows into JSON.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
