//! Axum router construction for the climate API.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the climate API.
///
/// The router includes:
/// - `GET /` -- route list
/// - `GET /api/v1.0/precipitation` -- precipitation per date and station
/// - `GET /api/v1.0/stations` -- station directory
/// - `GET /api/v1.0/tobs` -- reference station temperatures
/// - `GET /api/v1.0/{start}` -- temperature summary from `start`
/// - `GET /api/v1.0/{start}/{end}` -- temperature summary within a range
///
/// The three fixed `/api/v1.0/*` routes take priority over `{start}`.
/// Other methods on these paths get `405 Method Not Allowed`; unknown
/// paths get a JSON 404. CORS allows any origin since the data is public
/// and read-only.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Route list
        .route("/", get(handlers::index))
        // Fixed endpoints
        .route("/api/v1.0/precipitation", get(handlers::precipitation))
        .route("/api/v1.0/stations", get(handlers::stations))
        .route("/api/v1.0/tobs", get(handlers::tobs))
        // Date-range summaries
        .route("/api/v1.0/{start}", get(handlers::summary_from))
        .route("/api/v1.0/{start}/{end}", get(handlers::summary_between))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
