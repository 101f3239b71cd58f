//! REST API endpoint handlers for the climate API.
//!
//! Every data handler follows the same three steps: open a connection via
//! [`ClimateStore`], run one query, and pass the rows to the
//! [`response`](crate::response) formatter.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | HTML list of available routes |
//! | `GET` | `/api/v1.0/precipitation` | Precipitation per date and station |
//! | `GET` | `/api/v1.0/stations` | Station directory |
//! | `GET` | `/api/v1.0/tobs` | Reference station temperature observations |
//! | `GET` | `/api/v1.0/{start}` | Temperature summary from `start` onward |
//! | `GET` | `/api/v1.0/{start}/{end}` | Temperature summary within `[start, end]` |

use std::sync::Arc;

use axum::Json;
use axum::extract::{OriginalUri, Path, State};
use axum::response::{Html, IntoResponse};
use surfsup_db::ClimateStore;

use crate::error::ApiError;
use crate::response;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- route list
// ---------------------------------------------------------------------------

/// Serve a static HTML page listing the available API routes.
pub async fn index() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>SurfsUp Climate API</title>
    <style>
        body {
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }
        h1 { color: #58a6ff; margin-bottom: 0.25rem; }
        .subtitle { color: #8b949e; margin-top: 0; }
        a { color: #58a6ff; text-decoration: none; }
        a:hover { text-decoration: underline; }
        ul { list-style: none; padding: 0; }
        li { padding: 0.3rem 0; }
        li::before { content: "GET "; color: #7ee787; font-weight: bold; }
    </style>
</head>
<body>
    <h1>SurfsUp Climate API</h1>
    <p class="subtitle">Hawaii precipitation and temperature observations</p>

    <h2>Available Routes</h2>
    <ul>
        <li><a href="/api/v1.0/precipitation">/api/v1.0/precipitation</a> -- Precipitation per date and station</li>
        <li><a href="/api/v1.0/stations">/api/v1.0/stations</a> -- Station directory</li>
        <li><a href="/api/v1.0/tobs">/api/v1.0/tobs</a> -- Temperature observations of the most active station</li>
        <li>/api/v1.0/{start} -- Min, max and average temperature from a start date (YYYY-MM-DD)</li>
        <li>/api/v1.0/{start}/{end} -- Min, max and average temperature between two dates (YYYY-MM-DD)</li>
    </ul>
</body>
</html>"#,
    )
}

// ---------------------------------------------------------------------------
// GET /api/v1.0/precipitation
// ---------------------------------------------------------------------------

/// Precipitation summed per date and station.
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = ClimateStore::new(&state.connections).precipitation().await?;
    Ok(Json(response::precipitation(rows)))
}

// ---------------------------------------------------------------------------
// GET /api/v1.0/stations
// ---------------------------------------------------------------------------

/// Every station with its name.
pub async fn stations(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let rows = ClimateStore::new(&state.connections).stations().await?;
    Ok(Json(response::stations(rows)))
}

// ---------------------------------------------------------------------------
// GET /api/v1.0/tobs
// ---------------------------------------------------------------------------

/// Dated temperature observations of the reference station.
pub async fn tobs(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let rows = ClimateStore::new(&state.connections).tobs().await?;
    Ok(Json(response::tobs(rows)))
}

// ---------------------------------------------------------------------------
// GET /api/v1.0/{start} and /api/v1.0/{start}/{end}
// ---------------------------------------------------------------------------

/// Min, max and average temperature of the reference station on or after
/// `start`.
///
/// `start` is not validated; a value that is not a zero-padded
/// `YYYY-MM-DD` date just changes which rows compare as later.
pub async fn summary_from(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let aggregate = ClimateStore::new(&state.connections)
        .summary_from(&start)
        .await?;
    Ok(Json(response::start_summary(start, aggregate)))
}

/// Min, max and average temperature of the reference station between
/// `start` and `end`, inclusive.
pub async fn summary_between(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let aggregate = ClimateStore::new(&state.connections)
        .summary_between(&start, &end)
        .await?;
    Ok(Json(response::range_summary(start, end, aggregate)))
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// JSON 404 for any path without a route.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
