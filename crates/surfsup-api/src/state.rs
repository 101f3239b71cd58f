//! Shared application state for the climate API.

use surfsup_db::ConnectionFactory;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. Holds no connection of its own; handlers open one per
/// request through the factory.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Opens read-only connections to the climate database.
    pub connections: ConnectionFactory,
}

impl AppState {
    /// Create application state around a connection factory.
    pub const fn new(connections: ConnectionFactory) -> Self {
        Self { connections }
    }
}
