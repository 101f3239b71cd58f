//! Error types for the server binary.
//!
//! [`StartupError`] is the top-level error type that wraps all possible
//! failure modes between process start and the server exiting.

/// Top-level error for the server binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// The climate database could not be opened.
    #[error("database error: {source}")]
    Database {
        /// The underlying data layer error.
        #[from]
        source: surfsup_db::DbError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: surfsup_api::ServerError,
    },
}
