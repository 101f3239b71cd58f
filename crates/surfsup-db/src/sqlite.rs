//! `SQLite` connection configuration and the per-request connection factory.
//!
//! The climate database is owned by whoever produced it; this service only
//! reads it. Connections are therefore opened with `mode=ro` and the file is
//! never created when missing.

use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

use crate::error::DbError;

/// Default location of the climate database, relative to the working
/// directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://Resources/hawaii.sqlite";

/// Default time to wait on a locked database file, in milliseconds.
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Configuration for opening climate database connections.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// `SQLite` connection URL.
    ///
    /// Format: `sqlite://path/to/file.sqlite`
    pub url: String,
    /// How long a statement waits for a lock held by another process.
    pub busy_timeout: Duration,
}

impl SqliteConfig {
    /// Create a new configuration from a database URL.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }

    /// Set the busy timeout.
    #[must_use]
    pub const fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_URL)
    }
}

/// Opens a fresh read-only connection for each query.
///
/// Built once at startup from a [`SqliteConfig`] and shared by every
/// request. Holds only the parsed connection options, never a live
/// connection.
#[derive(Debug, Clone)]
pub struct ConnectionFactory {
    options: SqliteConnectOptions,
}

impl ConnectionFactory {
    /// Build a factory from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Config`] if the URL cannot be parsed.
    pub fn new(config: &SqliteConfig) -> Result<Self, DbError> {
        let options: SqliteConnectOptions = config
            .url
            .parse()
            .map_err(|e: sqlx::Error| DbError::Config(format!("Invalid database URL: {e}")))?;

        let options = options
            .read_only(true)
            .create_if_missing(false)
            .busy_timeout(config.busy_timeout);

        Ok(Self { options })
    }

    /// Open a new connection to the climate database.
    ///
    /// Pair every call with [`ConnectionFactory::release`].
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the file cannot be opened.
    pub async fn open(&self) -> Result<SqliteConnection, DbError> {
        let conn = self.options.connect().await?;
        tracing::trace!("Opened SQLite connection");
        Ok(conn)
    }

    /// Close a connection obtained from [`ConnectionFactory::open`].
    ///
    /// A failed close is logged and otherwise ignored: the query result
    /// has already been read and the handle is gone either way.
    pub async fn release(conn: SqliteConnection) {
        match conn.close().await {
            Ok(()) => tracing::trace!("Closed SQLite connection"),
            Err(e) => tracing::warn!(error = %e, "Failed to close SQLite connection cleanly"),
        }
    }

    /// Open and immediately close a connection to confirm the database is
    /// reachable.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the file cannot be opened.
    pub async fn verify(&self) -> Result<(), DbError> {
        let conn = self.open().await?;
        Self::release(conn).await;
        tracing::info!(
            filename = %self.options.get_filename().display(),
            "SQLite climate database reachable"
        );
        Ok(())
    }
}
