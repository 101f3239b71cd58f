//! Data layer for the SurfsUp climate API (`SQLite`, read-only).
//!
//! The climate database is an existing `SQLite` file with two tables,
//! `station` and `measurement`. This crate declares both tables as plain
//! Rust structs and exposes the handful of read queries the API serves.
//!
//! # Architecture
//!
//! ```text
//! HTTP handler
//!     |
//!     +-- ClimateStore::<query>()
//!             |-- ConnectionFactory::open()    (fresh read-only connection)
//!             |-- one SELECT statement
//!             +-- ConnectionFactory::release()  (always, success or failure)
//! ```
//!
//! There is no pool. Every query gets its own connection, which is closed
//! before the result is handed back.
//!
//! # Modules
//!
//! - [`sqlite`] -- Connection configuration and the per-request factory
//! - [`models`] -- Table models and aggregate result rows
//! - [`climate_store`] -- The read queries behind each endpoint
//! - [`error`] -- Shared error types

pub mod climate_store;
pub mod error;
pub mod models;
pub mod sqlite;

// Re-export primary types for convenience.
pub use climate_store::ClimateStore;
pub use error::DbError;
pub use models::{Measurement, PrecipitationRow, Station, TemperatureAggregate};
pub use sqlite::{ConnectionFactory, SqliteConfig};
