//! Static models of the climate database tables and query result rows.
//!
//! The schema is fixed and known ahead of time, so the tables are declared
//! here rather than discovered from the live database:
//!
//! ```sql
//! CREATE TABLE station (
//!     id INTEGER NOT NULL PRIMARY KEY,
//!     station TEXT, name TEXT,
//!     latitude FLOAT, longitude FLOAT, elevation FLOAT
//! );
//! CREATE TABLE measurement (
//!     id INTEGER NOT NULL PRIMARY KEY,
//!     station TEXT, date TEXT, prcp FLOAT, tobs FLOAT
//! );
//! ```
//!
//! Every `station` column except `id` is nullable, so the model keeps them
//! as `Option` and a single incomplete row cannot fail the whole query.
//!
//! Uses runtime types rather than compile-time checked queries to avoid
//! requiring the database file during builds.

/// A row from the `station` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Station {
    /// Row ID.
    pub id: i64,
    /// Station identifier (e.g. `USC00519281`).
    pub station: Option<String>,
    /// Human-readable station name.
    pub name: Option<String>,
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,
    /// Elevation in metres.
    pub elevation: Option<f64>,
}

/// A row from the `measurement` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Measurement {
    /// Row ID.
    pub id: i64,
    /// Identifier of the station that recorded this observation.
    pub station: String,
    /// Observation date as stored (`YYYY-MM-DD`).
    pub date: String,
    /// Precipitation, missing on some days.
    pub prcp: Option<f64>,
    /// Observed temperature.
    pub tobs: f64,
}

/// Precipitation summed per `(date, station)` group.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PrecipitationRow {
    /// Observation date.
    pub date: String,
    /// Station identifier.
    pub station: String,
    /// `SUM(prcp)` for the group; `None` when every reading was missing.
    pub precipitation: Option<f64>,
}

/// `MIN`, `MAX` and `AVG` of `tobs` over a filtered set of measurements.
///
/// `SQLite` aggregates over an empty set produce `NULL`, so all three
/// fields are `None` when nothing matched the filter.
#[derive(Debug, Clone, Copy, PartialEq, Default, sqlx::FromRow)]
pub struct TemperatureAggregate {
    /// Lowest observed temperature.
    pub min_temp: Option<f64>,
    /// Highest observed temperature.
    pub max_temp: Option<f64>,
    /// Mean observed temperature.
    pub avg_temp: Option<f64>,
}

impl TemperatureAggregate {
    /// Whether the aggregate was computed over an empty set.
    pub const fn is_empty(&self) -> bool {
        self.min_temp.is_none() && self.max_temp.is_none() && self.avg_temp.is_none()
    }
}
