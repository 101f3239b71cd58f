//! Read queries behind the climate endpoints.
//!
//! Every operation opens its own connection through the
//! [`ConnectionFactory`], runs exactly one statement, and releases the
//! connection before inspecting the result. Grouping and aggregation run
//! inside `SQLite`; the measurement table is never loaded whole.
//!
//! Date filters compare the stored `TEXT` dates lexicographically. That is
//! only meaningful because dates are stored zero-padded as `YYYY-MM-DD`.
//! Caller-supplied bounds are bound verbatim and never parsed, so a
//! malformed bound simply matches nothing (or everything).

use surfsup_types::REFERENCE_STATION;

use crate::error::DbError;
use crate::models::{Measurement, PrecipitationRow, Station, TemperatureAggregate};
use crate::sqlite::ConnectionFactory;

const SELECT_PRECIPITATION: &str = r"SELECT date, station, SUM(prcp) AS precipitation
  FROM measurement
  GROUP BY date, station
  ORDER BY date, station";

const SELECT_STATIONS: &str = r"SELECT id, station, name, latitude, longitude, elevation
  FROM station
  ORDER BY id";

const SELECT_STATION_MEASUREMENTS: &str = r"SELECT id, station, date, prcp, tobs
  FROM measurement
  WHERE station = ?1
  ORDER BY id";

const SUMMARIZE_FROM: &str = r"SELECT MIN(tobs) AS min_temp, MAX(tobs) AS max_temp, AVG(tobs) AS avg_temp
  FROM measurement
  WHERE station = ?1 AND date >= ?2";

const SUMMARIZE_BETWEEN: &str = r"SELECT MIN(tobs) AS min_temp, MAX(tobs) AS max_temp, AVG(tobs) AS avg_temp
  FROM measurement
  WHERE station = ?1 AND date >= ?2 AND date <= ?3";

/// Read operations on the `station` and `measurement` tables.
pub struct ClimateStore<'a> {
    connections: &'a ConnectionFactory,
}

impl<'a> ClimateStore<'a> {
    /// Create a new climate store bound to a connection factory.
    pub const fn new(connections: &'a ConnectionFactory) -> Self {
        Self { connections }
    }

    /// Sum precipitation per `(date, station)` pair.
    ///
    /// Each pair appears at most once in the result.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the connection or query fails.
    pub async fn precipitation(&self) -> Result<Vec<PrecipitationRow>, DbError> {
        let mut conn = self.connections.open().await?;
        let result = sqlx::query_as::<_, PrecipitationRow>(SELECT_PRECIPITATION)
            .fetch_all(&mut conn)
            .await;
        ConnectionFactory::release(conn).await;

        let rows = result?;
        tracing::debug!(count = rows.len(), "Queried precipitation totals");
        Ok(rows)
    }

    /// List every station.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the connection or query fails.
    pub async fn stations(&self) -> Result<Vec<Station>, DbError> {
        let mut conn = self.connections.open().await?;
        let result = sqlx::query_as::<_, Station>(SELECT_STATIONS)
            .fetch_all(&mut conn)
            .await;
        ConnectionFactory::release(conn).await;

        let rows = result?;
        tracing::debug!(count = rows.len(), "Queried stations");
        Ok(rows)
    }

    /// All measurements recorded by [`REFERENCE_STATION`].
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the connection or query fails.
    pub async fn tobs(&self) -> Result<Vec<Measurement>, DbError> {
        let mut conn = self.connections.open().await?;
        let result = sqlx::query_as::<_, Measurement>(SELECT_STATION_MEASUREMENTS)
            .bind(REFERENCE_STATION)
            .fetch_all(&mut conn)
            .await;
        ConnectionFactory::release(conn).await;

        let rows = result?;
        tracing::debug!(
            station = REFERENCE_STATION,
            count = rows.len(),
            "Queried temperature observations"
        );
        Ok(rows)
    }

    /// Temperature statistics for [`REFERENCE_STATION`] on or after `start`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the connection or query fails.
    pub async fn summary_from(&self, start: &str) -> Result<TemperatureAggregate, DbError> {
        let mut conn = self.connections.open().await?;
        let result = sqlx::query_as::<_, TemperatureAggregate>(SUMMARIZE_FROM)
            .bind(REFERENCE_STATION)
            .bind(start)
            .fetch_one(&mut conn)
            .await;
        ConnectionFactory::release(conn).await;

        let aggregate = result?;
        tracing::debug!(start, empty = aggregate.is_empty(), "Summarized temperatures");
        Ok(aggregate)
    }

    /// Temperature statistics for [`REFERENCE_STATION`] between `start` and
    /// `end`, both inclusive.
    ///
    /// A `start` that sorts after `end` yields an empty aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the connection or query fails.
    pub async fn summary_between(
        &self,
        start: &str,
        end: &str,
    ) -> Result<TemperatureAggregate, DbError> {
        let mut conn = self.connections.open().await?;
        let result = sqlx::query_as::<_, TemperatureAggregate>(SUMMARIZE_BETWEEN)
            .bind(REFERENCE_STATION)
            .bind(start)
            .bind(end)
            .fetch_one(&mut conn)
            .await;
        ConnectionFactory::release(conn).await;

        let aggregate = result?;
        tracing::debug!(
            start,
            end,
            empty = aggregate.is_empty(),
            "Summarized temperatures"
        );
        Ok(aggregate)
    }
}
