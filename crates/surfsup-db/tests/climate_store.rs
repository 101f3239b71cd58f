//! Integration tests for the `surfsup-db` query layer.
//!
//! Each test builds a throwaway `SQLite` file in a temporary directory with
//! the fixed `station` / `measurement` schema, then reads it back through
//! the read-only [`ConnectionFactory`].

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::float_cmp,
    clippy::indexing_slicing,
    clippy::missing_panics_doc
)]

use std::collections::BTreeSet;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use surfsup_db::{ClimateStore, ConnectionFactory, DbError, SqliteConfig, TemperatureAggregate};
use surfsup_types::REFERENCE_STATION;
use tempfile::TempDir;

const SCHEMA: &str = r"
CREATE TABLE station (
    id INTEGER NOT NULL PRIMARY KEY,
    station TEXT,
    name TEXT,
    latitude FLOAT,
    longitude FLOAT,
    elevation FLOAT
);
CREATE TABLE measurement (
    id INTEGER NOT NULL PRIMARY KEY,
    station TEXT,
    date TEXT,
    prcp FLOAT,
    tobs FLOAT
);
";

const SEED: &str = r"
INSERT INTO station (station, name, latitude, longitude, elevation) VALUES
    ('USC00519397', 'WAIKIKI 717.2, HI US', 21.2716, -157.8168, 3.0),
    ('USC00519281', 'WAIHEE 837.5, HI US', 21.45167, -157.84889, 32.9),
    ('USC00516128', 'MANOA LYON ARBO 785.2, HI US', 21.3331, -157.8025, 152.4);
INSERT INTO measurement (station, date, prcp, tobs) VALUES
    ('USC00519281', '2017-08-18', 0.06, 79.0),
    ('USC00519281', '2017-08-20', 0.01, 79.0),
    ('USC00519281', '2017-08-23', 0.45, 81.0),
    ('USC00519397', '2017-08-20', 0.0, 81.0),
    ('USC00519397', '2017-08-20', 0.02, 80.0),
    ('USC00519397', '2017-08-23', NULL, 82.0),
    ('USC00516128', '2017-08-23', NULL, 76.0);
";

/// A seeded database file and a factory pointing at it.
struct Fixture {
    _dir: TempDir,
    factory: ConnectionFactory,
}

async fn setup(seed: bool) -> Fixture {
    setup_with(if seed { Some(SEED) } else { None }).await
}

async fn setup_with(seed: Option<&str>) -> Fixture {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("hawaii.sqlite");

    let mut conn = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("Failed to create SQLite file");
    sqlx::raw_sql(SCHEMA)
        .execute(&mut conn)
        .await
        .expect("Failed to create schema");
    if let Some(seed) = seed {
        sqlx::raw_sql(seed)
            .execute(&mut conn)
            .await
            .expect("Failed to seed data");
    }
    conn.close().await.expect("Failed to close setup connection");

    let url = format!("sqlite://{}", path.display());
    let factory = ConnectionFactory::new(&SqliteConfig::new(&url)).expect("Invalid URL");

    Fixture { _dir: dir, factory }
}

// =============================================================================
// Precipitation
// =============================================================================

#[tokio::test]
async fn precipitation_groups_by_date_and_station() {
    let fixture = setup(true).await;
    let rows = ClimateStore::new(&fixture.factory)
        .precipitation()
        .await
        .unwrap();

    // 7 measurements collapse into 6 (date, station) groups.
    assert_eq!(rows.len(), 6);

    let keys: BTreeSet<(String, String)> = rows
        .iter()
        .map(|r| (r.date.clone(), r.station.clone()))
        .collect();
    assert_eq!(keys.len(), rows.len());

    let waikiki = rows
        .iter()
        .find(|r| r.date == "2017-08-20" && r.station == "USC00519397")
        .unwrap();
    assert!((waikiki.precipitation.unwrap() - 0.02).abs() < 1e-9);
}

#[tokio::test]
async fn precipitation_sum_of_missing_readings_is_none() {
    let fixture = setup(true).await;
    let rows = ClimateStore::new(&fixture.factory)
        .precipitation()
        .await
        .unwrap();

    let manoa = rows
        .iter()
        .find(|r| r.station == "USC00516128")
        .unwrap();
    assert_eq!(manoa.precipitation, None);
}

#[tokio::test]
async fn precipitation_is_ordered_by_date_then_station() {
    let fixture = setup(true).await;
    let rows = ClimateStore::new(&fixture.factory)
        .precipitation()
        .await
        .unwrap();

    let keys: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.date.as_str(), r.station.as_str()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}

// =============================================================================
// Stations
// =============================================================================

#[tokio::test]
async fn stations_lists_every_station_once() {
    let fixture = setup(true).await;
    let stations = ClimateStore::new(&fixture.factory).stations().await.unwrap();

    assert_eq!(stations.len(), 3);
    let ids: BTreeSet<&str> = stations.iter().filter_map(|s| s.station.as_deref()).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(stations[1].name.as_deref(), Some("WAIHEE 837.5, HI US"));
    assert_eq!(stations[1].elevation, Some(32.9));
}

#[tokio::test]
async fn stations_with_null_columns_still_load() {
    let fixture = setup_with(Some(
        r"
INSERT INTO station (station, name) VALUES
    ('USC00519397', 'WAIKIKI 717.2, HI US'),
    ('USC00511918', NULL),
    (NULL, 'UNNAMED GAUGE');
",
    ))
    .await;
    let stations = ClimateStore::new(&fixture.factory).stations().await.unwrap();

    assert_eq!(stations.len(), 3);
    assert_eq!(stations[1].station.as_deref(), Some("USC00511918"));
    assert_eq!(stations[1].name, None);
    assert_eq!(stations[2].station, None);
    assert_eq!(stations[2].elevation, None);
}

#[tokio::test]
async fn stations_on_empty_store_is_empty() {
    let fixture = setup(false).await;
    let stations = ClimateStore::new(&fixture.factory).stations().await.unwrap();
    assert!(stations.is_empty());
}

// =============================================================================
// Temperature observations
// =============================================================================

#[tokio::test]
async fn tobs_only_returns_reference_station() {
    let fixture = setup(true).await;
    let rows = ClimateStore::new(&fixture.factory).tobs().await.unwrap();

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|m| m.station == REFERENCE_STATION));
    assert_eq!(rows[0].date, "2017-08-18");
    assert_eq!(rows[2].tobs, 81.0);
}

// =============================================================================
// Temperature summaries
// =============================================================================

#[tokio::test]
async fn summary_between_matches_known_scenario() {
    let fixture = setup(true).await;
    let aggregate = ClimateStore::new(&fixture.factory)
        .summary_between("2017-08-20", "2017-08-23")
        .await
        .unwrap();

    assert_eq!(aggregate.min_temp, Some(79.0));
    assert_eq!(aggregate.max_temp, Some(81.0));
    assert_eq!(aggregate.avg_temp, Some(80.0));
}

#[tokio::test]
async fn summary_between_with_reversed_bounds_is_empty() {
    let fixture = setup(true).await;
    let aggregate = ClimateStore::new(&fixture.factory)
        .summary_between("2017-08-23", "2017-08-20")
        .await
        .unwrap();

    assert!(aggregate.is_empty());
    assert_eq!(aggregate, TemperatureAggregate::default());
}

#[tokio::test]
async fn summary_from_includes_start_date() {
    let fixture = setup(true).await;
    let aggregate = ClimateStore::new(&fixture.factory)
        .summary_from("2017-08-23")
        .await
        .unwrap();

    assert_eq!(aggregate.min_temp, Some(81.0));
    assert_eq!(aggregate.max_temp, Some(81.0));
    assert_eq!(aggregate.avg_temp, Some(81.0));
}

#[tokio::test]
async fn summary_from_ignores_other_stations() {
    let fixture = setup(true).await;
    let aggregate = ClimateStore::new(&fixture.factory)
        .summary_from("2017-01-01")
        .await
        .unwrap();

    // USC00519397 recorded 82 but is not the reference station.
    assert_eq!(aggregate.max_temp, Some(81.0));
    assert_eq!(aggregate.min_temp, Some(79.0));
}

#[tokio::test]
async fn summary_from_compares_dates_as_text() {
    let fixture = setup(true).await;
    let store = ClimateStore::new(&fixture.factory);

    // "z" sorts after every digit, so nothing matches.
    let after_everything = store.summary_from("zzzz").await.unwrap();
    assert!(after_everything.is_empty());

    // "2017-8-1" sorts after "2017-08-23" because '8' > '0'.
    let unpadded = store.summary_from("2017-8-1").await.unwrap();
    assert!(unpadded.is_empty());
}

// =============================================================================
// Failure and repeatability
// =============================================================================

#[tokio::test]
async fn missing_tables_surface_as_sqlite_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.sqlite");
    let conn = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .connect()
        .await
        .unwrap();
    conn.close().await.unwrap();

    let url = format!("sqlite://{}", path.display());
    let factory = ConnectionFactory::new(&SqliteConfig::new(&url)).unwrap();
    let result = ClimateStore::new(&factory).stations().await;

    assert!(matches!(result, Err(DbError::Sqlite(_))));
}

#[tokio::test]
async fn repeated_queries_return_identical_rows() {
    let fixture = setup(true).await;
    let store = ClimateStore::new(&fixture.factory);

    let first = store.precipitation().await.unwrap();
    let second = store.precipitation().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn verify_succeeds_against_existing_file() {
    let fixture = setup(false).await;
    assert!(fixture.factory.verify().await.is_ok());
}
