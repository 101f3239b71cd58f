//! JSON response records for the climate endpoints.
//!
//! The object-shaped records serialize with named keys. The summary
//! types are tuple structs so that serde emits them as positional JSON
//! arrays, which is the wire shape existing clients already parse.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Object records
// ---------------------------------------------------------------------------

/// Total precipitation recorded by one station on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PrecipitationRecord {
    /// Observation date (`YYYY-MM-DD`).
    pub date: String,
    /// Station identifier.
    pub station: String,
    /// Summed precipitation, `null` when every reading for the group was
    /// missing.
    pub precipitation: Option<f64>,
}

/// One entry of the station directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StationRecord {
    /// Station identifier, `null` when the row has none.
    pub station: Option<String>,
    /// Human-readable station name, `null` when the row has none.
    pub name: Option<String>,
}

/// A dated temperature observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TemperatureRecord {
    /// Observation date (`YYYY-MM-DD`).
    pub date: String,
    /// Observed temperature.
    pub temperature: f64,
}

/// Single-key record naming the station a payload belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StationTag {
    /// Station identifier.
    pub stationid: String,
}

// ---------------------------------------------------------------------------
// Positional arrays
// ---------------------------------------------------------------------------

/// `[min, max, avg]` temperature over a filtered set of observations.
///
/// All three are `null` when no observation matched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TemperatureStats(pub Option<f64>, pub Option<f64>, pub Option<f64>);

/// `[{"stationid": ...}, [{"date", "temperature"}, ...]]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TobsResponse(pub StationTag, pub Vec<TemperatureRecord>);

/// `[stationid, start, [min, max, avg]]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StartSummary(pub String, pub String, pub TemperatureStats);

/// `[min, max, avg, stationid, start, end]`
///
/// The statistics come first here, unlike [`StartSummary`]. Both orders
/// are part of the published contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RangeSummary(
    pub Option<f64>,
    pub Option<f64>,
    pub Option<f64>,
    pub String,
    pub String,
    pub String,
);
