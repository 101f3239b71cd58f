//! Shared type definitions for the SurfsUp climate API.
//!
//! This crate holds the reference station constant and the JSON record
//! shapes returned by every endpoint. The record types flow downstream to
//! `TypeScript` via `ts-rs` for dashboard clients.
//!
//! # Modules
//!
//! - [`records`] -- Response records and the positional summary arrays

pub mod records;

pub use records::{
    PrecipitationRecord, RangeSummary, StartSummary, StationRecord, StationTag, TemperatureRecord,
    TemperatureStats, TobsResponse,
};

/// Identifier of the most active station in the Hawaii dataset.
///
/// The `tobs` endpoint and both temperature summaries filter on this
/// station. It is fixed rather than computed from the data.
pub const REFERENCE_STATION: &str = "USC00519281";
