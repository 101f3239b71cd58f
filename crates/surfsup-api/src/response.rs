//! Shapes query rows into the JSON bodies each endpoint returns.
//!
//! Aggregates that came back `NULL` stay `None` and serialize as `null`;
//! nothing here special-cases an empty result.

use surfsup_db::{Measurement, PrecipitationRow, Station, TemperatureAggregate};
use surfsup_types::{
    PrecipitationRecord, RangeSummary, StartSummary, StationRecord, StationTag, TemperatureRecord,
    TemperatureStats, TobsResponse, REFERENCE_STATION,
};

/// `[{"date", "station", "precipitation"}, ...]`
pub fn precipitation(rows: Vec<PrecipitationRow>) -> Vec<PrecipitationRecord> {
    rows.into_iter()
        .map(|row| PrecipitationRecord {
            date: row.date,
            station: row.station,
            precipitation: row.precipitation,
        })
        .collect()
}

/// `[{"station", "name"}, ...]`
pub fn stations(rows: Vec<Station>) -> Vec<StationRecord> {
    rows.into_iter()
        .map(|row| StationRecord {
            station: row.station,
            name: row.name,
        })
        .collect()
}

/// `[{"stationid": <reference>}, [{"date", "temperature"}, ...]]`
pub fn tobs(rows: Vec<Measurement>) -> TobsResponse {
    let observations = rows
        .into_iter()
        .map(|row| TemperatureRecord {
            date: row.date,
            temperature: row.tobs,
        })
        .collect();

    TobsResponse(
        StationTag {
            stationid: REFERENCE_STATION.to_owned(),
        },
        observations,
    )
}

/// `[stationid, start, [min, max, avg]]`
pub fn start_summary(start: String, aggregate: TemperatureAggregate) -> StartSummary {
    StartSummary(
        REFERENCE_STATION.to_owned(),
        start,
        TemperatureStats(aggregate.min_temp, aggregate.max_temp, aggregate.avg_temp),
    )
}

/// `[min, max, avg, stationid, start, end]`
pub fn range_summary(start: String, end: String, aggregate: TemperatureAggregate) -> RangeSummary {
    RangeSummary(
        aggregate.min_temp,
        aggregate.max_temp,
        aggregate.avg_temp,
        REFERENCE_STATION.to_owned(),
        start,
        end,
    )
}
