//! # Upstream Payload Decoding
//!
//! This module is the boundary between the GraphQL data-fetch layer and the
//! shaping pipeline. It mirrors the upstream field shapes exactly (ISO-8601
//! timestamp strings, nested `direction.degrees`, `type` strings on tide
//! rows), parses every timestamp into a `DateTime<FixedOffset>` before any
//! interval arithmetic happens, and applies the one normalization the
//! pipeline depends on: wind gusts are stored as speed *above* base.
//!
//! ## Timezone handling
//!
//! Timestamps arrive as RFC 3339 strings carrying the device-local UTC
//! offset. Parsing preserves that offset, and all later calendar-day math
//! (gap grids, daylight windows, relative labels) runs in it. Nothing in
//! the crate consults the ambient system timezone.
//!
//! ## Error Handling
//!
//! Decoding never papers over malformed input: an unparseable timestamp or
//! invalid JSON propagates as [`ShapeError`] for the presentation layer to
//! surface as a generic chart-unavailable state. Unknown tide `type`
//! strings are the one documented exception; they map to
//! [`TideKind::Prediction`] because charts treat unlabeled rows as plain
//! curve samples.

use crate::{
    ObservedWaterHeight, SolunarDay, SolunarWindow, SunTimes, TideKind, TideSample, WindSample,
};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while decoding upstream payloads into model types.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// A timestamp string was not valid RFC 3339.
    #[error("timestamp parse: {0}")]
    Timestamp(#[from] chrono::ParseError),

    /// The payload was not valid JSON for the expected shape.
    #[error("payload decode: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Upstream tide row: `{ time, height, type }`.
#[derive(Debug, Clone, Deserialize)]
pub struct TidePredictionRaw {
    pub time: String,
    pub height: f32,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Upstream sun record, all fields ISO-8601 strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SunDetailRaw {
    pub sunrise: String,
    pub sunset: String,
    pub dawn: String,
    pub dusk: String,
    pub nautical_dawn: String,
    pub nautical_dusk: String,
}

/// Upstream solunar window: `{ start, end, weight }`.
#[derive(Debug, Clone, Deserialize)]
pub struct SolunarWindowRaw {
    pub start: String,
    pub end: String,
    pub weight: i32,
}

/// Upstream solunar day: `{ majorPeriods, minorPeriods, score }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolunarDetailRaw {
    pub major_periods: Vec<SolunarWindowRaw>,
    pub minor_periods: Vec<SolunarWindowRaw>,
    pub score: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindDirectionRaw {
    pub degrees: f32,
}

/// Upstream wind row. `gusts` is the absolute gust speed here; shaping
/// converts it to gusts-above-base.
#[derive(Debug, Clone, Deserialize)]
pub struct WindDetailRaw {
    pub timestamp: String,
    pub base: f32,
    pub gusts: f32,
    pub direction: WindDirectionRaw,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub rain: Option<f32>,
}

/// Upstream observed water-height row: `{ timestamp, height }`.
#[derive(Debug, Clone, Deserialize)]
pub struct WaterHeightRaw {
    pub timestamp: String,
    pub height: f32,
}

/// Parse one upstream ISO-8601 timestamp, keeping its UTC offset.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, ShapeError> {
    Ok(DateTime::parse_from_rfc3339(raw)?)
}

/// Shape upstream tide rows into [`TideSample`]s.
pub fn shape_tides(rows: &[TidePredictionRaw]) -> Result<Vec<TideSample>, ShapeError> {
    rows.iter()
        .map(|row| {
            Ok(TideSample {
                timestamp: parse_timestamp(&row.time)?,
                height_ft: row.height,
                kind: tide_kind(&row.kind),
            })
        })
        .collect()
}

fn tide_kind(raw: &str) -> TideKind {
    match raw {
        "high" => TideKind::High,
        "low" => TideKind::Low,
        _ => TideKind::Prediction,
    }
}

/// Shape an upstream sun record into [`SunTimes`]. The record's calendar
/// date is taken from the sunrise timestamp.
pub fn shape_sun(raw: &SunDetailRaw) -> Result<SunTimes, ShapeError> {
    let sunrise = parse_timestamp(&raw.sunrise)?;

    Ok(SunTimes {
        date: sunrise.date_naive(),
        nautical_dawn: parse_timestamp(&raw.nautical_dawn)?,
        dawn: parse_timestamp(&raw.dawn)?,
        sunrise,
        sunset: parse_timestamp(&raw.sunset)?,
        dusk: parse_timestamp(&raw.dusk)?,
        nautical_dusk: parse_timestamp(&raw.nautical_dusk)?,
    })
}

/// Shape an upstream solunar day, preserving major/minor list order.
pub fn shape_solunar(raw: &SolunarDetailRaw) -> Result<SolunarDay, ShapeError> {
    Ok(SolunarDay {
        major_periods: shape_windows(&raw.major_periods)?,
        minor_periods: shape_windows(&raw.minor_periods)?,
        score: raw.score,
    })
}

fn shape_windows(raw: &[SolunarWindowRaw]) -> Result<Vec<SolunarWindow>, ShapeError> {
    raw.iter()
        .map(|w| {
            Ok(SolunarWindow {
                start: parse_timestamp(&w.start)?,
                end: parse_timestamp(&w.end)?,
                weight: w.weight,
            })
        })
        .collect()
}

/// Shape upstream wind rows into [`WindSample`]s, converting absolute gust
/// speed to gusts-above-base.
pub fn shape_wind(rows: &[WindDetailRaw]) -> Result<Vec<WindSample>, ShapeError> {
    rows.iter()
        .map(|row| {
            Ok(WindSample {
                timestamp: parse_timestamp(&row.timestamp)?,
                base_speed: row.base,
                gust_speed: row.gusts - row.base,
                direction_degrees: row.direction.degrees,
                temperature: row.temperature,
                rain_mm_per_hour: row.rain,
                synthetic: false,
            })
        })
        .collect()
}

/// Shape upstream observed water-height rows.
pub fn shape_water_heights(rows: &[WaterHeightRaw]) -> Result<Vec<ObservedWaterHeight>, ShapeError> {
    rows.iter()
        .map(|row| {
            Ok(ObservedWaterHeight {
                timestamp: parse_timestamp(&row.timestamp)?,
                height_ft: row.height,
            })
        })
        .collect()
}

/// Decode a JSON array of tide rows straight into samples.
pub fn tides_from_json(payload: &str) -> Result<Vec<TideSample>, ShapeError> {
    let rows: Vec<TidePredictionRaw> = serde_json::from_str(payload)?;
    shape_tides(&rows)
}

/// Decode a JSON array of wind rows straight into samples.
pub fn wind_from_json(payload: &str) -> Result<Vec<WindSample>, ShapeError> {
    let rows: Vec<WindDetailRaw> = serde_json::from_str(payload)?;
    shape_wind(&rows)
}

/// Decode a JSON sun record.
pub fn sun_from_json(payload: &str) -> Result<SunTimes, ShapeError> {
    let raw: SunDetailRaw = serde_json::from_str(payload)?;
    shape_sun(&raw)
}

/// Decode a JSON solunar record.
pub fn solunar_from_json(payload: &str) -> Result<SolunarDay, ShapeError> {
    let raw: SolunarDetailRaw = serde_json::from_str(payload)?;
    shape_solunar(&raw)
}

/// Decode a JSON array of observed water heights.
pub fn water_heights_from_json(payload: &str) -> Result<Vec<ObservedWaterHeight>, ShapeError> {
    let rows: Vec<WaterHeightRaw> = serde_json::from_str(payload)?;
    shape_water_heights(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tide_rows_parse_with_kind_mapping() {
        let payload = r#"[
            {"time": "2024-06-10T04:12:00-04:00", "height": 8.9, "type": "high"},
            {"time": "2024-06-10T10:30:00-04:00", "height": 0.4, "type": "low"},
            {"time": "2024-06-10T11:00:00-04:00", "height": 1.2, "type": "whatever"}
        ]"#;

        let tides = tides_from_json(payload).unwrap();

        assert_eq!(tides.len(), 3);
        assert_eq!(tides[0].kind, TideKind::High);
        assert_eq!(tides[1].kind, TideKind::Low);
        // Unknown type strings become plain curve samples.
        assert_eq!(tides[2].kind, TideKind::Prediction);
        assert_eq!(tides[0].height_ft, 8.9);
    }

    #[test]
    fn wind_rows_convert_gusts_to_above_base() {
        let payload = r#"[{
            "timestamp": "2024-06-10T06:00:00-04:00",
            "base": 8.0,
            "gusts": 13.5,
            "direction": {"degrees": 225.0},
            "temperature": 16.0
        }]"#;

        let wind = wind_from_json(payload).unwrap();

        assert_eq!(wind[0].base_speed, 8.0);
        assert_eq!(wind[0].gust_speed, 5.5);
        assert_eq!(wind[0].direction_degrees, 225.0);
        assert_eq!(wind[0].temperature, Some(16.0));
        // Rain missing from the payload entirely.
        assert_eq!(wind[0].rain_mm_per_hour, None);
        assert!(!wind[0].synthetic);
    }

    #[test]
    fn sun_record_keeps_offsets_and_derives_date() {
        let payload = r#"{
            "sunrise": "2024-06-10T06:00:00-04:00",
            "sunset": "2024-06-10T18:00:00-04:00",
            "dawn": "2024-06-10T05:40:00-04:00",
            "dusk": "2024-06-10T18:20:00-04:00",
            "nauticalDawn": "2024-06-10T05:20:00-04:00",
            "nauticalDusk": "2024-06-10T18:40:00-04:00"
        }"#;

        let sun = sun_from_json(payload).unwrap();

        assert_eq!(sun.date.to_string(), "2024-06-10");
        assert!(sun.nautical_dawn < sun.dawn);
        assert_eq!(sun.sunrise.offset().local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn solunar_record_preserves_window_order() {
        let payload = r#"{
            "majorPeriods": [
                {"start": "2024-06-10T02:00:00-04:00", "end": "2024-06-10T04:00:00-04:00", "weight": 3},
                {"start": "2024-06-10T14:00:00-04:00", "end": "2024-06-10T16:00:00-04:00", "weight": 2}
            ],
            "minorPeriods": [
                {"start": "2024-06-10T08:00:00-04:00", "end": "2024-06-10T09:00:00-04:00", "weight": 1}
            ],
            "score": 3.5
        }"#;

        let day = solunar_from_json(payload).unwrap();

        assert_eq!(day.major_periods.len(), 2);
        assert_eq!(day.minor_periods.len(), 1);
        assert!(day.major_periods[0].start < day.major_periods[1].start);
        assert_eq!(day.major_periods[0].weight, 3);
    }

    #[test]
    fn bad_timestamp_propagates_as_error() {
        let payload = r#"[{"time": "not-a-time", "height": 1.0, "type": "high"}]"#;
        let err = tides_from_json(payload).unwrap_err();
        assert!(matches!(err, ShapeError::Timestamp(_)));
    }

    #[test]
    fn invalid_json_propagates_as_error() {
        let err = wind_from_json("{{nope").unwrap_err();
        assert!(matches!(err, ShapeError::Payload(_)));
    }
}
