//! # Marine Forecast Data-Shaping Core
//!
//! This library implements the transform pipeline that turns raw marine
//! time-series observations (tide predictions, sun/moon times, solunar
//! feeding-period windows, wind/temperature/rain series, observed water
//! heights) into the derived datasets consumed by chart-rendering code.
//!
//! ## Design Philosophy
//!
//! ### Pure transforms
//! Every operation in this crate is a pure, synchronous function over
//! immutable input records. Nothing here performs I/O, reads the wall clock,
//! or holds state across calls: "today" and chart constants are always
//! explicit parameters. Functions are safe to invoke concurrently and to
//! memoize by value.
//!
//! ### Sentinel discipline
//! "Missing data" degrades to explicit sentinels rather than magnitudes, so
//! presentation code can distinguish "zero" from "absent":
//! - `Option<f32>`: no temperature readings (never `NaN`, never `0`)
//! - `f32::INFINITY` / `f32::NEG_INFINITY`: no min/max wind observed
//! - absent rain counts as `0.0` toward totals
//!
//! ### Data Flow
//! 1. [`wire`] decodes upstream payloads into the model types below
//! 2. [`gap_fill`], [`tide_bounds`], [`daylight`], [`solunar`] each derive a
//!    day-scoped dataset independently
//! 3. [`wind_buckets`] reduces the gap-filled wind series into four labeled
//!    6-hour buckets for compact display
//!
//! ## Core Types
//!
//! The model types are created fresh per query cycle and consumed read-only:
//! [`WindSample`], [`TideSample`], [`SunTimes`], [`SolunarDay`],
//! [`ObservedWaterHeight`], and the chart-space [`ChartPoint`].

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

pub mod circular;
pub mod config;
pub mod date_label;
pub mod daylight;
pub mod gap_fill;
pub mod solunar;
pub mod tide_bounds;
pub mod wind_buckets;
pub mod wire;


/// A single chart-space coordinate: an instant on the x-axis, a plotted
/// value on the y-axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: DateTime<FixedOffset>,
    pub y: f32,
}

/// One hourly wind observation, optionally carrying temperature and rain.
///
/// `gust_speed` holds the speed *above* base (gusts minus base), not the
/// absolute gust speed. This is the output convention of the shaping stage,
/// applied when decoding the upstream record (see [`wire`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    pub timestamp: DateTime<FixedOffset>,
    /// Sustained wind speed.
    pub base_speed: f32,
    /// Gust speed above base.
    pub gust_speed: f32,
    /// Compass direction in degrees, `[0, 360)`.
    pub direction_degrees: f32,
    pub temperature: Option<f32>,
    pub rain_mm_per_hour: Option<f32>,
    /// True when synthesized by the gap filler rather than observed.
    pub synthetic: bool,
}

/// Classification of a tide record: a named extreme or a curve sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TideKind {
    High,
    Low,
    Prediction,
}

/// A single tide prediction or extreme, height in feet above datum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TideSample {
    pub timestamp: DateTime<FixedOffset>,
    pub height_ft: f32,
    pub kind: TideKind,
}

/// Sun transit times for one calendar day.
///
/// Upstream guarantees `nautical_dawn < dawn <= sunrise < sunset <= dusk <
/// nautical_dusk`; this crate assumes the ordering and does not validate it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub date: NaiveDate,
    pub nautical_dawn: DateTime<FixedOffset>,
    pub dawn: DateTime<FixedOffset>,
    pub sunrise: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
    pub dusk: DateTime<FixedOffset>,
    pub nautical_dusk: DateTime<FixedOffset>,
}

/// One solunar feeding-period window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolunarWindow {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub weight: i32,
}

/// Major and minor feeding periods for one calendar day.
///
/// The order of `major_periods` and `minor_periods` is significant (index
/// position correlates to feeding-period labeling downstream) and must be
/// preserved by every transform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolunarDay {
    pub major_periods: Vec<SolunarWindow>,
    pub minor_periods: Vec<SolunarWindow>,
    pub score: f32,
}

/// A real-world water-height sensor reading. Optional input; a day may have
/// none.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObservedWaterHeight {
    pub timestamp: DateTime<FixedOffset>,
    pub height_ft: f32,
}
