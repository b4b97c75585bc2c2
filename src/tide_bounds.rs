//! Water-height envelope for the tide chart's vertical domain.
//!
//! The chart needs the day's min/max water height before it can place its
//! y-axis. Predictions and any observed sensor readings both widen the
//! envelope; a fixed padding is then applied so the curve never touches the
//! chart edge.

use crate::{ObservedWaterHeight, TideSample};

/// Min/max water height in feet for one day's chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightBounds {
    pub min: f32,
    pub max: f32,
}

/// Fold seed for the tide-height envelope, carried over verbatim from the
/// source pipeline.
///
/// The seed assumes real tide heights lie within `[0, 99]` ft: a day whose
/// heights are all negative keeps `max == 0`, and heights above 99 ft would
/// keep `min == 99`. Realistic tidal ranges never get near either edge, but
/// the clipping is a known latent gap. Kept as-is so numeric output matches
/// the source for edge-case inputs.
pub const HEIGHT_BOUNDS_SEED: HeightBounds = HeightBounds {
    min: 99.0,
    max: 0.0,
};

/// Chart padding in feet applied below the min and above the max.
pub const DOMAIN_PADDING_FT: f32 = 0.4;

/// Compute the day's water-height envelope from tide samples and observed
/// sensor readings.
///
/// Tide samples fold over [`HEIGHT_BOUNDS_SEED`]; observed readings then
/// fold over the running bounds, extending them where a sensor reading
/// exceeds the predicted envelope.
pub fn bounds(tides: &[TideSample], observed: &[ObservedWaterHeight]) -> HeightBounds {
    let predicted = tides.iter().fold(HEIGHT_BOUNDS_SEED, |acc, tide| HeightBounds {
        min: acc.min.min(tide.height_ft),
        max: acc.max.max(tide.height_ft),
    });

    observed.iter().fold(predicted, |acc, reading| HeightBounds {
        min: acc.min.min(reading.height_ft),
        max: acc.max.max(reading.height_ft),
    })
}

/// Apply the chart padding to an envelope, returning the plotted
/// `(lower, upper)` y-domain.
///
/// The lower edge pads down by `padding_ft` but never below zero.
pub fn padded_domain(bounds: &HeightBounds, padding_ft: f32) -> (f32, f32) {
    let lower = if bounds.min - padding_ft > 0.0 {
        bounds.min - padding_ft
    } else {
        0.0
    };
    (lower, bounds.max + padding_ft)
}
