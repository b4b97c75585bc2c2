//! Circular (vector) mean of compass directions.
//!
//! Naive arithmetic averaging breaks at the 0/360 seam: the mean of 350 and
//! 10 degrees is 0, not 180. This module averages on the unit circle
//! instead, summing sines and cosines and taking `atan2` of the means.

/// Average a set of compass bearings, returning a value in `[0, 360)`.
///
/// Trigonometry runs in `f64` to keep the sums stable before narrowing back
/// to the `f32` the chart layer uses.
///
/// Degenerate case: an empty slice leaves both component means at zero, and
/// `atan2(0, 0)` is defined as `0`. The zero fallback is deliberate so that
/// bucket aggregation stays total; callers that need to distinguish "no
/// directional data" must check their input length.
pub fn average_angle(degrees: &[f32]) -> f32 {
    let (sin_sum, cos_sum) = degrees.iter().fold((0.0f64, 0.0f64), |(s, c), d| {
        let rad = f64::from(*d).to_radians();
        (s + rad.sin(), c + rad.cos())
    });

    let count = degrees.len().max(1) as f64;
    let mean = (sin_sum / count).atan2(cos_sum / count).to_degrees();

    if mean < 0.0 {
        (mean + 360.0) as f32
    } else {
        mean as f32
    }
}
