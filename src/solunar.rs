//! Correlation of solunar feeding periods against the day's tide curve.
//!
//! The chart highlights each feeding window by emphasizing the stretch of
//! the tide curve inside it. Majors are concatenated before minors and the
//! order of both lists is preserved, but every match carries an explicit
//! `Major`/`Minor` tag so downstream code never re-derives the type from
//! index position.

use crate::{ChartPoint, SolunarDay, TideSample};
use chrono::Duration;

/// Whether a feeding window came from the major or minor period list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeriodType {
    Major,
    Minor,
}

/// One feeding window's slice of the tide curve. `tides` is empty when no
/// sampled point fell inside the window; the entry is still emitted so the
/// output stays index-aligned with the major/minor concatenation.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedingPeriodMatch {
    pub period_type: PeriodType,
    pub tides: Vec<TideSample>,
}

/// Pixel-space counterpart of [`FeedingPeriodMatch`], produced when
/// correlating against already-projected chart points.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedingPeriodPoints {
    pub period_type: PeriodType,
    pub points: Vec<ChartPoint>,
}

/// Timestamp tolerance for pixel-space matches, in seconds. Chart points
/// have been through float pixel mapping, so window edges are matched with
/// a minute of slack instead of exact comparison.
pub const PIXEL_MATCH_TOLERANCE_SECS: i64 = 60;

/// Select, for each feeding window of the day, the tide-curve points whose
/// timestamps fall within `[start, end]` inclusive.
///
/// Output order is the contract: majors first, minors after, each list in
/// its original order.
pub fn correlate(day: &SolunarDay, tide_curve: &[TideSample]) -> Vec<FeedingPeriodMatch> {
    ordered_windows(day)
        .map(|(period_type, window)| FeedingPeriodMatch {
            period_type,
            tides: tide_curve
                .iter()
                .filter(|t| window.start <= t.timestamp && t.timestamp <= window.end)
                .cloned()
                .collect(),
        })
        .collect()
}

/// Pixel-space variant of [`correlate`]: window edges are widened by
/// [`PIXEL_MATCH_TOLERANCE_SECS`] to absorb rounding from the pixel
/// mapping.
pub fn correlate_points(day: &SolunarDay, curve: &[ChartPoint]) -> Vec<FeedingPeriodPoints> {
    let tolerance = Duration::seconds(PIXEL_MATCH_TOLERANCE_SECS);

    ordered_windows(day)
        .map(|(period_type, window)| FeedingPeriodPoints {
            period_type,
            points: curve
                .iter()
                .filter(|p| window.start - tolerance <= p.x && p.x <= window.end + tolerance)
                .copied()
                .collect(),
        })
        .collect()
}

fn ordered_windows(
    day: &SolunarDay,
) -> impl Iterator<Item = (PeriodType, &crate::SolunarWindow)> {
    day.major_periods
        .iter()
        .map(|w| (PeriodType::Major, w))
        .chain(day.minor_periods.iter().map(|w| (PeriodType::Minor, w)))
}
