//! Day/night segmentation for chart background shading.
//!
//! The tide chart paints five background rectangles across the day: dark
//! morning, dawn, daylight, dusk, dark evening. Each segment gets the list
//! of curve timestamps that fall inside its window, projected to a constant
//! chart-ceiling `y` so the renderer can fill the band down from the top.
//!
//! Adjacent windows deliberately overlap by a few minutes. The rectangles
//! are drawn edge to edge, and a shared boundary computed twice from float
//! timestamps leaves a one-pixel seam; the overlap covers it. Points near a
//! boundary therefore legitimately appear in two segments.

use crate::{ChartPoint, SunTimes};
use chrono::{DateTime, Duration, FixedOffset, NaiveTime};

/// The five background bands of a chart day, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    DarkMorning,
    Dawn,
    Daylight,
    Dusk,
    DarkEvening,
}

/// One background band with the chart points inside its window.
#[derive(Clone, Debug, PartialEq)]
pub struct DaySegment {
    pub kind: SegmentKind,
    pub points: Vec<ChartPoint>,
}

/// Seam cover on the outer (dark) windows, in minutes.
const DARK_SLACK_MINUTES: i64 = 10;
/// Seam cover on the daylight window, in minutes.
const DAYLIGHT_SLACK_MINUTES: i64 = 6;

/// Classify curve timestamps into the five day/night segments for one sun
/// record, projecting each matched timestamp to `{x: t, y: ceiling}`.
///
/// `ceiling` is the chart's padded max value (see
/// [`crate::tide_bounds::padded_domain`]); it sets the filled rectangle's
/// extent only. All five segments are always present, in display order,
/// possibly with empty point lists.
pub fn classify(
    sun: &SunTimes,
    timestamps: &[DateTime<FixedOffset>],
    ceiling: f32,
) -> Vec<DaySegment> {
    let dark_slack = Duration::minutes(DARK_SLACK_MINUTES);
    let daylight_slack = Duration::minutes(DAYLIGHT_SLACK_MINUTES);

    let day_start = start_of_day(sun.sunrise) - dark_slack;
    let day_end = start_of_day(sun.sunrise) + Duration::days(1) + dark_slack;

    let windows = [
        (SegmentKind::DarkMorning, day_start, sun.nautical_dawn + dark_slack),
        (SegmentKind::Dawn, sun.nautical_dawn, sun.sunrise),
        (
            SegmentKind::Daylight,
            sun.sunrise - daylight_slack,
            sun.sunset + daylight_slack,
        ),
        (SegmentKind::Dusk, sun.sunset, sun.nautical_dusk),
        (SegmentKind::DarkEvening, sun.nautical_dusk - dark_slack, day_end),
    ];

    windows
        .into_iter()
        .map(|(kind, from, until)| DaySegment {
            kind,
            points: timestamps
                .iter()
                .filter(|t| from <= **t && **t < until)
                .map(|t| ChartPoint { x: *t, y: ceiling })
                .collect(),
        })
        .collect()
}

/// Midnight at the start of the instant's calendar day, in the instant's
/// own UTC offset.
fn start_of_day(t: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let offset = *t.offset();
    let local_midnight = t.date_naive().and_time(NaiveTime::MIN);
    let utc_midnight = local_midnight - Duration::seconds(offset.local_minus_utc() as i64);
    DateTime::from_naive_utc_and_offset(utc_midnight, offset)
}
