//! Hourly gap filling for the wind/temperature/rain series.
//!
//! The upstream feed is supposed to deliver one wind record per hour, but
//! hours go missing routinely (sensor dropouts, partial days at the edge of
//! the forecast range). Chart and bucket code downstream both assume a dense
//! 24-entry day, so missing hours are synthesized here by carrying the most
//! recent real reading forward and restamping it.

use crate::WindSample;
use chrono::{DateTime, Duration, FixedOffset};

/// Hours in the filled window.
pub const HOURS_PER_DAY: i64 = 24;

/// Fill a day's wind series to exactly one sample per hour of the 24-hour
/// window starting at `day_start`.
///
/// For each hour offset 0..24, the real sample stamped at exactly
/// `day_start + offset` is kept when present. Otherwise the running
/// last-known real sample (seeded with the first input sample) is cloned,
/// restamped to the target hour, and flagged `synthetic`. Input may be
/// unsorted; output is sorted ascending by timestamp.
///
/// # Preconditions
/// `samples` must be non-empty: the filler has nothing to seed the
/// last-known sample with otherwise. A day with no data at all is a "no
/// data" state the caller must handle upstream instead of invoking the
/// filler.
pub fn fill_hourly(samples: &[WindSample], day_start: DateTime<FixedOffset>) -> Vec<WindSample> {
    let mut last_known = samples[0].clone();
    let mut filled = Vec::with_capacity(HOURS_PER_DAY as usize);

    for offset in 0..HOURS_PER_DAY {
        let target = day_start + Duration::hours(offset);

        match samples.iter().find(|s| s.timestamp == target) {
            Some(real) => {
                last_known = real.clone();
                filled.push(real.clone());
            }
            None => {
                let mut synthesized = last_known.clone();
                synthesized.timestamp = target;
                synthesized.synthetic = true;
                filled.push(synthesized);
            }
        }
    }

    filled.sort_by_key(|s| s.timestamp);
    filled
}
