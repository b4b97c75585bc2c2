//! Short human labels for absolute dates: "Today", "Tomorrow",
//! "Next Friday", "Last Thursday", "May 20".
//!
//! "Today" is an explicit parameter so the function stays pure. Day
//! differences are counted on calendar-day boundaries, midnight to
//! midnight, never as raw 24-hour deltas: a timestamp 23 hours in the past
//! that crossed local midnight still counts as one day ago.

use chrono::{DateTime, FixedOffset};

/// Label `date` relative to `today`.
///
/// Rules, first match wins:
/// - same calendar day: "Today"
/// - next calendar day: "Tomorrow"
/// - 7 or more days ahead: "Next {Weekday}"
/// - 2..6 days ahead: "{Weekday}"
/// - previous calendar day: "Yesterday"
/// - 2..7 days back: "Last {Weekday}"
/// - more than 7 days back: "{Month} {Day}"
pub fn relative_label(date: DateTime<FixedOffset>, today: DateTime<FixedOffset>) -> String {
    let days = date
        .date_naive()
        .signed_duration_since(today.date_naive())
        .num_days();

    match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        d if d >= 7 => format!("Next {}", date.format("%A")),
        d if d > 1 => date.format("%A").to_string(),
        -1 => "Yesterday".to_string(),
        d if (-7..=-2).contains(&d) => format!("Last {}", date.format("%A")),
        d if d < -7 => date.format("%B %-d").to_string(),
        _ => date.format("%A").to_string(),
    }
}
