//! Reduction of a gap-filled 24-hour wind series into labeled 6-hour
//! buckets.
//!
//! The compact "conditions" card shows four buckets per day: overnight,
//! morning, afternoon, evening. Each bucket summarizes its samples as a
//! wind-speed range, a circular-mean direction, an average temperature when
//! any reading exists, and a rain total.

use crate::{circular, WindSample};

/// Positional labels for the four standard 6-hour buckets:
/// 12am-6am, 6am-noon, noon-6pm, 6pm-midnight.
pub const BUCKET_LABELS: [&str; 4] = ["12-6", "6-noon", "noon-6", "6-12"];

/// One aggregated bucket of the day's wind series.
///
/// `min`/`max` fold only over *real* (non-synthetic) samples, seeded with
/// `INFINITY`/`NEG_INFINITY`. A bucket whose samples are all synthetic keeps
/// the seeds: `min == f32::INFINITY` means "no reading", which presentation
/// must special-case rather than treat as a speed. `average_temperature` is
/// `None` when no sample in the bucket carries a temperature; absent rain
/// counts as zero toward the total.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeBucket {
    /// Fixed positional label; `None` for bucket counts other than 4.
    pub label: Option<&'static str>,
    pub min: f32,
    pub max: f32,
    pub average_direction_degrees: f32,
    pub average_temperature: Option<f32>,
    pub rain_total_mm: f32,
}

/// Partition a sorted, gap-filled wind series into `bucket_count` contiguous
/// chunks of `ceil(len / bucket_count)` samples (the last chunk may be
/// shorter) and aggregate each.
pub fn bucket(samples: &[WindSample], bucket_count: usize) -> Vec<TimeBucket> {
    if samples.is_empty() || bucket_count == 0 {
        return Vec::new();
    }

    let chunk_len = samples.len().div_ceil(bucket_count);

    samples
        .chunks(chunk_len)
        .enumerate()
        .map(|(index, chunk)| aggregate(chunk, label_for(index, bucket_count)))
        .collect()
}

fn label_for(index: usize, bucket_count: usize) -> Option<&'static str> {
    if bucket_count == BUCKET_LABELS.len() {
        BUCKET_LABELS.get(index).copied()
    } else {
        None
    }
}

fn aggregate(chunk: &[WindSample], label: Option<&'static str>) -> TimeBucket {
    let (min, max) = chunk
        .iter()
        .filter(|s| !s.synthetic)
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), s| {
            (min.min(s.base_speed), max.max(s.base_speed))
        });

    let directions: Vec<f32> = chunk.iter().map(|s| s.direction_degrees).collect();

    let temperatures: Vec<f32> = chunk.iter().filter_map(|s| s.temperature).collect();
    let average_temperature = if temperatures.is_empty() {
        None
    } else {
        Some(temperatures.iter().sum::<f32>() / temperatures.len() as f32)
    };

    let rain_total_mm = chunk
        .iter()
        .filter_map(|s| s.rain_mm_per_hour)
        .sum::<f32>();

    TimeBucket {
        label,
        min,
        max,
        average_direction_degrees: circular::average_angle(&directions),
        average_temperature,
        rain_total_mm,
    }
}
