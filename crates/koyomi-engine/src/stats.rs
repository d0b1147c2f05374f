//! Dashboard aggregation over stored planner records.
//!
//! Sums attribute each event to its literal stored start day; recurring
//! definitions are not expanded here, so a weekly event contributes once,
//! on the day it was stored.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeDelta, Utc};
use chrono_tz::Tz;

use koyomi_core::util::day;

use crate::model::{Event, Task};

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Per-day activity rollup over a trailing window.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyActivity {
    /// Aggregate event hours per day, oldest day first.
    pub hours: Vec<f64>,
    /// Abbreviated weekday label per bucket, aligned with `hours`.
    pub labels: Vec<String>,
}

/// ## Summary
/// Rolls up event hours over the trailing `window_days` days ending on the
/// anchor's calendar day, inclusive.
///
/// Buckets are keyed by (year, day-of-year) in `tz` and returned in
/// chronological order, oldest first. Events enter the window when their
/// start is strictly after the instant `window_days` days before the end of
/// the anchor day; an event whose start day matches no bucket is dropped.
/// If the assembled buckets do not line up with the requested window, a
/// zeroed sequence of the requested length is returned instead of partial
/// data.
#[must_use]
pub fn weekly_hours_buckets(
    events: &[Event],
    window_days: usize,
    anchor: DateTime<Utc>,
    tz: Tz,
) -> WeeklyActivity {
    let anchor_day = day::local_date(anchor, tz);
    let cutoff = day::end_of_day(anchor_day, tz)
        - TimeDelta::days(i64::try_from(window_days).unwrap_or(i64::MAX));

    let span = u64::try_from(window_days.saturating_sub(1)).unwrap_or(u64::MAX);
    let oldest = anchor_day
        .checked_sub_days(Days::new(span))
        .unwrap_or(anchor_day);
    let window: Vec<NaiveDate> = oldest.iter_days().take(window_days).collect();

    let labels: Vec<String> = window.iter().map(|d| d.format("%a").to_string()).collect();
    let mut buckets: Vec<((i32, u32), f64)> = window
        .iter()
        .map(|d| ((d.year(), d.ordinal()), 0.0))
        .collect();

    for event in events {
        if event.start <= cutoff {
            continue;
        }
        let event_day = day::local_date(event.start, tz);
        let key = (event_day.year(), event_day.ordinal());
        if let Some((_, hours)) = buckets.iter_mut().find(|(k, _)| *k == key) {
            *hours += hours_between(event.start, event.end);
        } else {
            tracing::trace!(event = %event.id, %event_day, "start matches no bucket, dropped");
        }
    }

    let hours: Vec<f64> = buckets.into_iter().map(|(_, h)| h).collect();
    if hours.len() != window_days {
        tracing::warn!(
            expected = window_days,
            got = hours.len(),
            "bucket count mismatch, returning zeroed window"
        );
        return WeeklyActivity {
            hours: vec![0.0; window_days],
            labels,
        };
    }

    WeeklyActivity { hours, labels }
}

/// Total scheduled hours across all records, truncated to whole hours.
#[must_use]
pub fn lifetime_hours(events: &[Event]) -> i64 {
    let total_millis: i64 = events
        .iter()
        .map(|event| event.duration().num_milliseconds())
        .sum();
    total_millis / MILLIS_PER_HOUR
}

/// Hours logged on the newest bucket of a rollup (the anchor day).
#[must_use]
pub fn today_hours(activity: &WeeklyActivity) -> f64 {
    activity.hours.last().copied().unwrap_or(0.0)
}

/// Fraction of tasks marked complete; 0 for an empty list.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "task counts are far below 2^52"
)]
pub fn completion_rate(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let done = tasks.iter().filter(|task| task.completed).count();
    done as f64 / tasks.len() as f64
}

#[expect(
    clippy::cast_precision_loss,
    reason = "durations are far below 2^52 milliseconds"
)]
fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / MILLIS_PER_HOUR as f64
}
