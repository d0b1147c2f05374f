//! Configuration-resolved facade over the pure planner functions.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use koyomi_core::config::Settings;

use crate::agenda;
use crate::error::{EngineError, EngineResult};
use crate::model::{Event, Task};
use crate::stats::{self, WeeklyActivity};

/// Planner engine bound to a display timezone and a stats window.
///
/// Holds no mutable state and performs no I/O; callers pass in the stored
/// records and the current instant.
#[derive(Debug, Clone, Copy)]
pub struct Planner {
    tz: Tz,
    window_days: usize,
}

impl Planner {
    /// Builds a planner with an explicit timezone and window length.
    #[must_use]
    pub fn new(tz: Tz, window_days: usize) -> Self {
        Self { tz, window_days }
    }

    /// ## Summary
    /// Builds a planner from loaded settings.
    ///
    /// ## Errors
    /// Returns an error if the configured timezone is not a known IANA name
    /// or the stats window is zero days.
    pub fn from_settings(settings: &Settings) -> EngineResult<Self> {
        let tz = settings.calendar.timezone()?;
        if settings.stats.window_days == 0 {
            return Err(EngineError::InvalidConfiguration(
                "stats window must cover at least one day".to_string(),
            ));
        }

        tracing::debug!(%tz, window_days = settings.stats.window_days, "planner configured");
        Ok(Self::new(tz, settings.stats.window_days))
    }

    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Upcoming instances on `target`, sorted by start time.
    #[must_use]
    pub fn agenda_for(
        &self,
        events: &[Event],
        target: NaiveDate,
        now: DateTime<Utc>,
    ) -> Vec<Event> {
        agenda::upcoming_on(events, target, now, self.tz)
    }

    /// Trailing-window activity rollup anchored on `now`.
    #[must_use]
    pub fn weekly_activity(&self, events: &[Event], now: DateTime<Utc>) -> WeeklyActivity {
        stats::weekly_hours_buckets(events, self.window_days, now, self.tz)
    }

    /// Total scheduled hours across all records.
    #[must_use]
    pub fn lifetime_hours(&self, events: &[Event]) -> i64 {
        stats::lifetime_hours(events)
    }

    /// Fraction of tasks marked complete.
    #[must_use]
    pub fn completion_rate(&self, tasks: &[Task]) -> f64 {
        stats::completion_rate(tasks)
    }
}
