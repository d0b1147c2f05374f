//! Daily-activity streak rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use koyomi_core::util::day;

/// Consecutive-day activity counter.
///
/// Day boundaries are UTC epoch days, independent of the planner's display
/// timezone. The record itself is stored and reloaded by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Streak {
    /// Epoch day of the last recorded activity.
    pub last_active_day: i64,
    /// Current consecutive-day count.
    pub count: u32,
}

impl Streak {
    /// ## Summary
    /// Records activity at `now` and returns the updated streak.
    ///
    /// Repeated activity on the same day leaves the streak untouched;
    /// activity on the following day extends it; any gap resets it to 1.
    #[must_use]
    pub fn advance(self, now: DateTime<Utc>) -> Self {
        let today = day::epoch_day(now);
        if self.last_active_day == today {
            return self;
        }

        let count = if self.last_active_day == today - 1 {
            self.count.saturating_add(1)
        } else {
            1
        };

        tracing::debug!(count, "streak advanced");
        Self {
            last_active_day: today,
            count,
        }
    }
}
