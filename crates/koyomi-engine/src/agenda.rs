//! Day-view assembly around the recurrence engine.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::model::{Event, Task};
use crate::recurrence::generate_instance_for_date;

/// ## Summary
/// Expands every definition onto `target` and keeps what is still upcoming.
///
/// An instance counts as upcoming while its end is strictly after `now`;
/// one ending exactly at `now` is dropped. Results are sorted ascending by
/// start time.
#[must_use]
pub fn upcoming_on(
    events: &[Event],
    target: NaiveDate,
    now: DateTime<Utc>,
    tz: Tz,
) -> Vec<Event> {
    let mut items: Vec<Event> = events
        .iter()
        .filter_map(|parent| generate_instance_for_date(parent, target, tz))
        .filter(|instance| instance.end > now)
        .collect();
    items.sort_by_key(|item| item.start);

    tracing::debug!(count = items.len(), %target, "assembled day view");
    items
}

/// Orders tasks for display: open tasks first, then ascending due date.
pub fn order_tasks(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| (task.completed, task.due));
}
