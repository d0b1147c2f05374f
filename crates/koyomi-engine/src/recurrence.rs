//! Projection of event definitions onto concrete calendar days.
//!
//! A definition with a recurrence rule never stores its occurrences; the
//! day view asks this module, per definition and per visible day, whether
//! an instance exists on that day and what it looks like.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use chrono_tz::Tz;

use koyomi_core::util::day;

use crate::model::{Event, EventId, RecurrenceRule};

pub use koyomi_core::util::day::same_calendar_day as is_same_calendar_day;

/// ## Summary
/// Projects an event definition onto one calendar day.
///
/// Returns the concrete instance the definition produces on `target`, or
/// `None` when the definition does not occur that day: the target precedes
/// the definition's own first day, the day is excluded, or the recurrence
/// rule does not match. The input is never modified; repeated calls with
/// the same arguments return identical instances, including the derived id.
///
/// A generated instance keeps the definition's wall-clock start hour and
/// minute (seconds dropped) and its exact duration. All day-granularity
/// decisions use the supplied timezone.
#[must_use]
pub fn generate_instance_for_date(event: &Event, target: NaiveDate, tz: Tz) -> Option<Event> {
    let event_day = day::local_date(event.start, tz);

    // An event cannot occur before its own first day.
    if event_day > target {
        tracing::trace!(event = %event.id, %target, "target precedes event start day");
        return None;
    }

    if is_excluded(event, target, tz) {
        tracing::trace!(event = %event.id, %target, "target day is excluded");
        return None;
    }

    if !rule_matches(&event.rule, event_day, target) {
        return None;
    }

    Some(synthesize(event, target, tz))
}

/// Whether `target` is suppressed by the definition's excluded dates.
fn is_excluded(event: &Event, target: NaiveDate, tz: Tz) -> bool {
    event
        .excluded_dates
        .iter()
        .any(|marker| day::local_date(*marker, tz) == target)
}

/// Whether the rule lets a definition anchored on `event_day` occur on
/// `target`.
///
/// Unrecognized codes fall back to exact-day matching, like non-recurring
/// events. A monthly rule anchored on day 29–31 never matches months that
/// are too short; the anchor day is not clamped.
fn rule_matches(rule: &RecurrenceRule, event_day: NaiveDate, target: NaiveDate) -> bool {
    match rule {
        RecurrenceRule::None | RecurrenceRule::Unrecognized(_) => event_day == target,
        RecurrenceRule::Daily => true,
        RecurrenceRule::Weekly => event_day.weekday() == target.weekday(),
        RecurrenceRule::Monthly => event_day.day() == target.day(),
    }
}

/// Builds the concrete instance for a matched day.
fn synthesize(event: &Event, target: NaiveDate, tz: Tz) -> Event {
    let duration = event.duration();
    let local_start = event.start.with_timezone(&tz);
    // Hour and minute come from a valid local time; seconds are dropped.
    let start_time = NaiveTime::from_hms_opt(local_start.hour(), local_start.minute(), 0)
        .unwrap_or(NaiveTime::MIN);

    let new_start = day::materialize(target, start_time, tz);
    let new_end = new_start + duration;

    tracing::trace!(event = %event.id, %target, start = %new_start, "generated instance");

    Event {
        id: EventId::instance_of(&event.id, new_start),
        start: new_start,
        end: new_end,
        parent_id: Some(event.id.clone()),
        ..event.clone()
    }
}
