//! Timezone-aware calendar-day arithmetic.
//!
//! Every day-granularity decision in the workspace goes through these
//! helpers so the timezone is always an explicit argument, never ambient
//! process state.

use chrono::{DateTime, Datelike, LocalResult, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Calendar date of an instant in the given timezone.
#[must_use]
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// ## Summary
/// Projects a wall-clock time onto a calendar date in `tz` and returns the
/// resulting instant in UTC.
///
/// A time erased by a spring-forward gap is shifted forward one hour; a
/// time duplicated by a fall-back fold resolves to its first occurrence.
#[must_use]
pub fn materialize(date: NaiveDate, time: NaiveTime, tz: Tz) -> DateTime<Utc> {
    let naive = date.and_time(time);
    match tz.from_local_datetime(&naive) {
        // An ambiguous time resolves to its first occurrence.
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => {
            tracing::trace!(%naive, %tz, "wall-clock time in DST gap, shifting forward");
            match tz.from_local_datetime(&(naive + TimeDelta::hours(1))) {
                LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
                // The whole civil day was skipped (date-line shifts).
                LocalResult::None => Utc.from_utc_datetime(&naive),
            }
        }
    }
}

/// First instant of `date` in `tz`, as UTC.
#[must_use]
pub fn start_of_day(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    materialize(date, NaiveTime::MIN, tz)
}

/// Last instant of `date` in `tz` at millisecond resolution, as UTC.
#[must_use]
pub fn end_of_day(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    start_of_day(date.succ_opt().unwrap_or(date), tz) - TimeDelta::milliseconds(1)
}

/// ## Summary
/// Whether two instants fall on the same calendar day in `tz`.
///
/// Day equality is (year, ordinal-day) equality of the local dates,
/// ignoring time-of-day.
#[must_use]
pub fn same_calendar_day(a: DateTime<Utc>, b: DateTime<Utc>, tz: Tz) -> bool {
    let (a, b) = (local_date(a, tz), local_date(b, tz));
    a.year() == b.year() && a.ordinal() == b.ordinal()
}

/// UTC epoch-day index of an instant (days since 1970-01-01, floored).
///
/// Deliberately timezone-independent; used by the streak rule.
#[must_use]
pub fn epoch_day(instant: DateTime<Utc>) -> i64 {
    instant.timestamp_millis().div_euclid(MILLIS_PER_DAY)
}
