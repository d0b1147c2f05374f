use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::model::{Event, EventId, RecurrenceRule};
use crate::recurrence::generate_instance_for_date;

pub struct RecurrenceCase {
    pub name: &'static str,
    pub rule: Option<&'static str>,
    pub start: &'static str,
    pub end: &'static str,
    pub excluded: &'static [&'static str],
    pub tz: &'static str,
    pub target: &'static str,
    pub expect: Option<(&'static str, &'static str)>,
}

#[expect(clippy::too_many_lines)]
pub fn recurrence_cases() -> Vec<RecurrenceCase> {
    vec![
        RecurrenceCase {
            name: "weekly_next_week",
            rule: Some("FREQ=WEEKLY"),
            start: "2024-03-01T09:00:00Z",
            end: "2024-03-01T10:00:00Z",
            excluded: &[],
            tz: "UTC",
            target: "2024-03-08",
            expect: Some(("2024-03-08T09:00:00Z", "2024-03-08T10:00:00Z")),
        },
        RecurrenceCase {
            name: "weekly_wrong_weekday",
            rule: Some("FREQ=WEEKLY"),
            start: "2024-03-01T09:00:00Z",
            end: "2024-03-01T10:00:00Z",
            excluded: &[],
            tz: "UTC",
            target: "2024-03-09",
            expect: None,
        },
        RecurrenceCase {
            name: "monthly_day_31_short_month",
            rule: Some("FREQ=MONTHLY"),
            start: "2024-01-31T08:00:00Z",
            end: "2024-01-31T08:30:00Z",
            excluded: &[],
            tz: "UTC",
            target: "2024-02-29",
            expect: None,
        },
        RecurrenceCase {
            name: "monthly_day_31_long_month",
            rule: Some("FREQ=MONTHLY"),
            start: "2024-01-31T08:00:00Z",
            end: "2024-01-31T08:30:00Z",
            excluded: &[],
            tz: "UTC",
            target: "2024-03-31",
            expect: Some(("2024-03-31T08:00:00Z", "2024-03-31T08:30:00Z")),
        },
        RecurrenceCase {
            name: "excluded_overrides_exact_day",
            rule: None,
            start: "2024-06-10T14:00:00Z",
            end: "2024-06-10T15:00:00Z",
            excluded: &["2024-06-10T00:00:00Z"],
            tz: "UTC",
            target: "2024-06-10",
            expect: None,
        },
        RecurrenceCase {
            name: "one_off_day_before_start",
            rule: None,
            start: "2024-06-10T14:00:00Z",
            end: "2024-06-10T15:00:00Z",
            excluded: &[],
            tz: "UTC",
            target: "2024-06-09",
            expect: None,
        },
        RecurrenceCase {
            name: "one_off_same_day",
            rule: None,
            start: "2024-06-10T14:00:00Z",
            end: "2024-06-10T15:00:00Z",
            excluded: &[],
            tz: "UTC",
            target: "2024-06-10",
            expect: Some(("2024-06-10T14:00:00Z", "2024-06-10T15:00:00Z")),
        },
        RecurrenceCase {
            name: "one_off_next_year_same_date",
            rule: None,
            start: "2023-12-31T09:00:00Z",
            end: "2023-12-31T10:00:00Z",
            excluded: &[],
            tz: "UTC",
            target: "2024-12-31",
            expect: None,
        },
        RecurrenceCase {
            name: "daily_far_projection",
            rule: Some("FREQ=DAILY"),
            start: "2024-03-01T09:30:00Z",
            end: "2024-03-01T10:00:00Z",
            excluded: &[],
            tz: "UTC",
            target: "2024-04-15",
            expect: Some(("2024-04-15T09:30:00Z", "2024-04-15T10:00:00Z")),
        },
        RecurrenceCase {
            name: "daily_excluded_day",
            rule: Some("FREQ=DAILY"),
            start: "2024-03-01T09:30:00Z",
            end: "2024-03-01T10:00:00Z",
            excluded: &["2024-03-05T10:00:00Z"],
            tz: "UTC",
            target: "2024-03-05",
            expect: None,
        },
        RecurrenceCase {
            name: "unrecognized_code_acts_one_off",
            rule: Some("FREQ=YEARLY"),
            start: "2024-03-01T09:00:00Z",
            end: "2024-03-01T10:00:00Z",
            excluded: &[],
            tz: "UTC",
            target: "2025-03-01",
            expect: None,
        },
        RecurrenceCase {
            name: "weekly_wall_clock_across_dst",
            rule: Some("FREQ=WEEKLY"),
            // Friday 09:00 New York in winter (EST, UTC-5).
            start: "2024-01-05T14:00:00Z",
            end: "2024-01-05T15:00:00Z",
            excluded: &[],
            tz: "America/New_York",
            target: "2024-07-05",
            // Same 09:00 wall clock in summer (EDT, UTC-4).
            expect: Some(("2024-07-05T13:00:00Z", "2024-07-05T14:00:00Z")),
        },
        RecurrenceCase {
            name: "daily_start_lands_in_dst_gap",
            rule: Some("FREQ=DAILY"),
            // 02:30 New York; that wall-clock time does not exist on the
            // spring-forward day and shifts to 03:30 EDT.
            start: "2024-03-01T07:30:00Z",
            end: "2024-03-01T07:45:00Z",
            excluded: &[],
            tz: "America/New_York",
            target: "2024-03-10",
            expect: Some(("2024-03-10T07:30:00Z", "2024-03-10T07:45:00Z")),
        },
    ]
}

pub fn assert_case(case: &RecurrenceCase) {
    let tz = Tz::from_str(case.tz)
        .unwrap_or_else(|_err| panic!("Unknown timezone in case {}", case.name));
    let event = Event {
        id: EventId::new("case-event"),
        title: case.name.to_string(),
        description: String::new(),
        location: String::new(),
        start: parse_rfc3339(case.start),
        end: parse_rfc3339(case.end),
        rule: RecurrenceRule::from_code(case.rule),
        parent_id: None,
        excluded_dates: case.excluded.iter().map(|value| parse_rfc3339(value)).collect(),
        color_tag: "#6366F1".to_string(),
        reminder_offsets_minutes: vec![10],
    };
    let target = NaiveDate::parse_from_str(case.target, "%Y-%m-%d")
        .unwrap_or_else(|err| panic!("Failed to parse target date {}: {}", case.target, err));

    let instance = generate_instance_for_date(&event, target, tz);

    match (case.expect, instance) {
        (None, None) => {}
        (None, Some(instance)) => panic!(
            "Case {} expected no instance, got one starting {}",
            case.name, instance.start
        ),
        (Some(_), None) => panic!("Case {} expected an instance, got none", case.name),
        (Some((start, end)), Some(instance)) => {
            assert_eq!(
                instance.start,
                parse_rfc3339(start),
                "Case {} start did not match",
                case.name
            );
            assert_eq!(
                instance.end,
                parse_rfc3339(end),
                "Case {} end did not match",
                case.name
            );
            assert_eq!(
                instance.parent_id.as_ref(),
                Some(&event.id),
                "Case {} parent id did not match",
                case.name
            );
        }
    }
}

fn parse_rfc3339(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .unwrap_or_else(|err| panic!("Failed to parse rfc3339 value {value}: {err}"))
        .with_timezone(&Utc)
}
