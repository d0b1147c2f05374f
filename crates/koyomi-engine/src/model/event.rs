use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::rule::RecurrenceRule;

/// Stored event identifier.
///
/// The backing store assigns ids to definitions; generated instances derive
/// theirs from the definition id and the projected start instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Fresh random identifier for a definition created locally.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// ## Summary
    /// Identifier of the instance a definition projects onto one day.
    ///
    /// Stable for a given (definition, projected start) pair; distinct
    /// definitions can never collide because the definition id is a prefix.
    #[must_use]
    pub fn instance_of(parent: &Self, start: DateTime<Utc>) -> Self {
        Self(format!("{}_virtual_{}", parent.0, start.timestamp_millis()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar event record as it arrives from the external store.
///
/// Wire timestamps are epoch milliseconds. The same shape serves generated
/// instances, which carry `parent_id` and are never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end: DateTime<Utc>,
    /// Recurrence rule; `RecurrenceRule::None` for one-off events.
    #[serde(default)]
    pub rule: RecurrenceRule,
    /// Definition this instance was generated from; absent on definitions.
    #[serde(default)]
    pub parent_id: Option<EventId>,
    /// Day markers on which an otherwise-matching recurrence is suppressed.
    /// Compared at calendar-day granularity only.
    #[serde(default, with = "ts_milliseconds_vec")]
    pub excluded_dates: Vec<DateTime<Utc>>,
    /// Display color, carried through unchanged.
    #[serde(default = "default_color_tag")]
    pub color_tag: String,
    /// Reminder lead times in minutes, carried through unchanged.
    #[serde(default = "default_reminder_offsets")]
    pub reminder_offsets_minutes: Vec<i64>,
}

fn default_color_tag() -> String {
    "#6366F1".to_string()
}

fn default_reminder_offsets() -> Vec<i64> {
    vec![10]
}

impl Event {
    /// Scheduled duration of the record. Not validated to be non-negative;
    /// malformed records fall out of the arithmetic unchanged.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether this record is a generated instance rather than a definition.
    #[must_use]
    pub fn is_instance(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Epoch-millisecond wire format for lists of instants.
mod ts_milliseconds_vec {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(values: &[DateTime<Utc>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(values.iter().map(DateTime::timestamp_millis))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = Vec::<i64>::deserialize(deserializer)?;
        millis
            .into_iter()
            .map(|ms| {
                Utc.timestamp_millis_opt(ms)
                    .single()
                    .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {ms}")))
            })
            .collect()
    }
}
