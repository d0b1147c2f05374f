use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Recurrence rule of an event definition.
///
/// The store encodes the rule as an optional string code; the set is
/// closed. Any code outside the three `FREQ=` values is carried verbatim as
/// `Unrecognized` and behaves like a non-recurring event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RecurrenceRule {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Unrecognized(String),
}

impl RecurrenceRule {
    /// Parses a stored rule code. Absent codes mean non-recurring.
    #[must_use]
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            None => Self::None,
            Some("FREQ=DAILY") => Self::Daily,
            Some("FREQ=WEEKLY") => Self::Weekly,
            Some("FREQ=MONTHLY") => Self::Monthly,
            Some(other) => Self::Unrecognized(other.to_string()),
        }
    }

    /// Wire code of the rule; `None` for non-recurring events.
    #[must_use]
    pub fn as_code(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Daily => Some("FREQ=DAILY"),
            Self::Weekly => Some("FREQ=WEEKLY"),
            Self::Monthly => Some("FREQ=MONTHLY"),
            Self::Unrecognized(raw) => Some(raw),
        }
    }

    /// Whether the rule recurs at all.
    #[must_use]
    pub fn is_recurring(&self) -> bool {
        matches!(self, Self::Daily | Self::Weekly | Self::Monthly)
    }
}

impl Serialize for RecurrenceRule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_code().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RecurrenceRule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_code(code.as_deref()))
    }
}
