use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::{DateValue, RANGE_SEPARATOR, prelude::*};

/// The selectable window of dates (inclusive at both ends).
/// The minimum must be strictly earlier than the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(
    fmt = "{}/{}",
    "minimum.to_rfc3339_opts(SecondsFormat::Secs, true)",
    "maximum.to_rfc3339_opts(SecondsFormat::Secs, true)"
)]
pub struct DateRange {
    minimum: DateValue,
    maximum: DateValue,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Minimum is not strictly before maximum.
    #[error("Invalid date range: minimum ({minimum}) must be before maximum ({maximum})")]
    InvalidRange {
        minimum: DateValue,
        maximum: DateValue,
    },

    /// A bound is not an RFC 3339 timestamp.
    #[error(transparent)]
    Timestamp(#[from] chrono::ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` unless minimum < maximum.
    pub fn new(minimum: DateValue, maximum: DateValue) -> Result<Self, RangeError> {
        if minimum >= maximum {
            return Err(RangeError::InvalidRange { minimum, maximum });
        }
        Ok(Self { minimum, maximum })
    }

    /// Every representable instant
    pub const fn unbounded() -> Self {
        Self {
            minimum: DateTime::<Utc>::MIN_UTC,
            maximum: DateTime::<Utc>::MAX_UTC,
        }
    }

    /// Returns the earliest selectable date
    pub const fn minimum(&self) -> DateValue {
        self.minimum
    }

    /// Returns the latest selectable date
    pub const fn maximum(&self) -> DateValue {
        self.maximum
    }

    /// Same range with a new minimum
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` unless minimum < current maximum.
    pub fn with_minimum(&self, minimum: DateValue) -> Result<Self, RangeError> {
        Self::new(minimum, self.maximum)
    }

    /// Same range with a new maximum
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` unless current minimum < maximum.
    pub fn with_maximum(&self, maximum: DateValue) -> Result<Self, RangeError> {
        Self::new(self.minimum, maximum)
    }

    /// Checks if the range contains a given date, bounds included
    pub fn contains(&self, date: DateValue) -> bool {
        self.minimum <= date && date <= self.maximum
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
        if separator_count != 1 {
            return Err(RangeError::InvalidFormat(format!(
                "expected exactly one '{RANGE_SEPARATOR}', found {separator_count}: {s}"
            )));
        }

        let (minimum, maximum) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
            RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found: {s}"))
        })?;
        let minimum = DateTime::parse_from_rfc3339(minimum.trim())?.with_timezone(&Utc);
        let maximum = DateTime::parse_from_rfc3339(maximum.trim())?.with_timezone(&Utc);

        Self::new(minimum, maximum)
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::test_utils::{range, ymd_utc};

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            minimum:        DateValue,
            maximum:        DateValue,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                minimum:        ymd_utc(2020, 1, 1),
                maximum:        ymd_utc(2020, 12, 31),
                should_succeed: true,
                description:    "valid range (min < max)",
            },
            TestCase {
                minimum:        ymd_utc(2020, 6, 1),
                maximum:        ymd_utc(2020, 1, 1),
                should_succeed: false,
                description:    "invalid range (min > max)",
            },
            TestCase {
                minimum:        ymd_utc(2020, 1, 1),
                maximum:        ymd_utc(2020, 1, 1),
                should_succeed: false,
                description:    "equal bounds (min == max)",
            },
        ];

        for case in &cases {
            let result = DateRange::new(case.minimum, case.maximum);

            if case.should_succeed {
                assert!(result.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(
                    matches!(result, Err(RangeError::InvalidRange { .. })),
                    "Expected failure for: {}",
                    case.description
                );
            }
        }
    }

    #[test]
    fn test_contains_is_inclusive() {
        let min = ymd_utc(2020, 1, 1);
        let max = ymd_utc(2020, 12, 31);
        let range = range(min, max);
        let epsilon = Duration::seconds(1);

        assert!(range.contains(min));
        assert!(range.contains(max));
        assert!(range.contains(ymd_utc(2020, 7, 4)));
        assert!(!range.contains(min - epsilon));
        assert!(!range.contains(max + epsilon));
    }

    #[test]
    fn test_unbounded_contains_everything() {
        let range = DateRange::default();
        assert!(range.contains(DateTime::<Utc>::MIN_UTC));
        assert!(range.contains(DateTime::<Utc>::MAX_UTC));
        assert!(range.contains(ymd_utc(1, 1, 1)));
        assert!(range.contains(ymd_utc(9999, 12, 31)));
    }

    #[test]
    fn test_with_bounds_validates() {
        let range = range(ymd_utc(2020, 1, 1), ymd_utc(2020, 12, 31));

        let narrowed = range.with_minimum(ymd_utc(2020, 6, 1)).unwrap();
        assert_eq!(narrowed.minimum(), ymd_utc(2020, 6, 1));
        assert_eq!(narrowed.maximum(), ymd_utc(2020, 12, 31));

        assert!(range.with_minimum(ymd_utc(2021, 1, 1)).is_err());
        assert!(range.with_maximum(ymd_utc(2019, 1, 1)).is_err());
        assert!(range.with_maximum(ymd_utc(2020, 1, 1)).is_err());
    }

    #[test]
    fn test_display() {
        let range = range(ymd_utc(2020, 1, 1), ymd_utc(2020, 12, 31));
        assert_eq!(range.to_string(), "2020-01-01T00:00:00Z/2020-12-31T00:00:00Z");
    }

    #[test]
    fn test_from_str() {
        let range = "2020-01-01T00:00:00Z/2020-12-31T00:00:00Z"
            .parse::<DateRange>()
            .expect("failed to parse range");
        assert_eq!(range.minimum(), ymd_utc(2020, 1, 1));
        assert_eq!(range.maximum(), ymd_utc(2020, 12, 31));
    }

    #[test]
    fn test_from_str_normalizes_offsets() {
        let range = "2020-01-01T09:00:00+09:00 / 2020-01-02T00:00:00Z"
            .parse::<DateRange>()
            .expect("failed to parse range with offsets");
        assert_eq!(range.minimum(), ymd_utc(2020, 1, 1));
    }

    #[test]
    fn test_from_str_errors() {
        let result = "2020-01-01T00:00:00Z".parse::<DateRange>();
        assert!(matches!(result, Err(RangeError::InvalidFormat(_))));

        let result = "2020-01-01T00:00:00Z/2020-06-01T00:00:00Z/2020-12-31T00:00:00Z".parse::<DateRange>();
        let err = result.expect_err("expected error for too many separators");
        assert!(err.to_string().contains("found 2"));

        let result = "2020-01-01/2020-12-31".parse::<DateRange>();
        assert!(matches!(result, Err(RangeError::Timestamp(_))));

        let result = "2020-12-31T00:00:00Z/2020-01-01T00:00:00Z".parse::<DateRange>();
        assert!(matches!(result, Err(RangeError::InvalidRange { .. })));
    }

    #[test]
    fn test_serde_string_format() {
        let range = range(ymd_utc(1990, 6, 15), ymd_utc(2000, 12, 31));

        let json = serde_json::to_string(&range).expect("failed to serialize range to JSON");
        assert_eq!(json, r#""1990-06-15T00:00:00Z/2000-12-31T00:00:00Z""#);

        let parsed: DateRange = serde_json::from_str(&json).expect("failed to deserialize range from JSON");
        assert_eq!(range, parsed);
    }

    #[test]
    fn test_serde_rejects_inverted_range() {
        let json = r#""2000-12-31T00:00:00Z/1990-06-15T00:00:00Z""#;
        let result: Result<DateRange, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
