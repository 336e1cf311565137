//! Headless logic for month/day/year "rolling" date pickers.
//!
//! A [`DateRoller`] owns the selected date and three rolling lists, one per
//! calendar unit. Each list exposes a large wrapping row space so a view can
//! fake endless scrolling. When the user settles on a row the roller decodes
//! it, clamps impossible days (January 31st becomes February 28th when the
//! month moves), checks the result against the configured [`DateRange`] and
//! either accepts it or snaps every list back to the last accepted date.
//!
//! Rendering, layout and gestures are left to the host. The host reads row
//! content through [`RowContent`] and applies the [`Reposition`]s returned by
//! every operation.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use date_roller::{CalendarConfig, CalendarId, ComponentKind, DateRoller, Outcome, UtcOffset};
//!
//! let config = CalendarConfig::new(CalendarId::Gregorian, "en-US".parse()?, UtcOffset::utc());
//! let jan_31 = Utc.with_ymd_and_hms(2023, 1, 31, 0, 0, 0).unwrap();
//! let mut roller = DateRoller::gregorian(config, jan_31);
//!
//! let outcome = roller.component_changed(ComponentKind::Month, 2)?;
//! assert!(matches!(outcome, Outcome::Accepted { .. }));
//! assert_eq!(roller.components().to_string(), "2023-02-28");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod calendar;
mod config;
mod consts;
mod content;
mod ordering;
mod prelude;
mod range;
mod roller;
mod rows;
#[cfg(test)]
mod test_utils;
mod types;

pub use calendar::{CalendarAdapter, CalendarError, Gregorian, UnitRange};
pub use config::{CalendarConfig, CalendarId, Locale, UtcOffset};
pub use consts::*;
pub use content::RowContent;
pub use ordering::ComponentOrder;
pub use range::{DateRange, RangeError};
pub use roller::{DateRoller, Outcome, Reposition, RollerObserver};
pub use rows::RowMapper;
pub use types::{Alignment, ComponentKind, Ymd, days_in_month, is_leap_year};

use crate::prelude::*;

/// The selected instant. Decomposed into year/month/day through a
/// [`CalendarConfig`]; the instant itself never depends on locale or timezone.
pub type DateValue = chrono::DateTime<chrono::Utc>;

/// Errors from parsing configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigError {
    #[display(fmt = "Invalid locale identifier: {_0:?}")]
    InvalidLocale(String),
    #[display(fmt = "Invalid UTC offset: {_0} seconds (must be within ±86399)")]
    InvalidUtcOffset(i32),
    #[display(fmt = "Unknown calendar: {_0:?}")]
    UnknownCalendar(String),
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::InvalidLocale("xx yy".to_owned()).to_string(),
            r#"Invalid locale identifier: "xx yy""#
        );
        assert_eq!(
            ConfigError::InvalidUtcOffset(90_000).to_string(),
            "Invalid UTC offset: 90000 seconds (must be within ±86399)"
        );
        assert_eq!(
            ConfigError::UnknownCalendar("hebrew".to_owned()).to_string(),
            r#"Unknown calendar: "hebrew""#
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(ROW_SPACE, 32767);
        assert_eq!(COMPONENT_COUNT, ComponentKind::ALL.len());
        assert_eq!(MAX_YEAR, 9999);
    }
}
