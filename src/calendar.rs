//! The calendar capability the roller is built on.
//!
//! [`CalendarAdapter`] is everything the roller needs to know about a calendar
//! system. [`Gregorian`] implements it on top of `chrono`.

use chrono::{Datelike, Month, NaiveDate, TimeZone, Utc};

use crate::{
    CalendarConfig, CalendarId, ComponentKind, DateValue, Locale, MAX_DAY, MAX_MONTH, MAX_YEAR,
    MIN_DAY, MIN_YEAR, UtcOffset, Ymd, types,
};

/// The values a calendar unit can take: `start`, `start + 1`, ... for `count` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitRange {
    pub start: i32,
    pub count: u32,
}

impl UnitRange {
    pub const fn new(start: i32, count: u32) -> Self {
        Self { start, count }
    }

    /// Last value in the range (inclusive)
    pub const fn last(self) -> i32 {
        self.start.saturating_add_unsigned(self.count.saturating_sub(1))
    }

    pub const fn contains(self, value: i32) -> bool {
        self.count > 0 && value >= self.start && value <= self.last()
    }

    pub fn values(self) -> impl Iterator<Item = i32> {
        (0..self.count).map(move |offset| self.start.saturating_add_unsigned(offset))
    }
}

/// Errors raised while turning calendar components into instants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The triple does not name a day in this calendar.
    #[error("Invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    /// The day exists but cannot be expressed as an instant at this offset.
    #[error("Date {ymd} at offset {offset} is outside the representable range")]
    Unrepresentable { ymd: Ymd, offset: UtcOffset },

    /// A component value outside the unit's maximum range.
    #[error("Value {value} is not a valid {kind}")]
    ValueOutsideUnit { kind: ComponentKind, value: i32 },

    /// A component index past the last rolling list.
    #[error("No component at index {0}")]
    NoSuchComponent(usize),

    /// The configuration names a calendar this adapter does not implement.
    #[error("Calendar {requested} is not supported by the {available} adapter")]
    UnsupportedCalendar {
        requested: CalendarId,
        available: CalendarId,
    },
}

/// Calendar arithmetic supplied by the host.
///
/// Implementations must agree with themselves: every triple for which
/// `day <= days_in_month(month, year)` holds must compose, and
/// `decompose(compose(ymd))` must give `ymd` back under the same config.
pub trait CalendarAdapter {
    /// The calendar system this adapter implements
    fn id(&self) -> CalendarId;

    /// Number of days in `month` of `year`
    fn days_in_month(&self, month: u8, year: i32) -> u8;

    /// Splits an instant into its local year, month and day
    fn decompose(&self, date: DateValue, config: &CalendarConfig) -> Ymd;

    /// Builds the instant for local midnight of the given day
    ///
    /// # Errors
    /// Returns `CalendarError` if the triple is not a real day or cannot be
    /// represented at the configured offset.
    fn compose(&self, ymd: Ymd, config: &CalendarConfig) -> Result<DateValue, CalendarError>;

    /// Widest range of values a unit can ever take
    fn maximum_range(&self, kind: ComponentKind) -> UnitRange;

    /// Display name for a month
    fn month_name(&self, month: u8, locale: &Locale) -> String;
}

/// The proleptic Gregorian calendar.
///
/// Month names are English for every locale; hosts with localized names wrap
/// this adapter and override [`CalendarAdapter::month_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gregorian;

impl CalendarAdapter for Gregorian {
    fn id(&self) -> CalendarId {
        CalendarId::Gregorian
    }

    fn days_in_month(&self, month: u8, year: i32) -> u8 {
        types::days_in_month(year, month)
    }

    // chrono keeps month in 1..=12 and day in 1..=31
    #[allow(clippy::cast_possible_truncation)]
    fn decompose(&self, date: DateValue, config: &CalendarConfig) -> Ymd {
        let local = date.with_timezone(&config.timezone().fixed()).date_naive();
        Ymd::new(local.year(), local.month() as u8, local.day() as u8)
    }

    fn compose(&self, ymd: Ymd, config: &CalendarConfig) -> Result<DateValue, CalendarError> {
        let invalid = CalendarError::InvalidDate {
            year:  ymd.year,
            month: ymd.month,
            day:   ymd.day,
        };
        let midnight = NaiveDate::from_ymd_opt(ymd.year, u32::from(ymd.month), u32::from(ymd.day))
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or(invalid)?;

        config
            .timezone()
            .fixed()
            .from_local_datetime(&midnight)
            .single()
            .map(|local| local.with_timezone(&Utc))
            .ok_or(CalendarError::Unrepresentable {
                ymd,
                offset: config.timezone(),
            })
    }

    fn maximum_range(&self, kind: ComponentKind) -> UnitRange {
        match kind {
            ComponentKind::Year => UnitRange::new(MIN_YEAR, MAX_YEAR.abs_diff(MIN_YEAR) + 1),
            ComponentKind::Month => UnitRange::new(1, u32::from(MAX_MONTH)),
            ComponentKind::Day => UnitRange::new(i32::from(MIN_DAY), u32::from(MAX_DAY)),
        }
    }

    fn month_name(&self, month: u8, _locale: &Locale) -> String {
        Month::try_from(month).map_or_else(|_| month.to_string(), |m| m.name().to_owned())
    }
}
