use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
};
use crate::prelude::*;

/// One of the three rolling lists that make up a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum ComponentKind {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

impl ComponentKind {
    /// Every kind, in calendar significance order
    pub const ALL: [Self; 3] = [Self::Year, Self::Month, Self::Day];
}

/// Horizontal alignment hint for a component's labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Alignment {
    #[display(fmt = "leading")]
    Leading,
    #[display(fmt = "center")]
    Center,
    #[display(fmt = "trailing")]
    Trailing,
}

impl From<ComponentKind> for Alignment {
    fn from(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Month => Self::Leading,
            ComponentKind::Day => Self::Center,
            ComponentKind::Year => Self::Trailing,
        }
    }
}

/// A decomposed (year, month, day) triple.
///
/// Not guaranteed to name a real calendar day: `with` happily produces
/// February 31st. Validity is the calendar's call, see
/// [`CalendarAdapter::days_in_month`](crate::CalendarAdapter::days_in_month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct Ymd {
    pub year:  i32,
    pub month: u8,
    pub day:   u8,
}

impl Ymd {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the value of one component
    pub fn get(self, kind: ComponentKind) -> i32 {
        match kind {
            ComponentKind::Year => self.year,
            ComponentKind::Month => i32::from(self.month),
            ComponentKind::Day => i32::from(self.day),
        }
    }

    /// Replaces one component without any validation.
    /// Returns `None` if the value does not fit the field at all.
    pub fn with(self, kind: ComponentKind, value: i32) -> Option<Self> {
        match kind {
            ComponentKind::Year => Some(Self { year: value, ..self }),
            ComponentKind::Month => u8::try_from(value).ok().map(|month| Self { month, ..self }),
            ComponentKind::Day => u8::try_from(value).ok().map(|day| Self { day, ..self }),
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, or 0 for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH.get(usize::from(month)).copied().unwrap_or(0)
    }
}
