//! Shared helpers for unit tests.

use std::{cell::RefCell, rc::Rc};

use chrono::{TimeZone, Utc};

use crate::{CalendarConfig, CalendarId, DateRange, DateRoller, DateValue, RollerObserver, UtcOffset};

/// Midnight UTC of the given day
pub fn ymd_utc(year: i32, month: u32, day: u32) -> DateValue {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("test date should be valid")
}

/// Gregorian, `en-US`, UTC
pub fn utc_config() -> CalendarConfig {
    config_at("en-US", 0)
}

pub fn config_at(locale: &str, offset_seconds: i32) -> CalendarConfig {
    CalendarConfig::new(
        CalendarId::Gregorian,
        locale.parse().expect("test locale should parse"),
        UtcOffset::from_seconds(offset_seconds).expect("test offset should be valid"),
    )
}

pub fn range(min: DateValue, max: DateValue) -> DateRange {
    DateRange::new(min, max).expect("test range should be valid")
}

/// A UTC `en-US` roller with an unbounded range
pub fn roller_at(year: i32, month: u32, day: u32) -> DateRoller {
    DateRoller::gregorian(utc_config(), ymd_utc(year, month, day))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    DateChanged(DateValue),
    RowSelected { row: usize, component: usize },
}

/// Observer that records every notification into a shared log
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub events: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn dates(&self) -> Vec<DateValue> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::DateChanged(date) => Some(*date),
                Event::RowSelected { .. } => None,
            })
            .collect()
    }
}

impl RollerObserver for Recorder {
    fn date_changed(&mut self, date: DateValue) {
        self.events.borrow_mut().push(Event::DateChanged(date));
    }

    fn row_selected(&mut self, row: usize, component: usize) {
        self.events.borrow_mut().push(Event::RowSelected { row, component });
    }
}
