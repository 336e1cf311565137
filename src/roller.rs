use std::fmt;

use chrono::Utc;
use tracing::{debug, instrument, trace, warn};

use crate::{
    COMPONENT_COUNT, CalendarAdapter, CalendarConfig, CalendarError, CalendarId, ComponentKind,
    ComponentOrder, DateRange, DateValue, Gregorian, Locale, RangeError, RowMapper, UtcOffset, Ymd,
};

/// Receives the owner-facing notifications of a [`DateRoller`].
///
/// Any `FnMut(DateValue)` closure is an observer that ignores row events.
pub trait RollerObserver {
    /// A component change was accepted and the selected date replaced.
    /// Fired once per accepted change, never for rejected ones.
    fn date_changed(&mut self, date: DateValue);

    /// A list settled on a row, before the change is evaluated.
    fn row_selected(&mut self, _row: usize, _component: usize) {}
}

impl<F: FnMut(DateValue)> RollerObserver for F {
    fn date_changed(&mut self, date: DateValue) {
        self(date);
    }
}

/// Instruction for the view to move one list to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reposition {
    pub component: usize,
    pub kind:      ComponentKind,
    pub row:       usize,
    pub animated:  bool,
}

/// Result of a single component change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The date was replaced; `repositions` moves lists that had to be corrected.
    Accepted {
        date:        DateValue,
        repositions: Vec<Reposition>,
    },
    /// The change would leave the range; every list snaps back.
    Rejected { repositions: Vec<Reposition> },
}

impl Outcome {
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn repositions(&self) -> &[Reposition] {
        match self {
            Self::Accepted { repositions, .. } | Self::Rejected { repositions } => repositions,
        }
    }
}

/// Month/day/year rolling date selector.
///
/// Holds the selected instant and the row each list currently shows. All
/// operations are synchronous and complete before returning; wrap the roller
/// in a lock or give it a single owner if it is shared.
pub struct DateRoller<C = Gregorian> {
    calendar:      C,
    config:        CalendarConfig,
    range:         DateRange,
    order:         ComponentOrder,
    date:          DateValue,
    selected_rows: [usize; COMPONENT_COUNT],
    observer:      Option<Box<dyn RollerObserver>>,
}

impl DateRoller<Gregorian> {
    /// Gregorian roller on today's date with the system locale and offset
    pub fn new() -> Self {
        Self::gregorian(CalendarConfig::system(), Utc::now())
    }

    pub fn gregorian(config: CalendarConfig, date: DateValue) -> Self {
        Self::with_calendar(Gregorian, config, date)
    }
}

impl Default for DateRoller<Gregorian> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CalendarAdapter> DateRoller<C> {
    /// Creates a roller with an unbounded range.
    /// The config's calendar id is replaced by the adapter's.
    pub fn with_calendar(calendar: C, config: CalendarConfig, date: DateValue) -> Self {
        let config = config.with_calendar(calendar.id());
        let order = ComponentOrder::for_locale(config.locale());
        let mut roller = Self {
            calendar,
            config,
            range: DateRange::unbounded(),
            order,
            date,
            selected_rows: [0; COMPONENT_COUNT],
            observer: None,
        };
        roller.relayout(false);
        roller
    }

    pub const fn calendar(&self) -> &C {
        &self.calendar
    }

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub const fn range(&self) -> &DateRange {
        &self.range
    }

    pub const fn order(&self) -> ComponentOrder {
        self.order
    }

    /// The last accepted (or explicitly set) date
    pub const fn date(&self) -> DateValue {
        self.date
    }

    /// The selected date split under the current config
    pub fn components(&self) -> Ymd {
        self.calendar.decompose(self.date, &self.config)
    }

    /// Row currently shown by a list
    pub fn selected_row(&self, component: usize) -> Option<usize> {
        self.selected_rows.get(component).copied()
    }

    pub const fn selected_rows(&self) -> [usize; COMPONENT_COUNT] {
        self.selected_rows
    }

    pub const fn rows(&self) -> RowMapper<'_, C> {
        RowMapper::new(&self.calendar)
    }

    pub fn is_in_range(&self, date: DateValue) -> bool {
        self.range.contains(date)
    }

    pub fn set_observer(&mut self, observer: impl RollerObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) -> Option<Box<dyn RollerObserver>> {
        self.observer.take()
    }

    /// Replaces the date without a range check and re-centers every list.
    /// The owner is not notified.
    pub fn set_date(&mut self, date: DateValue, animated: bool) -> Vec<Reposition> {
        self.date = date;
        self.relayout(animated)
    }

    /// Whether the current day still exists once `kind` takes `value`
    pub fn is_valid_value(&self, kind: ComponentKind, value: i32) -> bool {
        let Ymd { year, month, day } = self.components();
        match kind {
            ComponentKind::Year => day <= self.calendar.days_in_month(month, value),
            ComponentKind::Month => {
                u8::try_from(value).is_ok_and(|month| day <= self.calendar.days_in_month(month, year))
            },
            ComponentKind::Day => value <= i32::from(self.calendar.days_in_month(month, year)),
        }
    }

    /// Entry point for the view: list `component` settled on `row`.
    ///
    /// # Errors
    /// Returns `CalendarError::NoSuchComponent` for an unknown component, or
    /// whatever [`DateRoller::component_changed`] returns. On error the list
    /// keeps its previous row.
    #[instrument(level = "debug", skip(self))]
    pub fn select_row(&mut self, row: usize, component: usize) -> Result<Outcome, CalendarError> {
        let kind = self
            .order
            .kind_at(component)
            .ok_or(CalendarError::NoSuchComponent(component))?;

        if let Some(observer) = self.observer.as_mut() {
            observer.row_selected(row, component);
        }
        let previous = std::mem::replace(&mut self.selected_rows[component], row);

        let value = self.rows().decode(row, kind);
        self.component_changed(kind, value).inspect_err(|_| {
            self.selected_rows[component] = previous;
        })
    }

    /// Applies a new value for one component.
    ///
    /// An impossible day is clamped to the end of its month. If the result
    /// falls outside the range every list is moved back to the current date
    /// and nothing else changes. Otherwise the date is replaced, lists that
    /// no longer show the new date are moved, and the observer is told.
    ///
    /// # Errors
    /// Returns `CalendarError::ValueOutsideUnit` if `value` is not in the
    /// unit's maximum range, or the adapter's error if the clamped day does
    /// not compose. Neither changes any state.
    pub fn component_changed(&mut self, kind: ComponentKind, value: i32) -> Result<Outcome, CalendarError> {
        let (candidate, adjusted) = self.substitute(kind, value)?;
        let composed = self.calendar.compose(adjusted, &self.config)?;
        if !self.range.contains(composed) {
            debug!(%kind, value, date = %adjusted, "selection outside range, reverting");
            let repositions = self.relayout(true);
            return Ok(Outcome::Rejected { repositions });
        }

        // Only lists showing something other than the adjusted date move.
        // The changed list itself only animates when its day was clamped.
        let clamped = candidate.day != adjusted.day;
        let stale: Vec<(usize, ComponentKind)> = self
            .order
            .iter()
            .enumerate()
            .filter(|&(component, other)| self.rows().decode(self.selected_rows[component], other) != adjusted.get(other))
            .collect();
        let repositions = stale
            .into_iter()
            .map(|(component, other)| {
                let animated = other != kind || (other == ComponentKind::Day && clamped);
                self.reposition(component, other, adjusted.get(other), animated)
            })
            .collect();

        self.date = composed;
        debug!(%kind, value, date = %adjusted, "selection accepted");
        if let Some(observer) = self.observer.as_mut() {
            observer.date_changed(composed);
        }

        Ok(Outcome::Accepted {
            date: composed,
            repositions,
        })
    }

    /// The current triple with `kind` replaced by `value`, and the same
    /// triple with its day clamped to the end of the month.
    pub(crate) fn substitute(&self, kind: ComponentKind, value: i32) -> Result<(Ymd, Ymd), CalendarError> {
        let outside = CalendarError::ValueOutsideUnit { kind, value };
        if !self.calendar.maximum_range(kind).contains(value) {
            return Err(outside);
        }

        let candidate = self.components().with(kind, value).ok_or(outside)?;
        let adjusted = if self.is_valid_value(kind, value) {
            candidate
        } else {
            Ymd {
                day: self.calendar.days_in_month(candidate.month, candidate.year),
                ..candidate
            }
        };
        Ok((candidate, adjusted))
    }

    /// Sets both bounds at once. On error the previous range stays.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` unless minimum < maximum.
    pub fn set_range(&mut self, minimum: DateValue, maximum: DateValue) -> Result<(), RangeError> {
        self.apply_range(DateRange::new(minimum, maximum))
    }

    /// # Errors
    /// Returns `RangeError::InvalidRange` unless minimum < current maximum.
    pub fn set_minimum_date(&mut self, minimum: DateValue) -> Result<(), RangeError> {
        self.apply_range(self.range.with_minimum(minimum))
    }

    /// # Errors
    /// Returns `RangeError::InvalidRange` unless current minimum < maximum.
    pub fn set_maximum_date(&mut self, maximum: DateValue) -> Result<(), RangeError> {
        self.apply_range(self.range.with_maximum(maximum))
    }

    /// Installs an already validated range
    pub fn set_date_range(&mut self, range: DateRange) {
        debug!(%range, "date range updated");
        self.range = range;
    }

    /// Switches locale, which may reorder the lists. The date is kept.
    pub fn set_locale(&mut self, locale: Locale) -> Vec<Reposition> {
        let config = self.config.with_locale(locale);
        self.swap_config(config)
    }

    /// Switches timezone. The instant is kept, its decomposition may change.
    pub fn set_timezone(&mut self, timezone: UtcOffset) -> Vec<Reposition> {
        let config = self.config.with_timezone(timezone);
        self.swap_config(config)
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedCalendar` if the adapter implements
    /// a different calendar. The config is left untouched.
    pub fn set_calendar(&mut self, calendar: CalendarId) -> Result<Vec<Reposition>, CalendarError> {
        let config = self.config.with_calendar(calendar);
        self.set_config(config)
    }

    /// Replaces the whole config.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedCalendar` if the config names a
    /// calendar the adapter does not implement.
    pub fn set_config(&mut self, config: CalendarConfig) -> Result<Vec<Reposition>, CalendarError> {
        let available = self.calendar.id();
        if config.calendar() != available {
            return Err(CalendarError::UnsupportedCalendar {
                requested: config.calendar(),
                available,
            });
        }
        Ok(self.swap_config(config))
    }

    fn swap_config(&mut self, config: CalendarConfig) -> Vec<Reposition> {
        debug!(
            locale = %config.locale(),
            timezone = %config.timezone(),
            calendar = %config.calendar(),
            "calendar config swapped"
        );
        self.order = ComponentOrder::for_locale(config.locale());
        self.config = config;
        self.relayout(false)
    }

    fn apply_range(&mut self, range: Result<DateRange, RangeError>) -> Result<(), RangeError> {
        let range = range.inspect_err(|err| warn!(%err, "refusing date range"))?;
        self.set_date_range(range);
        Ok(())
    }

    /// Centers every list on the current date
    fn relayout(&mut self, animated: bool) -> Vec<Reposition> {
        let ymd = self.components();
        let kinds: Vec<(usize, ComponentKind)> = self.order.iter().enumerate().collect();
        kinds
            .into_iter()
            .map(|(component, kind)| self.reposition(component, kind, ymd.get(kind), animated))
            .collect()
    }

    fn reposition(&mut self, component: usize, kind: ComponentKind, value: i32, animated: bool) -> Reposition {
        let row = self.rows().encode(kind, value);
        self.selected_rows[component] = row;
        trace!(component, %kind, value, row, animated, "reposition");
        Reposition {
            component,
            kind,
            row,
            animated,
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for DateRoller<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateRoller")
            .field("calendar", &self.calendar)
            .field("config", &self.config)
            .field("range", &self.range)
            .field("order", &self.order)
            .field("date", &self.date)
            .field("selected_rows", &self.selected_rows)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
