//! What a view needs to draw the rolling lists.

use crate::{
    Alignment, COMPONENT_COUNT, COMPONENT_PADDING, CalendarAdapter, ComponentKind, DateRoller, ROW_SPACE,
};

/// Read-only row content for the three rolling lists.
///
/// Components are indexed left to right in the roller's current
/// [`ComponentOrder`](crate::ComponentOrder). Unknown components have no rows.
pub trait RowContent {
    fn component_count(&self) -> usize;

    fn row_count(&self, component: usize) -> usize;

    /// Text for one row
    fn label(&self, row: usize, component: usize) -> Option<String>;

    fn alignment(&self, component: usize) -> Option<Alignment>;

    /// Whether choosing this row would be accepted.
    ///
    /// The row's value is substituted into the current date and the day is
    /// clamped the same way a selection is; the row is enabled when the
    /// result lies inside the range.
    fn is_row_enabled(&self, row: usize, component: usize) -> bool;

    /// Width of the widest label plus padding, in whatever unit `measure` uses
    fn component_width(&self, component: usize, measure: &dyn Fn(&str) -> f32) -> f32;
}

impl<C: CalendarAdapter> DateRoller<C> {
    fn value_label(&self, kind: ComponentKind, value: i32) -> String {
        match kind {
            ComponentKind::Month => u8::try_from(value).map_or_else(
                |_| value.to_string(),
                |month| self.calendar().month_name(month, self.config().locale()),
            ),
            ComponentKind::Day | ComponentKind::Year => value.to_string(),
        }
    }
}

impl<C: CalendarAdapter> RowContent for DateRoller<C> {
    fn component_count(&self) -> usize {
        COMPONENT_COUNT
    }

    fn row_count(&self, component: usize) -> usize {
        if self.order().kind_at(component).is_some() {
            ROW_SPACE
        } else {
            0
        }
    }

    fn label(&self, row: usize, component: usize) -> Option<String> {
        let kind = self.order().kind_at(component)?;
        let value = self.rows().decode(row, kind);
        Some(self.value_label(kind, value))
    }

    fn alignment(&self, component: usize) -> Option<Alignment> {
        self.order().kind_at(component).map(Alignment::from)
    }

    fn is_row_enabled(&self, row: usize, component: usize) -> bool {
        let Some(kind) = self.order().kind_at(component) else {
            return false;
        };
        let value = self.rows().decode(row, kind);
        self.substitute(kind, value)
            .and_then(|(_, adjusted)| self.calendar().compose(adjusted, self.config()))
            .is_ok_and(|date| self.is_in_range(date))
    }

    fn component_width(&self, component: usize, measure: &dyn Fn(&str) -> f32) -> f32 {
        let Some(kind) = self.order().kind_at(component) else {
            return 0.0;
        };
        let widest = self
            .calendar()
            .maximum_range(kind)
            .values()
            .map(|value| measure(&self.value_label(kind, value)))
            .fold(0.0_f32, f32::max);
        widest + COMPONENT_PADDING
    }
}
