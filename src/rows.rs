//! Row index ↔ calendar value mapping for the wrapping lists.
//!
//! Each list reports [`ROW_SPACE`] rows and cycles through its unit's values,
//! so a value appears every `count` rows. Encoding picks the occurrence
//! nearest the middle of the row space, leaving room to scroll either way.

use crate::{CalendarAdapter, ComponentKind, ROW_SPACE, UnitRange};

/// Value shown at `row` for a unit: `start + row mod count`
pub fn decode(row: usize, range: UnitRange) -> i32 {
    let count = range.count as usize;
    if count == 0 {
        return range.start;
    }
    // row % count < count <= u32::MAX
    #[allow(clippy::cast_possible_truncation)]
    let offset = (row % count) as u32;
    range.start.saturating_add_unsigned(offset)
}

/// Row near the middle of the row space that decodes to `value`.
///
/// Values outside the unit wrap like rows do, so this never fails.
pub fn encode(value: i32, range: UnitRange) -> usize {
    let count = range.count as usize;
    let half = ROW_SPACE / 2;
    if count == 0 {
        return half;
    }
    let offset = (i64::from(value) - i64::from(range.start)).rem_euclid(i64::from(range.count));
    // 0 <= offset < count
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let offset = offset as usize;
    half - half % count + offset
}

/// Row mapping backed by a calendar's maximum unit ranges.
#[derive(Debug, Clone, Copy)]
pub struct RowMapper<'a, C: ?Sized> {
    calendar: &'a C,
}

impl<'a, C: CalendarAdapter + ?Sized> RowMapper<'a, C> {
    pub const fn new(calendar: &'a C) -> Self {
        Self { calendar }
    }

    /// Calendar value selected by a row of the `kind` list
    pub fn decode(&self, row: usize, kind: ComponentKind) -> i32 {
        decode(row, self.calendar.maximum_range(kind))
    }

    /// Centered row that shows `value` in the `kind` list
    pub fn encode(&self, kind: ComponentKind, value: i32) -> usize {
        encode(value, self.calendar.maximum_range(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Gregorian;

    const SAMPLE_ROWS: [usize; 9] = [0, 1, 11, 12, 30, 31, 9_998, 16_383, ROW_SPACE - 1];

    #[test]
    fn test_decode_wraps_per_unit() {
        let rows = RowMapper::new(&Gregorian);
        assert_eq!(rows.decode(0, ComponentKind::Month), 1);
        assert_eq!(rows.decode(11, ComponentKind::Month), 12);
        assert_eq!(rows.decode(12, ComponentKind::Month), 1);
        assert_eq!(rows.decode(30, ComponentKind::Day), 31);
        assert_eq!(rows.decode(31, ComponentKind::Day), 1);
        assert_eq!(rows.decode(9_998, ComponentKind::Year), 9_999);
        assert_eq!(rows.decode(9_999, ComponentKind::Year), 1);
    }

    #[test]
    fn test_encode_centers() {
        let rows = RowMapper::new(&Gregorian);
        // half of 32767 is 16383; 16380, 16368 and 9999 are the unit-aligned rows below it
        assert_eq!(rows.encode(ComponentKind::Month, 1), 16_380);
        assert_eq!(rows.encode(ComponentKind::Month, 2), 16_381);
        assert_eq!(rows.encode(ComponentKind::Day, 1), 16_368);
        assert_eq!(rows.encode(ComponentKind::Day, 28), 16_395);
        assert_eq!(rows.encode(ComponentKind::Year, 2020), 12_018);
    }

    #[test]
    fn test_encoded_rows_stay_in_row_space() {
        let rows = RowMapper::new(&Gregorian);
        for kind in ComponentKind::ALL {
            for value in Gregorian.maximum_range(kind).values() {
                let row = rows.encode(kind, value);
                assert!(row < ROW_SPACE, "{kind} {value} encoded past the row space");
                assert_eq!(rows.decode(row, kind), value);
            }
        }
    }

    #[test]
    fn test_round_trip_is_stable() {
        let rows = RowMapper::new(&Gregorian);
        for kind in ComponentKind::ALL {
            for row in SAMPLE_ROWS {
                let value = rows.decode(row, kind);
                assert_eq!(rows.decode(rows.encode(kind, value), kind), value, "{kind} row {row}");
            }
        }
    }

    #[test]
    fn test_wraparound() {
        let rows = RowMapper::new(&Gregorian);
        for kind in ComponentKind::ALL {
            let count = Gregorian.maximum_range(kind).count as usize;
            for row in SAMPLE_ROWS {
                for k in 1..4 {
                    let shifted = row + k * count;
                    if shifted >= ROW_SPACE {
                        break;
                    }
                    assert_eq!(rows.decode(shifted, kind), rows.decode(row, kind), "{kind} row {row} + {k}*{count}");
                }
            }
        }
    }

    #[test]
    fn test_encode_wraps_out_of_unit_values() {
        let months = UnitRange::new(1, 12);
        assert_eq!(encode(13, months), encode(1, months));
        assert_eq!(encode(0, months), encode(12, months));
    }

    #[test]
    fn test_empty_unit() {
        let empty = UnitRange::new(7, 0);
        assert_eq!(decode(123, empty), 7);
        assert_eq!(encode(7, empty), ROW_SPACE / 2);
    }
}
