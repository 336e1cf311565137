/// Earliest year offered by the year list
pub const MIN_YEAR: i32 = 1;
/// Latest year offered by the year list (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;
/// Longest month length in the Gregorian calendar
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days per month in a common year, indexed by month number (index 0 is a placeholder)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// Gregorian leap rule: every 4th year, except centuries not divisible by 400
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
pub(crate) const CENTURY_CYCLE: i32 = 100;
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Number of rows reported for every rolling list.
///
/// Large enough to feel endless, small enough that centering never overflows
/// a 16-bit row index.
pub const ROW_SPACE: usize = i16::MAX as usize;

/// Number of rolling lists (year, month, day)
pub const COMPONENT_COUNT: usize = 3;

/// Horizontal padding added to the widest label of a component
pub const COMPONENT_PADDING: f32 = 20.0;

/// Separator between minimum and maximum in a serialized range
pub const RANGE_SEPARATOR: char = '/';
