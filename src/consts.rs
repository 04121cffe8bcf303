/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March, the first month after the leap day
pub const MARCH: u8 = 3;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is January)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// English month names (index 0 is January)
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names in Zeller's congruence order (index 0 is Saturday)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u32 = 400;

/// Number of days in one full 400-year Gregorian cycle
pub const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;

/// Day used by `CalendarDate::default()`
pub const DEFAULT_DAY: u8 = 1;
/// Month used by `CalendarDate::default()`
pub const DEFAULT_MONTH: u8 = 1;
/// Year used by `CalendarDate::default()`
pub const DEFAULT_YEAR: u32 = 2024;

/// Separator between day, month and year in the textual form (`D/M/Y`)
pub const DATE_SEPARATOR: char = '/';
/// Separator used by the dotted weekday format (`Monday 15.6.2020`)
pub const DOTTED_SEPARATOR: char = '.';
