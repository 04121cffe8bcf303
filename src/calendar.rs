use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY, MONTH_NAMES,
};

/// Returns true for Gregorian leap years.
pub const fn is_leap_year(year: u32) -> bool {
    if year % GREGORIAN_CYCLE == 0 {
        return true;
    }
    year % CENTURY_CYCLE != 0 && year % LEAP_YEAR_CYCLE == 0
}

/// Number of days in `month` of `year`, or `None` outside `1..=12`.
pub const fn days_in_month(month: u8, year: u32) -> Option<u8> {
    if month < JANUARY || month > MAX_MONTH {
        return None;
    }
    Some(month_length(month, year))
}

/// Length of a month already known to be in `1..=12`.
pub(crate) const fn month_length(month: u8, year: u32) -> u8 {
    match month {
        FEBRUARY if is_leap_year(year) => FEBRUARY_DAYS_LEAP,
        _ => DAYS_IN_MONTH[(month - 1) as usize],
    }
}

/// Checks whether (day, month, year) names a real Gregorian date.
///
/// Years are unsigned, so the `year >= 0` requirement always holds.
pub const fn is_valid_date(day: u8, month: u8, year: u32) -> bool {
    month >= 1
        && month <= MAX_MONTH
        && day >= MIN_DAY
        && (day <= DAYS_IN_MONTH[(month - 1) as usize]
            || (day == FEBRUARY_DAYS_LEAP && month == FEBRUARY && is_leap_year(year)))
}

/// English name of `month`, or `None` outside `1..=12`.
pub fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get(usize::from(month).checked_sub(1)?).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        0,
                is_leap:     true,
                description: "year zero is divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(month, 2024), Some(31), "Month {month} should have 31 days");
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(month, 2024), Some(30), "Month {month} should have 30 days");
        }
        assert_eq!(days_in_month(2, 2023), Some(28));
        assert_eq!(days_in_month(2, 2024), Some(29));
        assert_eq!(days_in_month(2, 1900), Some(28), "Century year not divisible by 400");
        assert_eq!(days_in_month(2, 2000), Some(29), "Century year divisible by 400");
    }

    #[test]
    fn test_days_in_month_rejects_out_of_range_months() {
        assert_eq!(days_in_month(0, 2024), None);
        assert_eq!(days_in_month(13, 2024), None);
        assert_eq!(days_in_month(u8::MAX, 2024), None);
    }

    #[test]
    fn test_is_valid_date_boundaries() {
        assert!(is_valid_date(29, 2, 2024));
        assert!(!is_valid_date(29, 2, 2023));
        assert!(!is_valid_date(30, 2, 2024));
        assert!(!is_valid_date(31, 4, 2024));
        assert!(is_valid_date(30, 4, 2024));
        assert!(!is_valid_date(0, 1, 2024));
        assert!(!is_valid_date(32, 1, 2024));
        assert!(is_valid_date(31, 12, 0));
        assert!(!is_valid_date(1, 0, 2024));
        assert!(!is_valid_date(1, 13, 2024));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(6), Some("June"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
