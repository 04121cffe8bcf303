use crate::consts::{MARCH, WEEKDAY_NAMES};
use crate::prelude::*;

/// Day of the week, ordered as Zeller's congruence numbers them (Saturday first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Weekday {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Computes the weekday of a Gregorian date with Zeller's congruence.
    ///
    /// January and February count as months 13 and 14 of the previous year, so
    /// for year 0 the effective year is -1. Division and modulo are floored
    /// (Euclidean) so that case still lands on the right day.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn of(day: u8, month: u8, year: u32) -> Self {
        let (mut m, mut y) = (i64::from(month), i64::from(year));
        if month < MARCH {
            m += 12;
            y -= 1;
        }

        let k = y.rem_euclid(100);
        let j = y.div_euclid(100);
        let h = i64::from(day) + (13 * (m + 1)) / 5 + k + k / 4 + j.div_euclid(4) - 2 * j;

        // rem_euclid(7) is always in 0..7
        Self::ALL[h.rem_euclid(7) as usize]
    }

    /// Zeller index of this weekday (0 = Saturday, 6 = Friday).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// English name of this weekday.
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }
}

/// English weekday name for (day, month, year).
pub fn weekday_name(day: u8, month: u8, year: u32) -> &'static str {
    Weekday::of(day, month, year).name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_weekdays() {
        struct TestCase {
            date:     (u8, u8, u32),
            expected: Weekday,
        }

        let cases = [
            TestCase {
                date:     (1, 1, 2024),
                expected: Weekday::Monday,
            },
            TestCase {
                date:     (4, 7, 1776),
                expected: Weekday::Thursday,
            },
            TestCase {
                date:     (15, 6, 2020),
                expected: Weekday::Monday,
            },
            TestCase {
                date:     (29, 2, 2024),
                expected: Weekday::Thursday,
            },
            TestCase {
                date:     (1, 1, 2000),
                expected: Weekday::Saturday,
            },
            TestCase {
                date:     (31, 12, 1999),
                expected: Weekday::Friday,
            },
            TestCase {
                date:     (1, 3, 1900),
                expected: Weekday::Thursday,
            },
        ];

        for case in &cases {
            let (d, m, y) = case.date;
            assert_eq!(Weekday::of(d, m, y), case.expected, "{d}/{m}/{y}");
        }
    }

    #[test]
    fn test_year_zero_uses_floor_division() {
        // Proleptic Gregorian 1/1/0 and 1/3/0 (year 0 is a leap year)
        assert_eq!(Weekday::of(1, 1, 0), Weekday::Saturday);
        assert_eq!(Weekday::of(29, 2, 0), Weekday::Tuesday);
        assert_eq!(Weekday::of(1, 3, 0), Weekday::Wednesday);
        assert_eq!(Weekday::of(31, 12, 0), Weekday::Sunday);
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(1, 1, 2024), "Monday");
        assert_eq!(weekday_name(4, 7, 1776), "Thursday");
    }

    #[test]
    fn test_display_matches_name() {
        for weekday in Weekday::ALL {
            assert_eq!(weekday.to_string(), weekday.name());
        }
    }

    #[test]
    fn test_index_order() {
        assert_eq!(Weekday::Saturday.index(), 0);
        assert_eq!(Weekday::Monday.index(), 2);
        assert_eq!(Weekday::Friday.index(), 6);
    }
}
