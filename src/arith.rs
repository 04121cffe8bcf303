use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::calendar::month_length;
use crate::consts::{DAYS_PER_GREGORIAN_CYCLE, DECEMBER, GREGORIAN_CYCLE, JANUARY, MIN_DAY};
use crate::{CalendarDate, DateError};

/// 146 097 as u64, for the forward/backward walkers
const CYCLE_DAYS: u64 = DAYS_PER_GREGORIAN_CYCLE.unsigned_abs();

impl CalendarDate {
    /// Shifts the date forward by `days` (backward when negative).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result would fall before 1/1/0 or
    /// after the last day of year `u32::MAX`. `self` is never modified.
    pub fn checked_add_days(self, days: i64) -> Result<Self, DateError> {
        let shifted = if days < 0 {
            self.backward(days.unsigned_abs())
        } else {
            self.forward(days.unsigned_abs())
        };
        shifted.ok_or_else(|| self.out_of_range(days))
    }

    /// Shifts the date backward by `days` (forward when negative).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` under the same conditions as
    /// [`CalendarDate::checked_add_days`].
    pub fn checked_sub_days(self, days: i64) -> Result<Self, DateError> {
        let shifted = if days < 0 {
            self.forward(days.unsigned_abs())
        } else {
            self.backward(days.unsigned_abs())
        };
        shifted.ok_or_else(|| self.out_of_range(days.saturating_neg()))
    }

    /// Returns the date `days` days later.
    ///
    /// # Panics
    /// Panics if the result is out of range; see [`CalendarDate::checked_add_days`].
    pub fn add_days(self, days: i64) -> Self {
        self.checked_add_days(days).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Returns the date `days` days earlier.
    ///
    /// # Panics
    /// Panics if the result is out of range; see [`CalendarDate::checked_sub_days`].
    pub fn subtract_days(self, days: i64) -> Self {
        self.checked_sub_days(days).unwrap_or_else(|err| panic!("{err}"))
    }

    const fn out_of_range(self, offset: i64) -> DateError {
        DateError::OutOfRange {
            day: self.day,
            month: self.month,
            year: self.year,
            offset,
        }
    }

    /// Walks forward one month chunk at a time, after skipping whole 400-year cycles.
    fn forward(self, mut days: u64) -> Option<Self> {
        let cycles = days / CYCLE_DAYS;
        days %= CYCLE_DAYS;

        let (mut day, mut month) = (self.day, self.month);
        let mut year = self
            .year
            .checked_add(u32::try_from(cycles.checked_mul(u64::from(GREGORIAN_CYCLE))?).ok()?)?;

        loop {
            let remaining = u64::from(month_length(month, year) - day + 1);
            if remaining > days {
                day += u8::try_from(days).ok()?;
                break;
            }

            days -= remaining;
            day = MIN_DAY;
            if month == DECEMBER {
                month = JANUARY;
                year = year.checked_add(1)?;
            } else {
                month += 1;
            }
        }

        Some(Self { day, month, year })
    }

    /// Walks backward one month at a time, after skipping whole 400-year cycles.
    fn backward(self, mut days: u64) -> Option<Self> {
        let cycles = days / CYCLE_DAYS;
        days %= CYCLE_DAYS;

        let (mut day, mut month) = (self.day, self.month);
        let mut year = self
            .year
            .checked_sub(u32::try_from(cycles.checked_mul(u64::from(GREGORIAN_CYCLE))?).ok()?)?;

        loop {
            if u64::from(day) > days {
                day -= u8::try_from(days).ok()?;
                break;
            }

            days -= u64::from(day);
            if month == JANUARY {
                month = DECEMBER;
                year = year.checked_sub(1)?;
            } else {
                month -= 1;
            }
            day = month_length(month, year);
        }

        Some(Self { day, month, year })
    }
}

impl Add<i64> for CalendarDate {
    type Output = Self;

    fn add(self, days: i64) -> Self {
        self.add_days(days)
    }
}

impl Sub<i64> for CalendarDate {
    type Output = Self;

    fn sub(self, days: i64) -> Self {
        self.subtract_days(days)
    }
}

impl AddAssign<i64> for CalendarDate {
    fn add_assign(&mut self, days: i64) {
        *self = self.add_days(days);
    }
}

impl SubAssign<i64> for CalendarDate {
    fn sub_assign(&mut self, days: i64) {
        *self = self.subtract_days(days);
    }
}
