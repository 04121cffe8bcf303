mod arith;
mod calendar;
mod consts;
mod error;
mod format;
mod prelude;
mod weekday;

pub use calendar::{days_in_month, is_leap_year, is_valid_date, month_name};
pub use consts::*;
pub use error::DateError;
pub use format::DateFormat;
pub use weekday::{Weekday, weekday_name};

use crate::prelude::*;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::str::FromStr;

/// A proleptic Gregorian calendar date.
///
/// Every value names a real date: construction, the setters and arithmetic all
/// validate before committing, and a failed operation leaves the value as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{day}/{month}/{year}")]
pub struct CalendarDate {
    day:   u8,
    month: u8,
    year:  u32,
}

impl CalendarDate {
    /// Creates a date from its day, month and year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the triple is not a real date.
    pub fn new(day: u8, month: u8, year: u32) -> Result<Self, DateError> {
        if !is_valid_date(day, month, year) {
            return Err(DateError::invalid(day, month, year));
        }
        Ok(Self { day, month, year })
    }

    /// Parses a `D/M/Y` string, e.g. `15/6/2024`.
    ///
    /// # Errors
    /// Returns `DateError::Parse` if the text is not three decimal numbers joined by
    /// exactly two `/`, or `DateError::InvalidDate` if the numbers are not a real date.
    pub fn from_text(s: &str) -> Result<Self, DateError> {
        s.parse()
    }

    /// Returns the day of the month (1..=31)
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the year
    pub const fn year(&self) -> u32 {
        self.year
    }

    /// Replaces the day, keeping month and year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` and leaves `self` unchanged if the result is not a real date.
    pub fn set_day(&mut self, day: u8) -> Result<(), DateError> {
        self.set(day, self.month, self.year)
    }

    /// Replaces the month, keeping day and year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` and leaves `self` unchanged if the result is not a real date.
    pub fn set_month(&mut self, month: u8) -> Result<(), DateError> {
        self.set(self.day, month, self.year)
    }

    /// Replaces the year, keeping day and month. Fails for 29 February in a non-leap year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` and leaves `self` unchanged if the result is not a real date.
    pub fn set_year(&mut self, year: u32) -> Result<(), DateError> {
        self.set(self.day, self.month, year)
    }

    /// Replaces all three fields at once.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` and leaves `self` unchanged if the triple is not a real date.
    pub fn set(&mut self, day: u8, month: u8, year: u32) -> Result<(), DateError> {
        *self = Self::new(day, month, year)?;
        Ok(())
    }

    /// Whether this date falls in a leap year
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        calendar::month_length(self.month, self.year)
    }

    /// Day of the week
    pub fn weekday(&self) -> Weekday {
        Weekday::of(self.day, self.month, self.year)
    }

    /// English name of the day of the week
    pub fn weekday_name(&self) -> &'static str {
        self.weekday().name()
    }

    /// English name of the month
    pub const fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    fn parse_component(token: &str, s: &str) -> Result<u32, DateError> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::Parse(s.to_owned()));
        }
        token.parse::<u32>().map_err(|_| DateError::Parse(s.to_owned()))
    }
}

impl Default for CalendarDate {
    /// 1 January 2024
    fn default() -> Self {
        Self {
            day:   DEFAULT_DAY,
            month: DEFAULT_MONTH,
            year:  DEFAULT_YEAR,
        }
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(DateError::Parse(s.to_owned()));
        };

        let day = Self::parse_component(day, s)?;
        let month = Self::parse_component(month, s)?;
        let year = Self::parse_component(year, s)?;

        match (u8::try_from(day), u8::try_from(month)) {
            (Ok(d), Ok(m)) => Self::new(d, m, year),
            _ => Err(DateError::InvalidDate { day, month, year }),
        }
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl TryFrom<(u8, u8, u32)> for CalendarDate {
    type Error = DateError;

    fn try_from((day, month, year): (u8, u8, u32)) -> Result<Self, Self::Error> {
        Self::new(day, month, year)
    }
}

impl From<CalendarDate> for (u8, u8, u32) {
    fn from(date: CalendarDate) -> Self {
        (date.day, date.month, date.year)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
