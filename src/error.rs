/// Error type for every fallible `CalendarDate` operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The (day, month, year) triple does not name a real Gregorian date.
    #[error("Invalid date: {day}/{month}/{year}")]
    InvalidDate { day: u32, month: u32, year: u32 },

    /// Text did not have the `D/M/Y` shape.
    #[error("Invalid date format: {0}")]
    Parse(String),

    /// Shifting the date by `offset` days would leave the representable year range.
    #[error("Date {day}/{month}/{year} shifted by {offset} days is out of range")]
    OutOfRange {
        day:    u8,
        month:  u8,
        year:   u32,
        offset: i64,
    },
}

impl DateError {
    pub(crate) fn invalid(day: impl Into<u32>, month: impl Into<u32>, year: u32) -> Self {
        Self::InvalidDate {
            day: day.into(),
            month: month.into(),
            year,
        }
    }
}
