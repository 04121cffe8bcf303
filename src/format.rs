use crate::CalendarDate;
use crate::consts::{DATE_SEPARATOR, DOTTED_SEPARATOR};

/// Textual layouts supported by [`CalendarDate::format`].
///
/// The `*Name` variants append a space and the weekday name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    /// `1/1/2024`
    #[default]
    DayMonthYear,
    /// `3/2/2024` for 2 March 2024
    MonthDayYear,
    /// `2024/3/2`
    YearMonthDay,
    /// `1/1/2024 Monday`
    DayMonthYearName,
    /// `3/2/2024 Saturday`
    MonthDayYearName,
    /// `2024/3/2 Saturday`
    YearMonthDayName,
    /// `15/June/2020`
    DayMonthNameYear,
    /// `Monday 15.6.2020`
    WeekdayDayMonthYearDotted,
}

impl DateFormat {
    /// All supported formats
    pub const ALL: [Self; 8] = [
        Self::DayMonthYear,
        Self::MonthDayYear,
        Self::YearMonthDay,
        Self::DayMonthYearName,
        Self::MonthDayYearName,
        Self::YearMonthDayName,
        Self::DayMonthNameYear,
        Self::WeekdayDayMonthYearDotted,
    ];

    /// Whether the weekday name is appended after the date
    pub const fn has_weekday_suffix(self) -> bool {
        matches!(
            self,
            Self::DayMonthYearName | Self::MonthDayYearName | Self::YearMonthDayName
        )
    }
}

impl CalendarDate {
    /// Renders the date in the given layout.
    pub fn format(&self, format: DateFormat) -> String {
        let (d, m, y) = (self.day(), self.month(), self.year());
        let sep = DATE_SEPARATOR;

        let base = match format {
            DateFormat::DayMonthYear | DateFormat::DayMonthYearName => format!("{d}{sep}{m}{sep}{y}"),
            DateFormat::MonthDayYear | DateFormat::MonthDayYearName => format!("{m}{sep}{d}{sep}{y}"),
            DateFormat::YearMonthDay | DateFormat::YearMonthDayName => format!("{y}{sep}{m}{sep}{d}"),
            DateFormat::DayMonthNameYear => format!("{d}{sep}{}{sep}{y}", self.month_name()),
            DateFormat::WeekdayDayMonthYearDotted => {
                let dot = DOTTED_SEPARATOR;
                format!("{} {d}{dot}{m}{dot}{y}", self.weekday())
            }
        };

        if format.has_weekday_suffix() {
            format!("{base} {}", self.weekday())
        } else {
            base
        }
    }
}
