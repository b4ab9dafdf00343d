//! Shared reporting primitives.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
/// Restricts an expense set to a calendar window relative to a reference date.
///
/// Selections are mutually exclusive: `Week` is the trailing seven days up
/// to the reference, `Month` and `Year` match the reference's calendar
/// month/year, `Day` matches the reference date itself.
pub enum TimeRange {
    Day,
    Week,
    Month,
    Year,
    #[default]
    All,
}

impl TimeRange {
    /// Parses the wire value of a `timeRange` query parameter.
    ///
    /// Unrecognized values fall back to [`TimeRange::All`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "day" | "today" => TimeRange::Day,
            "week" => TimeRange::Week,
            "month" => TimeRange::Month,
            "year" => TimeRange::Year,
            _ => TimeRange::All,
        }
    }

    /// Whether `date` falls inside the window anchored at `reference`.
    pub fn contains(self, date: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            TimeRange::Day => date == reference,
            TimeRange::Week => date >= reference - Duration::days(7),
            TimeRange::Month => {
                date.year() == reference.year() && date.month() == reference.month()
            }
            TimeRange::Year => date.year() == reference.year(),
            TimeRange::All => true,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
            TimeRange::All => "all",
        };
        f.write_str(label)
    }
}
