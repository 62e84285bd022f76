//! Monthly observations of the consumer price index and the month labels used
//! to read and display them.

use time::{Date, Month};

/// A calendar year, as offered by the year picker.
pub type Year = i32;

/// One monthly reading of the consumer price index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// The first day of the month the reading belongs to.
    pub month: Date,
    /// The value of the index for that month.
    pub index_value: f64,
}

impl Observation {
    /// The year of the observation's month.
    pub fn year(&self) -> Year {
        self.month.year()
    }
}

const MONTH_ABBREVIATIONS: [(Month, &str); 12] = [
    (Month::January, "Jan"),
    (Month::February, "Feb"),
    (Month::March, "Mar"),
    (Month::April, "Apr"),
    (Month::May, "May"),
    (Month::June, "Jun"),
    (Month::July, "Jul"),
    (Month::August, "Aug"),
    (Month::September, "Sep"),
    (Month::October, "Oct"),
    (Month::November, "Nov"),
    (Month::December, "Dec"),
];

/// The three-letter English abbreviation for `month`, e.g. "Jan".
pub fn month_abbreviation(month: Month) -> &'static str {
    MONTH_ABBREVIATIONS
        .iter()
        .find(|(candidate, _)| *candidate == month)
        .map(|(_, abbreviation)| *abbreviation)
        .unwrap_or("???")
}

/// Look up a month by its three-letter English abbreviation, ignoring case.
pub fn month_from_abbreviation(text: &str) -> Option<Month> {
    MONTH_ABBREVIATIONS
        .iter()
        .find(|(_, abbreviation)| abbreviation.eq_ignore_ascii_case(text))
        .map(|(month, _)| *month)
}

/// Formats a month as shown on the summary cards, e.g. "Jan-2024".
pub fn format_month_label(month: Date) -> String {
    format!("{}-{}", month_abbreviation(month.month()), month.year())
}
