//! Turns raw dataset rows into typed, chronologically sorted observations.
//!
//! Rows come from whatever loaded the dataset, so both columns may be text.
//! Index values may use a decimal comma ("150,0") and months are written as
//! an abbreviated month with a two-digit year ("Jan-24"). Rows that cannot be
//! parsed are skipped and logged; they never abort the dataset.

use time::Date;

use crate::ipc::observation::{Observation, month_from_abbreviation};

/// The month column of a raw row.
#[derive(Debug, Clone, PartialEq)]
pub enum RawMonth {
    /// A label such as "Jan-24".
    Label(String),
    /// A calendar date from a typed source. Any day of the month is accepted.
    Date(Date),
}

/// The index value column of a raw row.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A number from a typed source.
    Number(f64),
    /// Text such as "150,0" or "151.5".
    Text(String),
}

/// A single (month, index value) row as handed over by the dataset loader.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// The month the value belongs to.
    pub month: RawMonth,
    /// The index value.
    pub index_value: RawValue,
}

impl RawRow {
    /// Create a row where both columns are text.
    pub fn from_text(month: &str, index_value: &str) -> Self {
        Self {
            month: RawMonth::Label(month.to_owned()),
            index_value: RawValue::Text(index_value.to_owned()),
        }
    }
}

/// The reasons a single row is left out of the series.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RowParseWarning {
    /// The month is not in the "Jan-24" form.
    #[error("could not parse month \"{0}\"")]
    InvalidMonth(String),

    /// The index value is not a finite number.
    #[error("could not parse index value \"{0}\"")]
    InvalidIndexValue(String),
}

/// Parse `rows` into observations sorted ascending by month.
///
/// Malformed rows are dropped with a warning in the logs. Rows that share a
/// month are all kept, in their original order.
pub fn normalize(rows: &[RawRow]) -> Vec<Observation> {
    let mut observations: Vec<Observation> = rows
        .iter()
        .enumerate()
        .filter_map(|(row_number, row)| {
            parse_row(row)
                .inspect_err(|warning| tracing::warn!("skipping row {row_number}: {warning}"))
                .ok()
        })
        .collect();

    observations.sort_by_key(|observation| observation.month);

    tracing::debug!(
        "normalized {} of {} rows into observations",
        observations.len(),
        rows.len()
    );

    observations
}

/// Parse a single row.
pub fn parse_row(row: &RawRow) -> Result<Observation, RowParseWarning> {
    let month = parse_month(&row.month)?;
    let index_value = parse_index_value(&row.index_value)?;

    Ok(Observation { month, index_value })
}

/// Parse the month column into the first day of that month.
pub fn parse_month(month: &RawMonth) -> Result<Date, RowParseWarning> {
    match month {
        RawMonth::Label(label) => parse_month_label(label),
        RawMonth::Date(date) => Date::from_calendar_date(date.year(), date.month(), 1)
            .map_err(|_| RowParseWarning::InvalidMonth(date.to_string())),
    }
}

/// Parse a label such as "Jan-24" into the first day of that month.
///
/// Two-digit years 69 to 99 belong to the 1900s and 00 to 68 to the 2000s.
pub fn parse_month_label(label: &str) -> Result<Date, RowParseWarning> {
    let label = label.trim();
    let invalid = || RowParseWarning::InvalidMonth(label.to_owned());

    let (month_text, year_text) = label.split_once('-').ok_or_else(invalid)?;
    let month = month_from_abbreviation(month_text).ok_or_else(invalid)?;

    if year_text.len() != 2 || !year_text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid());
    }

    let two_digit_year: i32 = year_text.parse().map_err(|_| invalid())?;
    let year = if two_digit_year >= 69 {
        1900 + two_digit_year
    } else {
        2000 + two_digit_year
    };

    Date::from_calendar_date(year, month, 1).map_err(|_| invalid())
}

/// Parse the index value column, treating a decimal comma as a decimal point.
pub fn parse_index_value(value: &RawValue) -> Result<f64, RowParseWarning> {
    let number = match value {
        RawValue::Number(number) => *number,
        RawValue::Text(text) => text
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| RowParseWarning::InvalidIndexValue(text.clone()))?,
    };

    if number.is_finite() {
        Ok(number)
    } else {
        Err(RowParseWarning::InvalidIndexValue(number.to_string()))
    }
}
