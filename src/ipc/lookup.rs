//! Finds the observation behind a chart click and formats it for the
//! "selected" summary cards.

use time::{
    Date, PrimitiveDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::ipc::{
    observation::format_month_label,
    series::{Series, SeriesPoint},
};

/// Shown on the value cards before a point has been clicked.
pub const NO_SELECTION_TEXT: &str = "Select a point";

/// Shown instead of an annual change that cannot be computed.
pub const UNAVAILABLE_TEXT: &str = "Unavailable";

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");
const DATE_TIME_FORMATS: [&[BorrowedFormatItem]; 3] = [
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
];

/// The text of the two "selected" summary cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointCards {
    /// The month of the selected point, e.g. "Jan-2024".
    pub date_label: String,
    /// The index value with two decimals.
    pub index_value: String,
    /// The month label repeated on the annual change card.
    pub yoy_label: String,
    /// The annual change with two decimals and a percent sign, or
    /// [UNAVAILABLE_TEXT].
    pub yoy_value: String,
}

impl PointCards {
    /// The placeholder shown when no point is selected.
    pub fn no_selection() -> Self {
        Self {
            date_label: String::new(),
            index_value: NO_SELECTION_TEXT.to_owned(),
            yoy_label: String::new(),
            yoy_value: NO_SELECTION_TEXT.to_owned(),
        }
    }

    fn from_point(point: &SeriesPoint) -> Self {
        let label = format_month_label(point.month);

        Self {
            date_label: label.clone(),
            index_value: format_index_value(point.index_value),
            yoy_label: label,
            yoy_value: format_yoy_change(point.yoy_change),
        }
    }
}

/// Formats an index value with two decimals, e.g. "150.00".
pub fn format_index_value(value: f64) -> String {
    format!("{value:.2}")
}

/// Formats an annual change with two decimals and a percent sign, e.g.
/// "10.00%", or [UNAVAILABLE_TEXT] when there is no change.
pub fn format_yoy_change(change: Option<f64>) -> String {
    match change {
        Some(change) => format!("{change:.2}%"),
        None => UNAVAILABLE_TEXT.to_owned(),
    }
}

/// The point whose month is closest in time to `at`.
///
/// Ties go to the point that comes first in the series.
pub fn nearest_point(series: &Series, at: PrimitiveDateTime) -> Option<&SeriesPoint> {
    series
        .points()
        .iter()
        .min_by_key(|point| (point.month.midnight() - at).abs())
}

/// The summary cards for a click at `at`, or the placeholder when nothing
/// was clicked or the series is empty.
pub fn select_point(series: &Series, at: Option<PrimitiveDateTime>) -> PointCards {
    at.and_then(|at| nearest_point(series, at))
        .map(PointCards::from_point)
        .unwrap_or_else(PointCards::no_selection)
}

/// Parse the date sent by a chart click.
///
/// Accepts "2024-01-31", "2024-01-31T12:00:00", "2024-01-31 12:00:00" and
/// "2024-01-31 12:00". Returns `None` for anything else.
pub fn parse_point_date(text: &str) -> Option<PrimitiveDateTime> {
    let text = text.trim();

    if let Ok(date) = Date::parse(text, &DATE_FORMAT) {
        return Some(date.midnight());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(text, format).ok())
}
