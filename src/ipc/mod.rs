//! The IPC data pipeline.
//!
//! Raw rows are normalized into observations, the year-over-year change is
//! derived once over the full series, and each UI event is reconciled into
//! the set of years to project onto the chart. Nothing in here performs I/O.

mod lookup;
mod normalize;
mod observation;
mod projection;
mod selection;
mod series;
mod summary;

pub use lookup::{
    NO_SELECTION_TEXT, PointCards, UNAVAILABLE_TEXT, format_index_value, format_yoy_change,
    nearest_point, parse_point_date, select_point,
};
pub use normalize::{RawMonth, RawRow, RawValue, RowParseWarning, normalize, parse_row};
pub use observation::{Observation, Year, format_month_label};
pub use projection::{ChartPayload, project};
pub use selection::{RangeShortcut, Reconciler, SelectionEvent, SelectionState};
pub use series::{Series, SeriesPoint, YOY_LAG, year_over_year_changes};
pub use summary::{LatestSummary, NOT_AVAILABLE_TEXT};

#[cfg(test)]
pub(crate) use series::test_utils;

/// Normalize `rows` and derive the annual change over the resulting series.
pub fn build_series(rows: &[RawRow]) -> Series {
    Series::new(normalize(rows))
}
