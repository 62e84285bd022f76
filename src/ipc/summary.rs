//! The "latest value" summary cards.

use crate::ipc::{
    lookup::{format_index_value, format_yoy_change},
    observation::format_month_label,
    series::Series,
};

/// Shown on the latest cards when the dataset has no observations.
pub const NOT_AVAILABLE_TEXT: &str = "N/A";

/// The text of the two cards describing the most recent observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestSummary {
    /// The month of the latest observation, e.g. "Jun-2025".
    pub date_label: String,
    /// The latest index value with two decimals.
    pub index_value: String,
    /// The latest annual change with two decimals and a percent sign.
    pub yoy_value: String,
}

impl LatestSummary {
    /// Summarise the last observation of `series`.
    pub fn from_series(series: &Series) -> Self {
        match series.latest() {
            Some(point) => Self {
                date_label: format_month_label(point.month),
                index_value: format_index_value(point.index_value),
                yoy_value: format_yoy_change(point.yoy_change),
            },
            None => Self {
                date_label: NOT_AVAILABLE_TEXT.to_owned(),
                index_value: NOT_AVAILABLE_TEXT.to_owned(),
                yoy_value: NOT_AVAILABLE_TEXT.to_owned(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::ipc::{
        lookup::UNAVAILABLE_TEXT,
        series::{Series, test_utils::monthly_observations},
    };

    use super::{LatestSummary, NOT_AVAILABLE_TEXT};

    #[test]
    fn summarises_last_observation() {
        let mut values = vec![100.0; 12];
        values.push(103.5);
        let series = Series::new(monthly_observations(date!(2024 - 06 - 01), &values));

        let summary = LatestSummary::from_series(&series);

        assert_eq!(
            summary,
            LatestSummary {
                date_label: "Jun-2025".to_owned(),
                index_value: "103.50".to_owned(),
                yoy_value: "3.50%".to_owned(),
            }
        );
    }

    #[test]
    fn short_series_has_unavailable_change() {
        let series = Series::new(monthly_observations(date!(2024 - 01 - 01), &[150.0, 151.5]));

        let summary = LatestSummary::from_series(&series);

        assert_eq!(summary.date_label, "Feb-2024");
        assert_eq!(summary.index_value, "151.50");
        assert_eq!(summary.yoy_value, UNAVAILABLE_TEXT);
    }

    #[test]
    fn empty_series_uses_sentinel() {
        let summary = LatestSummary::from_series(&Series::empty());

        assert_eq!(summary.date_label, NOT_AVAILABLE_TEXT);
        assert_eq!(summary.index_value, NOT_AVAILABLE_TEXT);
        assert_eq!(summary.yoy_value, NOT_AVAILABLE_TEXT);
    }
}
