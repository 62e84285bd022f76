//! Projects the series onto the years being displayed.

use std::collections::BTreeSet;

use time::Date;

use crate::ipc::{
    observation::Year,
    series::{Series, SeriesPoint},
};

/// Renderer-agnostic chart data: three sequences over the same month axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartPayload {
    /// The x-axis.
    pub months: Vec<Date>,
    /// The index value for each month.
    pub index_values: Vec<f64>,
    /// The annual change for each month. `None` marks a gap that must not be
    /// interpolated.
    pub yoy_changes: Vec<Option<f64>>,
}

impl ChartPayload {
    /// Whether there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// The number of months on the x-axis.
    pub fn len(&self) -> usize {
        self.months.len()
    }
}

/// Select the points of `series` that fall in `years`.
///
/// The annual change is taken from the series as derived over the full
/// history, so a selection's first months keep their comparison against the
/// previous year even when that year is not selected.
pub fn project(series: &Series, years: &BTreeSet<Year>) -> ChartPayload {
    let mut points: Vec<&SeriesPoint> = series
        .points()
        .iter()
        .filter(|point| years.contains(&point.year()))
        .collect();
    points.sort_by_key(|point| point.month);

    ChartPayload {
        months: points.iter().map(|point| point.month).collect(),
        index_values: points.iter().map(|point| point.index_value).collect(),
        yoy_changes: points.iter().map(|point| point.yoy_change).collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use time::macros::date;

    use crate::ipc::{
        normalize::{RawRow, normalize},
        observation::Observation,
        series::{Series, test_utils::monthly_observations, year_over_year_changes},
    };

    use super::{ChartPayload, project};

    fn get_thirteen_month_series() -> Series {
        let mut values = vec![100.0; 12];
        values.push(110.0);

        Series::new(monthly_observations(date!(2023 - 01 - 01), &values))
    }

    #[test]
    fn selects_only_chosen_years_in_order() {
        let series = get_thirteen_month_series();

        let payload = project(&series, &BTreeSet::from([2024]));

        assert_eq!(payload.months, vec![date!(2024 - 01 - 01)]);
        assert_eq!(payload.index_values, vec![110.0]);
    }

    #[test]
    fn keeps_change_derived_over_full_history() {
        let series = get_thirteen_month_series();

        let payload = project(&series, &BTreeSet::from([2024]));

        let change = payload.yoy_changes[0].expect("change should survive filtering");
        assert!((change - 10.0).abs() < 0.01);
    }

    #[test]
    fn rederiving_after_filtering_would_lose_the_change() {
        let series = get_thirteen_month_series();
        let filtered: Vec<Observation> = series
            .points()
            .iter()
            .filter(|point| point.year() == 2024)
            .map(|point| Observation {
                month: point.month,
                index_value: point.index_value,
            })
            .collect();

        let rederived = Series::new(filtered);
        let projected = project(&series, &BTreeSet::from([2024]));

        assert_eq!(rederived.points()[0].yoy_change, None);
        assert_eq!(
            year_over_year_changes(&projected.index_values),
            vec![None],
            "re-deriving over the filtered values has no lookback"
        );
        assert_ne!(projected.yoy_changes, vec![None]);
    }

    #[test]
    fn projection_is_idempotent() {
        let series = get_thirteen_month_series();
        let years = BTreeSet::from([2023, 2024]);

        assert_eq!(project(&series, &years), project(&series, &years));
    }

    #[test]
    fn no_matching_years_gives_empty_payload() {
        let series = get_thirteen_month_series();

        let payload = project(&series, &BTreeSet::from([1999]));

        assert!(payload.is_empty());
        assert_eq!(payload, ChartPayload::default());
    }

    #[test]
    fn empty_series_gives_empty_payload() {
        let payload = project(&Series::empty(), &BTreeSet::from([2024]));

        assert!(payload.is_empty());
    }

    #[test]
    fn two_row_scenario() {
        let rows = [
            RawRow::from_text("Jan-24", "150,0"),
            RawRow::from_text("Feb-24", "151,5"),
        ];
        let series = Series::new(normalize(&rows));

        let payload = project(&series, &BTreeSet::from([2024]));

        assert_eq!(payload.len(), 2);
        assert_eq!(payload.index_values, vec![150.0, 151.5]);
        assert_eq!(payload.yoy_changes, vec![None, None]);
    }
}
