//! The enriched time series and the year-over-year metric derived from it.
//!
//! The annual change of a point is only meaningful relative to the point
//! twelve positions earlier in the *full* chronological series. [Series] is
//! therefore the only place the metric is computed: it is derived once when
//! the series is built, and everything downstream reads the stored value
//! instead of recomputing it over a filtered subset.

use std::collections::BTreeSet;

use time::Date;

use crate::ipc::observation::{Observation, Year};

/// How many positions back the year-over-year comparison looks.
pub const YOY_LAG: usize = 12;

/// An observation together with its derived annual change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    /// The first day of the month the reading belongs to.
    pub month: Date,
    /// The value of the index for that month.
    pub index_value: f64,
    /// Percent change against the point twelve positions earlier, if there is
    /// one and it is non-zero.
    pub yoy_change: Option<f64>,
}

impl SeriesPoint {
    /// The year of the point's month.
    pub fn year(&self) -> Year {
        self.month.year()
    }
}

/// The full IPC series, sorted ascending by month, with annual change derived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    points: Vec<SeriesPoint>,
}

impl Series {
    /// Sort `observations` by month and derive the annual change for each.
    pub fn new(mut observations: Vec<Observation>) -> Self {
        observations.sort_by_key(|observation| observation.month);

        let index_values: Vec<f64> = observations
            .iter()
            .map(|observation| observation.index_value)
            .collect();
        let changes = year_over_year_changes(&index_values);

        let points = observations
            .into_iter()
            .zip(changes)
            .map(|(observation, yoy_change)| SeriesPoint {
                month: observation.month,
                index_value: observation.index_value,
                yoy_change,
            })
            .collect();

        Self { points }
    }

    /// A series with no observations.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The points of the series in chronological order.
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// The number of points in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The distinct years in the series, in ascending order.
    pub fn years(&self) -> BTreeSet<Year> {
        self.points.iter().map(SeriesPoint::year).collect()
    }

    /// The most recent point, if any.
    pub fn latest(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }

    /// The year of the most recent point, if any.
    pub fn latest_year(&self) -> Option<Year> {
        self.latest().map(SeriesPoint::year)
    }

    /// The year to show when nothing else has been chosen.
    ///
    /// This is the latest year in the series, or `current_year` when the
    /// series is empty, even though that year then has no data.
    pub fn fallback_year(&self, current_year: Year) -> Year {
        self.latest_year().unwrap_or(current_year)
    }
}

/// Percent change of each value against the value [YOY_LAG] positions earlier.
///
/// The first [YOY_LAG] entries, and entries whose earlier value is zero, have
/// no change.
pub fn year_over_year_changes(index_values: &[f64]) -> Vec<Option<f64>> {
    index_values
        .iter()
        .enumerate()
        .map(|(position, &current)| {
            let earlier = index_values[position.checked_sub(YOY_LAG)?];
            percent_change(earlier, current)
        })
        .collect()
}

fn percent_change(earlier: f64, current: f64) -> Option<f64> {
    if earlier == 0.0 {
        None
    } else {
        Some((current / earlier - 1.0) * 100.0)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use time::{Date, Month};

    use crate::ipc::observation::Observation;

    /// Consecutive monthly observations starting at `start`.
    pub(crate) fn monthly_observations(start: Date, values: &[f64]) -> Vec<Observation> {
        let mut month = start;

        values
            .iter()
            .map(|&index_value| {
                let observation = Observation { month, index_value };
                month = next_month(month);
                observation
            })
            .collect()
    }

    fn next_month(month: Date) -> Date {
        let (year, next) = match month.month() {
            Month::December => (month.year() + 1, Month::January),
            other => (month.year(), other.next()),
        };

        Date::from_calendar_date(year, next, 1).expect("could not create test date")
    }
}
