//! Decides which years the chart shows.
//!
//! Two controls claim the same selection: the year picker and the three
//! fixed range shortcuts. Each UI event is turned into a [SelectionEvent] and
//! reduced, together with the picker's previous value, into a new
//! [SelectionState]. The state is never read back from the chart.

use std::{collections::BTreeSet, fmt, ops::RangeInclusive, str::FromStr};

use serde::Deserialize;

use crate::ipc::{observation::Year, series::Series};

/// The fixed year ranges offered next to the year picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum RangeShortcut {
    /// 2006 to 2016.
    #[serde(rename = "2006-2016")]
    Years2006To2016,
    /// 2017 to 2021.
    #[serde(rename = "2017-2021")]
    Years2017To2021,
    /// 2022 to 2025.
    #[serde(rename = "2022-2025")]
    Years2022To2025,
}

impl RangeShortcut {
    /// Every shortcut, in the order they are displayed.
    pub const ALL: [RangeShortcut; 3] = [
        RangeShortcut::Years2006To2016,
        RangeShortcut::Years2017To2021,
        RangeShortcut::Years2022To2025,
    ];

    /// The inclusive range of years the shortcut selects.
    pub fn years(self) -> RangeInclusive<Year> {
        match self {
            RangeShortcut::Years2006To2016 => 2006..=2016,
            RangeShortcut::Years2017To2021 => 2017..=2021,
            RangeShortcut::Years2022To2025 => 2022..=2025,
        }
    }

    /// The identifier used in URLs, e.g. "2006-2016".
    pub fn id(self) -> &'static str {
        match self {
            RangeShortcut::Years2006To2016 => "2006-2016",
            RangeShortcut::Years2017To2021 => "2017-2021",
            RangeShortcut::Years2022To2025 => "2022-2025",
        }
    }

    /// A short name for the period shown on the shortcut.
    pub fn caption(self) -> &'static str {
        match self {
            RangeShortcut::Years2006To2016 => "First decade",
            RangeShortcut::Years2017To2021 => "Five years",
            RangeShortcut::Years2022To2025 => "Today",
        }
    }
}

impl fmt::Display for RangeShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for RangeShortcut {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RangeShortcut::ALL
            .into_iter()
            .find(|shortcut| shortcut.id() == s)
            .ok_or_else(|| format!("unknown year range \"{s}\""))
    }
}

/// The control that caused an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The year picker changed to exactly these years.
    PickerChanged(Vec<Year>),
    /// One of the range shortcuts was clicked.
    RangeShortcutClicked(RangeShortcut),
}

/// The outcome of reconciling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    /// The years the chart should show.
    pub years: BTreeSet<Year>,
    /// The value the year picker should now display.
    pub picker_value: Vec<Year>,
}

/// Reduces UI events into the authoritative selection of years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciler {
    fallback_year: Year,
    initial_picker_value: Vec<Year>,
}

impl Reconciler {
    /// Create a reconciler for `series`.
    ///
    /// `current_year` is only used when the series is empty, see
    /// [Series::fallback_year].
    pub fn new(series: &Series, current_year: Year) -> Self {
        Self {
            fallback_year: series.fallback_year(current_year),
            initial_picker_value: series.latest_year().into_iter().collect(),
        }
    }

    /// The selection on first load, before any control has fired.
    pub fn initial_state(&self) -> SelectionState {
        self.reconcile(&self.initial_picker_value, None)
    }

    /// Resolve the selection after `event`, or after the initial load when
    /// `event` is `None`.
    ///
    /// - Initial load: the fallback year; the picker keeps its value.
    /// - Picker: exactly the chosen years, or the fallback year if none were
    ///   chosen; the picker keeps the chosen years.
    /// - Range shortcut: the shortcut's years; the picker is cleared.
    pub fn reconcile(
        &self,
        previous_picker_value: &[Year],
        event: Option<SelectionEvent>,
    ) -> SelectionState {
        match event {
            None => SelectionState {
                years: BTreeSet::from([self.fallback_year]),
                picker_value: previous_picker_value.to_vec(),
            },
            Some(SelectionEvent::PickerChanged(chosen)) => {
                let years = if chosen.is_empty() {
                    tracing::debug!(
                        "year picker was emptied, falling back to {}",
                        self.fallback_year
                    );
                    BTreeSet::from([self.fallback_year])
                } else {
                    chosen.iter().copied().collect()
                };

                SelectionState {
                    years,
                    picker_value: chosen,
                }
            }
            Some(SelectionEvent::RangeShortcutClicked(shortcut)) => SelectionState {
                years: shortcut.years().collect(),
                picker_value: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use time::macros::date;

    use crate::ipc::series::{Series, test_utils::monthly_observations};

    use super::{RangeShortcut, Reconciler, SelectionEvent, SelectionState};

    fn get_test_series() -> Series {
        Series::new(monthly_observations(
            date!(2023 - 11 - 01),
            &[100.0, 101.0, 102.0, 103.0],
        ))
    }

    #[test]
    fn initial_load_selects_latest_year() {
        let reconciler = Reconciler::new(&get_test_series(), 2030);

        let state = reconciler.initial_state();

        assert_eq!(
            state,
            SelectionState {
                years: BTreeSet::from([2024]),
                picker_value: vec![2024],
            }
        );
    }

    #[test]
    fn initial_load_on_empty_series_selects_current_year() {
        let reconciler = Reconciler::new(&Series::empty(), 2030);

        let state = reconciler.initial_state();

        assert_eq!(state.years, BTreeSet::from([2030]));
        assert!(state.picker_value.is_empty());
    }

    #[test]
    fn initial_load_echoes_previous_picker_value() {
        let reconciler = Reconciler::new(&get_test_series(), 2030);

        let state = reconciler.reconcile(&[2023], None);

        assert_eq!(state.years, BTreeSet::from([2024]));
        assert_eq!(state.picker_value, vec![2023]);
    }

    #[test]
    fn picker_selects_exactly_the_chosen_years() {
        let reconciler = Reconciler::new(&get_test_series(), 2030);

        let state = reconciler.reconcile(
            &[2024],
            Some(SelectionEvent::PickerChanged(vec![2023, 2010])),
        );

        assert_eq!(state.years, BTreeSet::from([2010, 2023]));
        assert_eq!(state.picker_value, vec![2023, 2010]);
    }

    #[test]
    fn empty_picker_falls_back_to_latest_year() {
        let reconciler = Reconciler::new(&get_test_series(), 2030);

        let state = reconciler.reconcile(&[2023], Some(SelectionEvent::PickerChanged(vec![])));

        assert_eq!(state.years, BTreeSet::from([2024]));
        assert!(state.picker_value.is_empty());
    }

    #[test]
    fn shortcut_selects_range_and_clears_picker() {
        let reconciler = Reconciler::new(&get_test_series(), 2030);

        let state = reconciler.reconcile(
            &[2023, 2024],
            Some(SelectionEvent::RangeShortcutClicked(
                RangeShortcut::Years2006To2016,
            )),
        );

        assert_eq!(state.years, (2006..=2016).collect::<BTreeSet<_>>());
        assert!(state.picker_value.is_empty());
    }

    #[test]
    fn picker_after_shortcut_reads_cleared_value() {
        let reconciler = Reconciler::new(&get_test_series(), 2030);
        let initial = reconciler.initial_state();

        let after_shortcut = reconciler.reconcile(
            &initial.picker_value,
            Some(SelectionEvent::RangeShortcutClicked(
                RangeShortcut::Years2017To2021,
            )),
        );
        let after_reload = reconciler.reconcile(&after_shortcut.picker_value, None);

        assert!(after_shortcut.picker_value.is_empty());
        assert!(after_reload.picker_value.is_empty());
    }

    #[test]
    fn reconcile_is_deterministic() {
        let reconciler = Reconciler::new(&get_test_series(), 2030);
        let event = SelectionEvent::PickerChanged(vec![2023]);

        let first = reconciler.reconcile(&[2024], Some(event.clone()));
        let second = reconciler.reconcile(&[2024], Some(event));

        assert_eq!(first, second);
    }

    #[test]
    fn shortcut_ranges_are_inclusive() {
        assert_eq!(RangeShortcut::Years2006To2016.years().count(), 11);
        assert_eq!(RangeShortcut::Years2017To2021.years().count(), 5);
        assert_eq!(RangeShortcut::Years2022To2025.years().count(), 4);
        assert!(RangeShortcut::Years2022To2025.years().contains(&2025));
    }

    #[test]
    fn shortcut_ids_parse() {
        for shortcut in RangeShortcut::ALL {
            assert_eq!(shortcut.id().parse::<RangeShortcut>(), Ok(shortcut));
        }

        assert!("2000-2005".parse::<RangeShortcut>().is_err());
    }
}
