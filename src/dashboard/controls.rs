//! The year picker and the part of the page that each selection replaces.

use std::collections::BTreeSet;

use maud::{Markup, html};

use crate::{
    dashboard::charts::{chart_view, ipc_chart},
    endpoints,
    ipc::{Series, SelectionState, Year, project},
};

/// The HTML element ID of the picker and chart, which every selection replaces.
pub(super) const SELECTION_ID: &str = "selection";

/// Renders a multi-select with one option per year in the dataset.
///
/// The options listed in `picker_value` are selected. Changing the selection
/// posts every selected year as a repeated `years` field.
fn year_picker_view(years: &BTreeSet<Year>, picker_value: &[Year]) -> Markup {
    html! {
        form
            hx-post=(endpoints::PICKER_SELECTION)
            hx-trigger="change"
            hx-target={ "#" (SELECTION_ID) }
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full mb-4"
        {
            label for="years" class="block mb-2 text-sm font-medium" { "Years" }

            select
                id="years"
                name="years"
                multiple
                size="6"
                class="block w-full p-2.5 text-sm text-gray-900 bg-gray-50
                    border border-gray-300 rounded-lg focus:ring-blue-500
                    focus:border-blue-500 dark:bg-gray-700 dark:border-gray-600
                    dark:text-white"
            {
                @for year in years {
                    option value=(year) selected[picker_value.contains(year)] { (year) }
                }
            }
        }
    }
}

/// Renders the picker and the chart for `state`.
pub(super) fn selection_view(series: &Series, state: &SelectionState) -> Markup {
    let payload = project(series, &state.years);
    tracing::debug!(
        "Projected {} points for years {:?}",
        payload.len(),
        state.years
    );

    html! {
        div id=(SELECTION_ID) class="w-full" {
            (year_picker_view(&series.years(), &state.picker_value))

            @if payload.is_empty() {
                p class="mb-2 text-sm text-gray-200" {
                    "There is no data for the selected years."
                }
            }

            (chart_view(&ipc_chart(&payload)))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::ipc::{Series, SelectionState, test_utils::monthly_observations};

    use super::selection_view;

    fn get_test_series() -> Series {
        Series::new(monthly_observations(
            date!(2023 - 12 - 01),
            &[100.0, 101.0, 102.0],
        ))
    }

    fn selected_options(html: &Html) -> Vec<String> {
        let selector = Selector::parse("select[name='years'] option[selected]").unwrap();
        html.select(&selector)
            .map(|option| option.value().attr("value").unwrap_or_default().to_owned())
            .collect()
    }

    #[test]
    fn picker_lists_every_year_and_marks_picker_value() {
        let state = SelectionState {
            years: BTreeSet::from([2024]),
            picker_value: vec![2024],
        };

        let markup = selection_view(&get_test_series(), &state);

        let html = Html::parse_fragment(&markup.into_string());
        let options = Selector::parse("select[name='years'] option").unwrap();
        assert_eq!(html.select(&options).count(), 2);
        assert_eq!(selected_options(&html), vec!["2024"]);
    }

    #[test]
    fn cleared_picker_has_nothing_selected() {
        let state = SelectionState {
            years: BTreeSet::from([2023, 2024]),
            picker_value: Vec::new(),
        };

        let markup = selection_view(&get_test_series(), &state);

        let html = Html::parse_fragment(&markup.into_string());
        assert!(selected_options(&html).is_empty());
    }

    #[test]
    fn empty_projection_shows_message() {
        let state = SelectionState {
            years: BTreeSet::from([2010]),
            picker_value: vec![2010],
        };

        let markup = selection_view(&get_test_series(), &state).into_string();

        assert!(markup.contains("There is no data for the selected years."));
    }
}
