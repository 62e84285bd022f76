//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for the dashboard and data pages
//! - Route handlers for the selection controls and chart clicks, which
//!   return HTML partials for HTMX to swap in
//! - State and form types used by the handlers
//!
//! Every handler is a pure function of the shared series and the request.
//! The picker's previous value travels in the request, nothing is stored
//! between requests.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Path, Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    dashboard::{
        cards::{latest_cards_view, point_cards_view, shortcut_cards_view},
        controls::{SELECTION_ID, selection_view},
        tables::observations_table,
    },
    endpoints,
    html::{ECHARTS_SCRIPT, HeadElement, PAGE_CONTAINER_STYLE, base, link},
    ipc::{
        LatestSummary, PointCards, RangeShortcut, Reconciler, SelectionEvent, SelectionState,
        Series, Year, parse_point_date, select_point,
    },
    navigation::NavBar,
    timezone::current_year,
};

/// The state needed for displaying the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The IPC series with the annual change derived over the full history.
    pub series: Arc<Series>,
    /// The local timezone as a canonical timezone name, e.g. "America/Guayaquil".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            series: state.series.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Form data posted by the year picker.
#[derive(Debug, Deserialize)]
pub struct PickerForm {
    /// The selected years. Empty when the user cleared the picker.
    #[serde(default)]
    pub years: Vec<Year>,
}

/// Query parameters sent by a click on the chart.
#[derive(Debug, Deserialize)]
pub struct PointQuery {
    /// The date of the clicked point, e.g. "2024-01-01".
    pub date: Option<String>,
}

fn get_reconciler(state: &DashboardState) -> Result<Reconciler, Error> {
    let current_year = current_year(&state.local_timezone)?;

    Ok(Reconciler::new(&state.series, current_year))
}

/// Display the dashboard with the latest year selected.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let reconciler = get_reconciler(&state)
        .inspect_err(|error| tracing::error!("could not create the year reconciler: {error}"))?;
    let selection = reconciler.initial_state();

    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    Ok(dashboard_view(nav_bar, &state.series, &selection).into_response())
}

/// Update the chart after the year picker changed.
pub async fn post_picker_selection(
    State(state): State<DashboardState>,
    Form(form): Form<PickerForm>,
) -> Response {
    let reconciler = match get_reconciler(&state) {
        Ok(reconciler) => reconciler,
        Err(error) => return error.into_alert_response(),
    };

    let selection = reconciler.reconcile(
        &form.years,
        Some(SelectionEvent::PickerChanged(form.years.clone())),
    );

    selection_view(&state.series, &selection).into_response()
}

/// Update the chart after a year range shortcut was clicked.
///
/// Unknown range IDs are rejected by the path extractor.
pub async fn post_range_shortcut(
    State(state): State<DashboardState>,
    Path(shortcut): Path<RangeShortcut>,
) -> Response {
    let reconciler = match get_reconciler(&state) {
        Ok(reconciler) => reconciler,
        Err(error) => return error.into_alert_response(),
    };

    let selection = reconciler.reconcile(&[], Some(SelectionEvent::RangeShortcutClicked(shortcut)));
    tracing::debug!("Range shortcut {shortcut} selected {:?}", selection.years);

    selection_view(&state.series, &selection).into_response()
}

/// Get the summary cards for the point nearest to the clicked date.
///
/// A missing or unreadable date gives the "no selection" cards.
pub async fn get_selected_point(
    State(state): State<DashboardState>,
    Query(query): Query<PointQuery>,
) -> Markup {
    let at = query.date.as_deref().and_then(|text| {
        let at = parse_point_date(text);
        if at.is_none() {
            tracing::debug!("Ignoring unreadable point date {text:?}");
        }
        at
    });

    point_cards_view(&select_point(&state.series, at))
}

/// Display a table of every observation.
pub async fn get_data_page(State(state): State<DashboardState>) -> Markup {
    let nav_bar = NavBar::new(endpoints::DATA_VIEW).into_html();
    let dashboard_link = link(endpoints::DASHBOARD_VIEW, "dashboard");

    let content = html!(
        (nav_bar)

        div class={ (PAGE_CONTAINER_STYLE) " pt-24" }
        {
            h1 class="text-3xl font-bold mb-2" { "Observations" }

            p class="mb-4"
            {
                (state.series.len()) " months loaded. See the "
                (dashboard_link) " for the chart."
            }

            (observations_table(&state.series))
        }
    );

    base("Data", &[], &content)
}

/// Renders the full dashboard page.
fn dashboard_view(nav_bar: NavBar, series: &Series, selection: &SelectionState) -> Markup {
    let nav_bar = nav_bar.into_html();
    let summary = LatestSummary::from_series(series);
    let selection_target = format!("#{SELECTION_ID}");

    let content = html!(
        (nav_bar)

        div class={ (PAGE_CONTAINER_STYLE) " pt-24" }
        {
            h1 class="text-3xl font-bold mb-4" { "Consumer Price Index" }

            @if series.is_empty() {
                p class="mb-4"
                {
                    "No observations were loaded. Check the dataset and restart the server."
                }
            }

            (latest_cards_view(&summary))

            section
                id="charts"
                class="w-full mb-4 p-4 rounded-lg bg-white/90 dark:bg-gray-800/90"
            {
                (shortcut_cards_view(&selection_target))
                (selection_view(series, selection))
            }

            (point_cards_view(&PointCards::no_selection()))
        }
    );

    let scripts = [HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned())];

    base("Dashboard", &scripts, &content)
}
