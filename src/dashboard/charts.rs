//! Chart generation and rendering for the dashboard.
//!
//! The chart plots the projected IPC series on two y-axes: the index value on
//! the left and the annual change as a dashed line on the right. The ECharts
//! options are generated on the server with charming and initialised by a
//! script placed right after the chart container, so the same markup works
//! for the first page load and for HTMX swaps.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    datatype::CompositeValue,
    element::{AxisType, LineStyle, LineStyleType, Tooltip, Trigger},
    series::Line,
};
use maud::{Markup, PreEscaped, html};

use crate::{endpoints, ipc::ChartPayload};

/// The HTML element ID of the chart container.
pub(super) const CHART_ID: &str = "ipc-chart";

const INDEX_SERIES_NAME: &str = "Index";
const YOY_SERIES_NAME: &str = "Annual change (%)";

/// ECharts treats this value as a missing point and leaves a gap in the line.
const GAP: &str = "-";

/// Build the ECharts options for `payload`.
///
/// The x-axis categories are ISO dates ("2024-01-01"), which is what a click
/// on the chart sends to the point lookup.
pub(super) fn ipc_chart(payload: &ChartPayload) -> Chart {
    let labels: Vec<String> = payload.months.iter().map(|month| month.to_string()).collect();
    let yoy_changes: Vec<CompositeValue> = payload
        .yoy_changes
        .iter()
        .map(|change| match change {
            Some(change) => CompositeValue::from(*change),
            None => CompositeValue::from(GAP),
        })
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Consumer Price Index")
                .subtext("Index value and annual change"),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new().bottom(0))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value).name(INDEX_SERIES_NAME))
        .y_axis(Axis::new().type_(AxisType::Value).name(YOY_SERIES_NAME))
        .series(
            Line::new()
                .name(INDEX_SERIES_NAME)
                .data(payload.index_values.clone()),
        )
        .series(
            Line::new()
                .name(YOY_SERIES_NAME)
                .y_axis_index(1)
                .line_style(LineStyle::new().type_(LineStyleType::Dashed))
                .data(yoy_changes),
        )
}

/// Renders the chart container followed by the script that draws `chart` in it.
///
/// Clicking a point asks the server for the summary cards of that month and
/// swaps them into `#selected-point`.
pub(super) fn chart_view(chart: &Chart) -> Markup {
    let script = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{CHART_ID}");
            if (window.ipcChart) {{
                window.ipcChart.dispose();
            }}
            const chart = echarts.init(chartDom);
            window.ipcChart = chart;
            const option = {options};
            chart.setOption(option);

            chart.on('click', function(params) {{
                htmx.ajax('GET', '{point_endpoint}?date=' + encodeURIComponent(params.name), {{
                    target: '#selected-point',
                    swap: 'outerHTML'
                }});
            }});

            if (window.ipcChartResize) {{
                window.removeEventListener('resize', window.ipcChartResize);
            }}
            window.ipcChartResize = () => chart.resize();
            window.addEventListener('resize', window.ipcChartResize);

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = () => {{
                const isDarkMode = darkModeMediaQuery.matches;
                chart.setTheme(isDarkMode ? 'dark' : 'default');
            }}
            if (window.ipcChartTheme) {{
                darkModeMediaQuery.removeEventListener('change', window.ipcChartTheme);
            }}
            window.ipcChartTheme = updateTheme;
            darkModeMediaQuery.addEventListener('change', updateTheme);
            updateTheme();
        }})();"#,
        options = chart,
        point_endpoint = endpoints::SELECTED_POINT,
    );

    html!(
        div
            id=(CHART_ID)
            class="w-full min-h-[420px] rounded dark:bg-gray-100"
        {}

        script { (PreEscaped(script)) }
    )
}
