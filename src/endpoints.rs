//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/selection/shortcut/{range_id}',
//! use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page with the chart and summary cards.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The chart section of the dashboard.
pub const CHARTS_ANCHOR: &str = "/dashboard#charts";
/// The page listing every observation in the dataset.
pub const DATA_VIEW: &str = "/data";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route the year picker posts its chosen years to.
pub const PICKER_SELECTION: &str = "/api/selection/picker";
/// The route a year range shortcut posts to.
pub const SHORTCUT_SELECTION: &str = "/api/selection/shortcut/{range_id}";
/// The route for the summary cards of a clicked chart point.
pub const SELECTED_POINT: &str = "/api/point";
/// The route for opening and closing the side menu.
pub const TOGGLE_MENU: &str = "/api/menu";

/// Replace the parameter in `endpoint_path` with `value`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/shortcut/{range_id}', '{range_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, value: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        value,
        &endpoint_path[param_end..]
    )
}
