//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::{
    AppState,
    dashboard::{
        get_dashboard_page, get_data_page, get_selected_point, post_picker_selection,
        post_range_shortcut,
    },
    endpoints,
    internal_server_error::get_internal_server_error_page,
    navigation::post_toggle_menu,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::DATA_VIEW, get(get_data_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    // These routes return partials that HTMX swaps into the current page.
    let partial_routes = Router::new()
        .route(endpoints::PICKER_SELECTION, post(post_picker_selection))
        .route(endpoints::SHORTCUT_SELECTION, post(post_range_shortcut))
        .route(endpoints::SELECTED_POINT, get(get_selected_point))
        .route(endpoints::TOGGLE_MENU, post(post_toggle_menu));

    page_routes
        .merge(partial_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::DASHBOARD_VIEW);
    }
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use scraper::Html;
    use time::macros::date;

    use crate::{
        AppState,
        ipc::{Series, test_utils::monthly_observations},
        test_utils::{selected_values, text_of},
    };

    use super::build_router;

    fn get_test_server() -> TestServer {
        let series = Series::new(monthly_observations(
            date!(2021 - 11 - 01),
            &[100.0, 101.0, 102.0, 103.0],
        ));
        let state = AppState::new(series, "Etc/UTC").unwrap();

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn serves_dashboard_and_data_pages() {
        let server = get_test_server();

        server.get("/dashboard").await.assert_status_ok();
        server.get("/data").await.assert_status_ok();
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        let response = server.get("/does-not-exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn error_page_is_500() {
        let server = get_test_server();

        let response = server.get("/error").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn picker_accepts_repeated_years() {
        let server = get_test_server();

        let response = server
            .post("/api/selection/picker")
            .form(&[("years", "2021"), ("years", "2022")])
            .await;

        response.assert_status_ok();
        let html = Html::parse_fragment(&response.text());
        assert_eq!(selected_values(&html), vec!["2021", "2022"]);
    }

    #[tokio::test]
    async fn shortcut_route_accepts_known_ranges_only() {
        let server = get_test_server();

        let response = server.post("/api/selection/shortcut/2017-2021").await;
        response.assert_status_ok();
        let html = Html::parse_fragment(&response.text());
        assert!(selected_values(&html).is_empty());

        let response = server.post("/api/selection/shortcut/1999-2000").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn point_route_returns_cards() {
        let server = get_test_server();

        let response = server
            .get("/api/point")
            .add_query_param("date", "2022-02-01")
            .await;

        response.assert_status_ok();
        let html = Html::parse_fragment(&response.text());
        assert_eq!(
            text_of(&html, "#selected-point div > p:last-child"),
            vec!["103.00", "Unavailable"]
        );
    }

    #[tokio::test]
    async fn menu_route_toggles_sidebar() {
        let server = get_test_server();

        let response = server
            .post("/api/menu")
            .form(&[("open", "false"), ("active", "/dashboard")])
            .await;

        response.assert_status_ok();
        let html = Html::parse_fragment(&response.text());
        assert_eq!(text_of(&html, "#sidebar").len(), 1);
    }
}
