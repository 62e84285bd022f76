//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::{HeaderName, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// Overrides the `hx-swap` of the element that made the request.
const HX_RESWAP: HeaderName = HeaderName::from_static("hx-reswap");

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The dataset does not have the expected structure, e.g., a record with
    /// the wrong number of columns or JSON that is not a list of records.
    ///
    /// Individual rows with a bad month or value are skipped instead, this
    /// error means the dataset as a whole cannot be used.
    #[error("invalid dataset: {0}")]
    DataFormat(String),

    /// The dataset file could not be opened or read.
    #[error("could not read the dataset: {0}")]
    DatasetIo(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezone(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert for HTMX requests that swap in a partial.
    ///
    /// The alert is swapped inside `#alert-container`, whatever swap style the
    /// triggering element uses for successful responses.
    pub(crate) fn into_alert_response(self) -> Response {
        let alert = match self {
            Error::InvalidTimezone(timezone) => Alert::error(
                "Invalid Timezone Settings",
                &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            )
            .into_html(),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                )
                .into_html()
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, [(HX_RESWAP, "innerHTML")], alert).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::Error;

    #[test]
    fn not_found_renders_404() {
        let response = Error::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn dataset_errors_render_500() {
        let response = Error::DataFormat("bad".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn alert_response_is_500() {
        let response = Error::InvalidTimezone("Mars/Olympus".to_owned()).into_alert_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn alert_is_swapped_inside_the_alert_container() {
        let response = Error::DataFormat("bad".to_owned()).into_alert_response();

        assert_eq!(response.headers().get("hx-reswap").unwrap(), "innerHTML");
    }
}
