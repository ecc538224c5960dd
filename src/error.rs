//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{alert::Alert, api::ApiError, html::error_view};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The data service failed or could not be reached.
    ///
    /// The inner error should only be logged for debugging on the server.
    #[error("data service error: {0}")]
    DataService(ApiError),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Tried to delete a transaction that the data service does not have.
    #[error("tried to delete a transaction that does not exist")]
    DeleteMissingTransaction,
}

impl From<ApiError> for Error {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::NotFound => Error::NotFound,
            error => {
                tracing::error!("the data service request failed: {error}");
                Error::DataService(error)
            }
        }
    }
}

/// A full error page.
pub enum ErrorPage<'a> {
    /// The 404 page.
    NotFound,
    /// A 500 page with a short description and a suggested fix.
    Internal {
        /// What went wrong.
        description: &'a str,
        /// What the user or operator can do about it.
        fix: &'a str,
    },
}

impl ErrorPage<'_> {
    /// The generic internal error page.
    pub fn internal() -> Self {
        ErrorPage::Internal {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }

    /// The status code the page is served with.
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorPage::NotFound => StatusCode::NOT_FOUND,
            ErrorPage::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render the full page.
    pub fn into_html(self) -> Html<String> {
        let markup = match self {
            ErrorPage::NotFound => error_view(
                "Not Found",
                "404",
                "Something's missing.",
                "Sorry, we can't find that page. You'll find lots to explore on the dashboard.",
            ),
            ErrorPage::Internal { description, fix } => {
                error_view("Internal Server Error", "500", description, fix)
            }
        };

        Html(markup.into_string())
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        (self.status(), self.into_html()).into_response()
    }
}

/// The fallback handler for unknown routes.
pub async fn get_404_not_found() -> Response {
    ErrorPage::NotFound.into_response()
}

/// A route handler for the generic internal error page.
pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::internal().into_response()
}

fn timezone_fix(timezone: &str) -> String {
    format!(
        "Could not get local timezone \"{timezone}\". Check your server settings and \
        ensure the timezone has been set to valid, canonical timezone string"
    )
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound | Error::DeleteMissingTransaction => ErrorPage::NotFound.into_response(),
            Error::InvalidTimezoneError(timezone) => ErrorPage::Internal {
                description: "Invalid Timezone Settings",
                fix: &timezone_fix(&timezone),
            }
            .into_response(),
            // Logged when converted from the API error.
            Error::DataService(_) => ErrorPage::Internal {
                description: "Could not load your data",
                fix: "The finance data service did not respond as expected. Try again later.",
            }
            .into_response(),
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: timezone_fix(&timezone),
                },
            ),
            Error::DeleteMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not delete transaction".to_owned(),
                    details: "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted."
                        .to_owned(),
                },
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Not found".to_owned(),
                    details: "The record could not be found. \
                    Try refreshing the page to see if it has been deleted."
                        .to_owned(),
                },
            ),
            Error::DataService(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details: "The finance data service could not complete the request, \
                        check the server logs for more details."
                        .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{Error, api::ApiError};

    #[test]
    fn api_not_found_stays_not_found() {
        assert_eq!(Error::from(ApiError::NotFound), Error::NotFound);
    }

    #[test]
    fn other_api_errors_become_data_service_errors() {
        let api_error = ApiError::Rejected {
            status: 503,
            body: "maintenance".to_owned(),
        };

        assert_eq!(
            Error::from(api_error.clone()),
            Error::DataService(api_error)
        );
    }

    #[test]
    fn page_status_codes() {
        assert_eq!(Error::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::DataService(ApiError::Unavailable)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn alert_status_codes() {
        assert_eq!(
            Error::DeleteMissingTransaction
                .into_alert_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::DataService(ApiError::Transport("refused".to_owned()))
                .into_alert_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
