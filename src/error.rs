//! Defines the app level error type and its conversion to JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty or missing string was used as an expense title.
    #[error("expense title cannot be empty")]
    EmptyTitle,

    /// An empty or missing string was used as a category name.
    #[error("category name cannot be empty")]
    EmptyCategory,

    /// The request did not contain an amount.
    #[error("an amount is required")]
    MissingAmount,

    /// The amount was negative or not a finite number.
    ///
    /// Expenses record money that was actually spent, so the amount must be
    /// a finite number no less than zero.
    #[error("{0} is not a valid expense amount")]
    InvalidAmount(f64),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update an expense that does not exist
    #[error("tried to update an expense that is not in the database")]
    UpdateMissingExpense,

    /// Tried to delete an expense that does not exist
    #[error("tried to delete an expense that is not in the database")]
    DeleteMissingExpense,

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Error::EmptyTitle
            | Error::EmptyCategory
            | Error::MissingAmount
            | Error::InvalidAmount(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::NotFound | Error::UpdateMissingExpense | Error::DeleteMissingExpense => (
                StatusCode::NOT_FOUND,
                "The requested expense could not be found.".to_string(),
            ),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::Error;

    #[test]
    fn query_returned_no_rows_maps_to_not_found() {
        let error = Error::from(rusqlite::Error::QueryReturnedNoRows);

        assert_eq!(error, Error::NotFound);
    }

    #[test]
    fn validation_errors_map_to_bad_request() {
        for error in [
            Error::EmptyTitle,
            Error::EmptyCategory,
            Error::MissingAmount,
            Error::InvalidAmount(-1.0),
        ] {
            let response = error.into_response();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn missing_resource_errors_map_to_not_found() {
        for error in [
            Error::NotFound,
            Error::UpdateMissingExpense,
            Error::DeleteMissingExpense,
        ] {
            let response = error.into_response();

            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }
}
