//! Endpoint for deleting an expense.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    expense::{ExpenseId, delete_expense},
};

/// The JSON body confirming that an expense was deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    /// A human readable confirmation, intended to be shown to the user.
    pub message: String,
}

/// A route handler for deleting an expense by ID.
///
/// Responds with a confirmation message, or 404 if no expense has the
/// given ID.
pub async fn delete_expense_endpoint(
    State(state): State<AppState>,
    Path(expense_id): Path<ExpenseId>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match delete_expense(expense_id, &connection) {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteConfirmation {
                message: "Expense deleted successfully.".to_string(),
            }),
        )
            .into_response(),
        Err(error @ Error::DeleteMissingExpense) => error.into_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while deleting expense {expense_id}: {error}");

            error.into_response()
        }
    }
}
