//! Endpoint for updating an existing expense.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    expense::{ExpenseData, ExpenseId, update_expense},
};

/// A route handler for replacing the fields of an expense from a JSON payload.
///
/// The payload is validated the same way as for creation. Responds with the
/// updated record, or 404 if no expense has the given ID.
pub async fn update_expense_endpoint(
    State(state): State<AppState>,
    Path(expense_id): Path<ExpenseId>,
    Json(data): Json<ExpenseData>,
) -> Response {
    let new_expense = match data.validate() {
        Ok(new_expense) => new_expense,
        Err(error) => return error.into_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match update_expense(expense_id, new_expense, &connection) {
        Ok(expense) => (StatusCode::OK, Json(expense)).into_response(),
        Err(error @ Error::UpdateMissingExpense) => error.into_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while updating expense {expense_id}: {error}");

            error.into_response()
        }
    }
}

#[cfg(test)]
mod update_endpoint_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        AppState, build_router,
        endpoints::{self, format_endpoint},
        expense::Expense,
    };

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection).unwrap();

        TestServer::try_new(build_router(state)).unwrap()
    }

    async fn create_coffee_expense(server: &TestServer) -> Expense {
        server
            .post(endpoints::POST_EXPENSE)
            .json(&json!({
                "title": "Coffee",
                "amount": 3.5,
                "category": "Food",
                "date": "2024-01-01",
            }))
            .await
            .json::<Expense>()
    }

    #[tokio::test]
    async fn update_expense_replaces_fields() {
        let server = get_test_server();
        let inserted = create_coffee_expense(&server).await;

        let response = server
            .put(&format_endpoint(endpoints::EXPENSE, inserted.id))
            .json(&json!({
                "title": "Flat white",
                "amount": 4.0,
                "category": "Eating Out",
                "date": "2024-01-02",
            }))
            .await;

        response.assert_status_ok();
        let updated = response.json::<Expense>();
        assert_eq!(updated.id, inserted.id);
        assert_eq!(updated.title.as_ref(), "Flat white");
        assert_eq!(updated.amount, 4.0);

        let expenses = server.get(endpoints::EXPENSES).await.json::<Vec<Expense>>();
        assert_eq!(expenses, vec![updated]);
    }

    #[tokio::test]
    async fn update_unknown_expense_returns_not_found() {
        let server = get_test_server();

        let response = server
            .put(&format_endpoint(endpoints::EXPENSE, 9999))
            .json(&json!({
                "title": "Ghost",
                "amount": 1.0,
                "category": "Misc",
            }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let expenses = server.get(endpoints::EXPENSES).await.json::<Vec<Expense>>();
        assert_eq!(expenses, vec![]);
    }

    #[tokio::test]
    async fn update_with_invalid_payload_returns_bad_request() {
        let server = get_test_server();
        let inserted = create_coffee_expense(&server).await;

        let response = server
            .put(&format_endpoint(endpoints::EXPENSE, inserted.id))
            .json(&json!({
                "title": "",
                "amount": 4.0,
                "category": "Eating Out",
            }))
            .await;

        response.assert_status_bad_request();
        let expenses = server.get(endpoints::EXPENSES).await.json::<Vec<Expense>>();
        assert_eq!(expenses, vec![inserted]);
    }
}
