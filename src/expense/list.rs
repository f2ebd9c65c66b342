//! Endpoint for listing all expenses.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, expense::get_all_expenses};

/// A route handler for listing all expenses as a JSON array.
///
/// An empty store produces an empty array, never an error.
pub async fn get_expenses_endpoint(State(state): State<AppState>) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match get_all_expenses(&connection) {
        Ok(expenses) => (StatusCode::OK, Json(expenses)).into_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while listing expenses: {error}");

            error.into_response()
        }
    }
}

#[cfg(test)]
mod list_endpoint_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{AppState, build_router, endpoints, expense::Expense};

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection).unwrap();

        TestServer::try_new(build_router(state)).unwrap()
    }

    #[tokio::test]
    async fn empty_store_returns_empty_array() {
        let server = get_test_server();

        let response = server.get(endpoints::EXPENSES).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Expense>>(), vec![]);
    }

    #[tokio::test]
    async fn returns_each_created_expense() {
        let server = get_test_server();
        for (title, amount) in [("Coffee", 3.5), ("Lunch", 12.0), ("Bus fare", 2.8)] {
            server
                .post(endpoints::POST_EXPENSE)
                .json(&json!({
                    "title": title,
                    "amount": amount,
                    "category": "Misc",
                    "date": "2024-01-01",
                }))
                .await
                .assert_status(axum::http::StatusCode::CREATED);
        }

        let response = server.get(endpoints::EXPENSES).await;

        response.assert_status_ok();
        let expenses = response.json::<Vec<Expense>>();
        assert_eq!(expenses.len(), 3);
        assert_eq!(expenses[0].title.as_ref(), "Coffee");
        assert_eq!(expenses[2].title.as_ref(), "Bus fare");
    }
}
