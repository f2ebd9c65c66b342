//! Endpoint for creating an expense.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    expense::{ExpenseData, create_expense},
};

/// A route handler for creating an expense from a JSON payload.
///
/// Responds with 201 and the created record, including its generated ID and
/// the date the store assigned if the payload did not carry one. Missing or
/// malformed required fields produce a 400 response with a JSON error body.
pub async fn create_expense_endpoint(
    State(state): State<AppState>,
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

    match create_expense(new_expense, &connection) {
        Ok(expense) => (StatusCode::CREATED, Json(expense)).into_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating an expense: {error}");

            error.into_response()
        }
    }
}

#[cfg(test)]
mod create_endpoint_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};
    use time::{OffsetDateTime, macros::date};

    use crate::{AppState, build_router, endpoints, expense::Expense};

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().unwrap();
        let state = AppState::new(connection).unwrap();

        TestServer::try_new(build_router(state)).unwrap()
    }

    #[tokio::test]
    async fn create_expense_returns_created_record() {
        let server = get_test_server();

        let response = server
            .post(endpoints::POST_EXPENSE)
            .json(&json!({
                "title": "Coffee",
                "amount": 3.5,
                "category": "Food",
                "date": "2024-01-01",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let expense = response.json::<Expense>();
        assert!(expense.id > 0);
        assert_eq!(expense.title.as_ref(), "Coffee");
        assert_eq!(expense.amount, 3.5);
        assert_eq!(expense.category.as_ref(), "Food");
        assert_eq!(expense.date, date!(2024 - 01 - 01));
    }

    #[tokio::test]
    async fn create_expense_without_date_defaults_to_today() {
        let server = get_test_server();

        let response = server
            .post(endpoints::POST_EXPENSE)
            .json(&json!({
                "title": "Coffee",
                "amount": 3.5,
                "category": "Food",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let expense = response.json::<Expense>();
        assert_eq!(expense.date, OffsetDateTime::now_utc().date());
    }

    #[tokio::test]
    async fn create_expense_with_missing_field_returns_bad_request() {
        let server = get_test_server();
        let payloads = [
            json!({ "amount": 3.5, "category": "Food" }),
            json!({ "title": "Coffee", "category": "Food" }),
            json!({ "title": "Coffee", "amount": 3.5 }),
        ];

        for payload in payloads {
            let response = server.post(endpoints::POST_EXPENSE).json(&payload).await;

            response.assert_status_bad_request();
            let body = response.json::<Value>();
            assert!(body["error"].is_string(), "expected error body: {body}");
        }

        let expenses = server.get(endpoints::EXPENSES).await.json::<Vec<Expense>>();
        assert_eq!(expenses, vec![]);
    }

    #[tokio::test]
    async fn create_expense_with_negative_amount_returns_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::POST_EXPENSE)
            .json(&json!({
                "title": "Refund?",
                "amount": -3.5,
                "category": "Food",
            }))
            .await;

        response.assert_status_bad_request();
    }
}
