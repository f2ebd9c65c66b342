//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::{
    AppState, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, get_expenses_endpoint,
        update_expense_endpoint,
    },
    logging::logging_middleware,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::EXPENSES, get(get_expenses_endpoint))
        .route(endpoints::POST_EXPENSE, post(create_expense_endpoint))
        .route(
            endpoints::EXPENSE,
            put(update_expense_endpoint).delete(delete_expense_endpoint),
        )
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
