//! The client's view of the expense REST API.

use crate::expense::{Expense, ExpenseData, ExpenseId};

/// The errors that may occur while talking to the expense API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed, e.g. the network dropped out or the
    /// server is down.
    #[error("could not reach the server: {0}")]
    Transport(String),

    /// The server responded but the body could not be parsed as the
    /// expected shape.
    #[error("could not parse the server's response: {0}")]
    InvalidResponse(String),

    /// The server rejected the request with an error response.
    #[error("the server rejected the request ({status}): {message}")]
    Rejected {
        /// The HTTP status code of the response.
        status: u16,
        /// The error description from the response body.
        message: String,
    },
}

/// The operations the synchronization controller needs from the server.
///
/// Implementations bind these operations to a concrete transport. Tests
/// drive them against an in-process server or an in-memory fake; a browser
/// deployment binds them to the fetch API.
#[allow(async_fn_in_trait)]
pub trait ExpenseApi {
    /// Fetch all expenses.
    async fn list(&self) -> Result<Vec<Expense>, ApiError>;

    /// Create a new expense and return the stored record.
    async fn create(&self, data: &ExpenseData) -> Result<Expense, ApiError>;

    /// Replace the fields of the expense with `expense_id` and return the
    /// updated record.
    async fn update(&self, expense_id: ExpenseId, data: &ExpenseData)
    -> Result<Expense, ApiError>;

    /// Delete the expense with `expense_id` and return the server's
    /// confirmation message.
    async fn delete(&self, expense_id: ExpenseId) -> Result<String, ApiError>;
}
