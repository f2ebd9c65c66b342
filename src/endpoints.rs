//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/expense/{expense_id}',
//! use [format_endpoint].

/// The route to list all expenses.
pub const EXPENSES: &str = "/api/expenses";
/// The route to create an expense.
pub const POST_EXPENSE: &str = "/api/expense";
/// The route to update or delete a single expense.
pub const EXPENSE: &str = "/api/expense/{expense_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/expense/{expense_id}',
/// '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::EXPENSES);
        assert_endpoint_is_valid_uri(endpoints::POST_EXPENSE);
        assert_endpoint_is_valid_uri(endpoints::EXPENSE);
    }

    #[test]
    fn format_endpoint_replaces_parameter() {
        let formatted = format_endpoint(endpoints::EXPENSE, 42);

        assert_eq!(formatted, "/api/expense/42");
    }

    #[test]
    fn format_endpoint_without_parameter_returns_path_unchanged() {
        let formatted = format_endpoint(endpoints::EXPENSES, 42);

        assert_eq!(formatted, endpoints::EXPENSES);
    }
}
