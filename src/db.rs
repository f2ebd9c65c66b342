//! Database initialization for the application.

use rusqlite::Connection;

use crate::expense::create_expense_table;

/// Create the tables for the domain models in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    create_expense_table(connection)?;

    Ok(())
}
