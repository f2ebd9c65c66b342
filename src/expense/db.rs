//! Database operations for expenses.

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    expense::{CategoryName, Expense, ExpenseId, ExpenseTitle, NewExpense},
};

/// Create an expense and return it with its generated ID.
///
/// If `new_expense` has no date, today's date (UTC) is recorded.
pub fn create_expense(new_expense: NewExpense, connection: &Connection) -> Result<Expense, Error> {
    let date = new_expense
        .date
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());

    connection
        .prepare(
            "INSERT INTO expense (title, amount, category, description, date)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, title, amount, category, description, date;",
        )?
        .query_row(
            (
                new_expense.title.as_ref(),
                new_expense.amount,
                new_expense.category.as_ref(),
                new_expense.description,
                date,
            ),
            map_row,
        )
        .map_err(|error| error.into())
}

/// Retrieve a single expense by ID.
pub fn get_expense(expense_id: ExpenseId, connection: &Connection) -> Result<Expense, Error> {
    connection
        .prepare(
            "SELECT id, title, amount, category, description, date
             FROM expense WHERE id = :id;",
        )?
        .query_row(&[(":id", &expense_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all expenses in storage order.
pub fn get_all_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare("SELECT id, title, amount, category, description, date FROM expense;")?
        .query_map([], map_row)?
        .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
        .collect()
}

/// Replace the mutable fields of an expense and return the updated record.
///
/// If `new_expense` has no date, the stored date is left unchanged.
///
/// # Errors
/// Returns [Error::UpdateMissingExpense] if no expense has the given ID.
pub fn update_expense(
    expense_id: ExpenseId,
    new_expense: NewExpense,
    connection: &Connection,
) -> Result<Expense, Error> {
    connection
        .prepare(
            "UPDATE expense
             SET title = ?1, amount = ?2, category = ?3, description = ?4,
                 date = COALESCE(?5, date)
             WHERE id = ?6
             RETURNING id, title, amount, category, description, date;",
        )?
        .query_row(
            (
                new_expense.title.as_ref(),
                new_expense.amount,
                new_expense.category.as_ref(),
                new_expense.description,
                new_expense.date,
                expense_id,
            ),
            map_row,
        )
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingExpense,
            error => error.into(),
        })
}

/// Delete an expense by ID.
///
/// # Errors
/// Returns [Error::DeleteMissingExpense] if no expense has the given ID.
pub fn delete_expense(expense_id: ExpenseId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM expense WHERE id = ?1", [expense_id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingExpense);
    }

    Ok(())
}

/// Initialize the expense table.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            amount REAL NOT NULL,
            category TEXT NOT NULL,
            description TEXT,
            date TEXT NOT NULL
        );",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;

    let raw_title: String = row.get(1)?;
    let title = ExpenseTitle::new_unchecked(&raw_title);

    let amount = row.get(2)?;

    let raw_category: String = row.get(3)?;
    let category = CategoryName::new_unchecked(&raw_category);

    let description = row.get(4)?;
    let date = row.get(5)?;

    Ok(Expense {
        id,
        title,
        amount,
        category,
        description,
        date,
    })
}
