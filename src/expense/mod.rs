//! Expense records: the domain types, the database operations and the REST
//! endpoints for managing them.

mod create;
mod db;
mod delete;
mod domain;
mod list;
mod update;

pub use create::create_expense_endpoint;
pub use db::{
    create_expense, create_expense_table, delete_expense, get_all_expenses, get_expense,
    update_expense,
};
pub use delete::{DeleteConfirmation, delete_expense_endpoint};
pub use domain::{CategoryName, Expense, ExpenseData, ExpenseId, ExpenseTitle, NewExpense};
pub use list::get_expenses_endpoint;
pub use update::update_expense_endpoint;
