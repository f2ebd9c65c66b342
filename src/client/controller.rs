//! The client-side synchronization controller.

use crate::{
    client::{
        api::{ApiError, ExpenseApi},
        view::ExpenseListView,
    },
    expense::{Expense, ExpenseData, ExpenseId},
};

/// Which request the expense form will issue when it is next submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Submitting creates a new expense.
    Adding,
    /// Submitting replaces the expense with the given ID.
    Editing(ExpenseId),
}

/// Drives the fetch/render/submit cycle for the expense list.
///
/// The controller re-fetches the full list after every successful mutation,
/// so the view always reflects server state at the cost of one extra round
/// trip per mutation. There is no optimistic update and no diffing.
#[derive(Debug)]
pub struct SyncController<A> {
    api: A,
    mode: FormMode,
    form: ExpenseData,
    list_view: ExpenseListView,
}

impl<A: ExpenseApi> SyncController<A> {
    /// Create a controller in the [FormMode::Adding] state with an empty
    /// view. Call [SyncController::refresh] to load the initial list.
    pub fn new(api: A) -> Self {
        Self {
            api,
            mode: FormMode::Adding,
            form: ExpenseData::default(),
            list_view: ExpenseListView::Empty,
        }
    }

    /// The current form mode.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// The values the form should currently display.
    pub fn form(&self) -> &ExpenseData {
        &self.form
    }

    /// The most recently rendered list view.
    pub fn list_view(&self) -> &ExpenseListView {
        &self.list_view
    }

    /// Fetch the full expense list and rebuild the list view.
    ///
    /// A failed fetch is logged and rendered as the empty-state placeholder
    /// rather than surfacing an error to the user.
    pub async fn refresh(&mut self) -> &ExpenseListView {
        let expenses = match self.api.list().await {
            Ok(expenses) => expenses,
            Err(error) => {
                tracing::error!("Error fetching expenses: {error}");
                Vec::new()
            }
        };

        self.list_view = ExpenseListView::from_expenses(&expenses);
        &self.list_view
    }

    /// Switch the form into edit mode for `expense`, populating it with the
    /// record's current values.
    pub fn begin_edit(&mut self, expense: &Expense) {
        self.mode = FormMode::Editing(expense.id);
        self.form = ExpenseData::from(expense);
    }

    /// Abandon an in-progress edit: clear the form and revert to
    /// [FormMode::Adding] without issuing a request.
    pub fn cancel_edit(&mut self) {
        self.mode = FormMode::Adding;
        self.form = ExpenseData::default();
    }

    /// Submit the form with `data`: a create request in [FormMode::Adding],
    /// an update request in [FormMode::Editing].
    ///
    /// On success the form is cleared, the mode reverts to
    /// [FormMode::Adding] and the list is refreshed. On failure the mode and
    /// form are left untouched so the user can correct the input and retry.
    pub async fn submit(&mut self, data: ExpenseData) -> Result<(), ApiError> {
        self.form = data;

        let result = match self.mode {
            FormMode::Adding => self.api.create(&self.form).await,
            FormMode::Editing(expense_id) => self.api.update(expense_id, &self.form).await,
        };

        match result {
            Ok(_) => {
                self.mode = FormMode::Adding;
                self.form = ExpenseData::default();
                self.refresh().await;
                Ok(())
            }
            Err(error) => {
                tracing::error!("Error submitting expense: {error}");
                Err(error)
            }
        }
    }

    /// Delete the expense with `expense_id` and refresh the list.
    ///
    /// Returns the server's confirmation message for the glue layer to
    /// surface to the user.
    pub async fn delete(&mut self, expense_id: ExpenseId) -> Result<String, ApiError> {
        match self.api.delete(expense_id).await {
            Ok(message) => {
                self.refresh().await;
                Ok(message)
            }
            Err(error) => {
                tracing::error!("Error deleting expense {expense_id}: {error}");
                Err(error)
            }
        }
    }
}
