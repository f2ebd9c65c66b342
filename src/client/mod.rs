//! Client-side logic that keeps the on-screen expense list consistent with
//! server state.
//!
//! The browser glue binds DOM events and the fetch API to [SyncController]
//! and [ExpenseApi]; everything else lives here so it can be exercised
//! without a browser: the add/edit form state machine ([FormMode]), the
//! render model ([ExpenseListView]) and the refresh-after-every-mutation
//! cycle.

mod api;
mod controller;
mod view;

pub use api::{ApiError, ExpenseApi};
pub use controller::{FormMode, SyncController};
pub use view::{ExpenseItem, ExpenseListView, NO_EXPENSES_PLACEHOLDER, format_amount};
