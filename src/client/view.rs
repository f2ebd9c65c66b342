//! The render model for the on-screen expense list.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

use crate::expense::{Expense, ExpenseId};

/// The text of the single placeholder item shown when there is nothing to
/// display.
pub const NO_EXPENSES_PLACEHOLDER: &str = "No expenses found. Add your first expense!";

/// One rendered expense row.
///
/// The `id` backs the row's edit and delete affordances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseItem {
    /// The ID of the expense this row displays.
    pub id: ExpenseId,
    /// The display text, e.g. `"Coffee - ₹3.50 (2024-01-01)"`.
    pub label: String,
}

/// What the expense list should currently display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseListView {
    /// A single placeholder item with [NO_EXPENSES_PLACEHOLDER] as its text.
    Empty,
    /// One item per expense record.
    Items(Vec<ExpenseItem>),
}

impl ExpenseListView {
    /// Build the view for `expenses`, producing the placeholder for an
    /// empty slice.
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        if expenses.is_empty() {
            return Self::Empty;
        }

        let items = expenses
            .iter()
            .map(|expense| ExpenseItem {
                id: expense.id,
                label: format!(
                    "{} - {} ({})",
                    expense.title,
                    format_amount(expense.amount),
                    expense.date
                ),
            })
            .collect();

        Self::Items(items)
    }

    /// The display text of each row, with [NO_EXPENSES_PLACEHOLDER]
    /// standing in as the single row of an empty list.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Self::Empty => vec![NO_EXPENSES_PLACEHOLDER],
            Self::Items(items) => items.iter().map(|item| item.label.as_str()).collect(),
        }
    }
}

/// Format an expense amount for display, e.g. `3.5` becomes `"₹3.50"`.
pub fn format_amount(amount: f64) -> String {
    static AMOUNT_FMT: OnceLock<Formatter> = OnceLock::new();

    let formatter = AMOUNT_FMT.get_or_init(|| {
        Formatter::currency("₹")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    if amount == 0.0 {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "₹0.00".to_owned();
    }

    let mut formatted_string = formatter.fmt_string(amount);

    // numfmt renders "12.30" as "12.3" and omits the decimal point entirely
    // for whole amounts, so we must restore the missing digits ourselves.
    if !formatted_string.contains('.') {
        formatted_string.push_str(".00");
    } else if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string.push('0');
    }

    formatted_string
}

#[cfg(test)]
mod view_tests {
    use time::macros::date;

    use crate::expense::{CategoryName, Expense, ExpenseTitle};

    use super::{ExpenseItem, ExpenseListView, format_amount};

    fn coffee_expense() -> Expense {
        Expense {
            id: 1,
            title: ExpenseTitle::new_unchecked("Coffee"),
            amount: 3.5,
            category: CategoryName::new_unchecked("Food"),
            description: None,
            date: date!(2024 - 01 - 01),
        }
    }

    #[test]
    fn format_amount_pads_to_two_decimals() {
        assert_eq!(format_amount(3.5), "₹3.50");
        assert_eq!(format_amount(12.34), "₹12.34");
        assert_eq!(format_amount(0.0), "₹0.00");
    }

    #[test]
    fn empty_expense_list_renders_single_placeholder_row() {
        let view = ExpenseListView::from_expenses(&[]);

        assert_eq!(view, ExpenseListView::Empty);
        assert_eq!(
            view.labels(),
            vec!["No expenses found. Add your first expense!"]
        );
    }

    #[test]
    fn expense_renders_title_amount_and_iso_date() {
        let view = ExpenseListView::from_expenses(&[coffee_expense()]);

        assert_eq!(
            view,
            ExpenseListView::Items(vec![ExpenseItem {
                id: 1,
                label: "Coffee - ₹3.50 (2024-01-01)".to_string(),
            }])
        );
    }
}
