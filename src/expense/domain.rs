//! Core expense domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// Database identifier for an expense.
pub type ExpenseId = i64;

/// A validated, non-empty expense title.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct ExpenseTitle(String);

impl ExpenseTitle {
    /// Create an expense title.
    ///
    /// Leading and trailing whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyTitle] if `title` is an empty string.
    pub fn new(title: &str) -> Result<Self, Error> {
        let title = title.trim();

        if title.is_empty() {
            Err(Error::EmptyTitle)
        } else {
            Ok(Self(title.to_string()))
        }
    }

    /// Create an expense title without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(title: &str) -> Self {
        Self(title.to_string())
    }
}

impl AsRef<str> for ExpenseTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ExpenseTitle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExpenseTitle::new(s)
    }
}

impl Display for ExpenseTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated, non-empty category name, e.g. "Groceries", "Transport", "Rent".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// Leading and trailing whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategory] if `name` is an empty string.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategory)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single expense record, i.e. an event where money was spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// A short label for what the money was spent on.
    pub title: ExpenseTitle,
    /// How much money was spent.
    pub amount: f64,
    /// The category the expense belongs to.
    pub category: CategoryName,
    /// An optional longer description of the expense.
    pub description: Option<String>,
    /// When the money was spent.
    pub date: Date,
}

/// The validated field set for creating or replacing an expense.
///
/// Use [ExpenseData::validate] to create one from a request payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// A short label for what the money was spent on.
    pub title: ExpenseTitle,
    /// How much money was spent. Finite and non-negative.
    pub amount: f64,
    /// The category the expense belongs to.
    pub category: CategoryName,
    /// An optional longer description of the expense.
    pub description: Option<String>,
    /// When the money was spent. The store substitutes today's date for `None`.
    pub date: Option<Date>,
}

/// The raw payload for creating or updating an expense.
///
/// All fields are optional at the serde level so that a missing field shows
/// up as a validation error from [ExpenseData::validate] instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseData {
    /// A short label for what the money was spent on.
    #[serde(default)]
    pub title: String,
    /// How much money was spent.
    #[serde(default)]
    pub amount: Option<f64>,
    /// The category the expense belongs to.
    #[serde(default)]
    pub category: String,
    /// An optional longer description of the expense.
    #[serde(default)]
    pub description: Option<String>,
    /// When the money was spent.
    #[serde(default)]
    pub date: Option<Date>,
}

impl ExpenseData {
    /// Check that all required fields are present and well-formed.
    ///
    /// # Errors
    ///
    /// This function will return:
    /// - [Error::EmptyTitle] if the title is missing or blank,
    /// - [Error::EmptyCategory] if the category is missing or blank,
    /// - [Error::MissingAmount] if no amount was given,
    /// - [Error::InvalidAmount] if the amount is negative or not finite.
    pub fn validate(&self) -> Result<NewExpense, Error> {
        let title = ExpenseTitle::new(&self.title)?;
        let category = CategoryName::new(&self.category)?;

        let amount = self.amount.ok_or(Error::MissingAmount)?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidAmount(amount));
        }

        Ok(NewExpense {
            title,
            amount,
            category,
            description: self.description.clone(),
            date: self.date,
        })
    }
}

impl From<&Expense> for ExpenseData {
    /// Produce the payload that would recreate `expense`, e.g. for
    /// populating an edit form.
    fn from(expense: &Expense) -> Self {
        Self {
            title: expense.title.to_string(),
            amount: Some(expense.amount),
            category: expense.category.to_string(),
            description: expense.description.clone(),
            date: Some(expense.date),
        }
    }
}
