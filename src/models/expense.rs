//! This file defines an expense record and the types used to create and update one.

use serde::{Deserialize, Serialize};

use crate::models::{DatabaseID, UserID};

/// A single expense record belonging to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    id: DatabaseID,
    title: String,
    amount: f64,
    description: Option<String>,
    date: String,
    user_id: UserID,
}

impl Expense {
    /// Create an expense from its parts.
    ///
    /// This is intended for stores reading rows out of the database. To add a
    /// new expense, see [NewExpense].
    pub fn new(
        id: DatabaseID,
        title: String,
        amount: f64,
        description: Option<String>,
        date: String,
        user_id: UserID,
    ) -> Self {
        Self {
            id,
            title,
            amount,
            description,
            date,
            user_id,
        }
    }

    /// The expense's ID in the database.
    pub fn id(&self) -> DatabaseID {
        self.id
    }

    /// The title of the expense.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The amount of money spent.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Free-form notes about the expense, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The date the expense occurred, as entered by the client.
    ///
    /// The date is stored verbatim and is not validated as a calendar date.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The ID of the user the expense belongs to.
    pub fn user_id(&self) -> UserID {
        self.user_id
    }

    /// Merge `update` into this expense, replacing the fields the update
    /// supplies and keeping the stored value for the rest.
    pub fn merge(self, update: ExpenseUpdate) -> Self {
        Self {
            id: self.id,
            title: update.title.unwrap_or(self.title),
            amount: update.amount.unwrap_or(self.amount),
            description: update.description.or(self.description),
            date: update.date.unwrap_or(self.date),
            user_id: update.user_id.unwrap_or(self.user_id),
        }
    }
}

/// The data required to add a new expense to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// The title of the expense.
    pub title: String,
    /// The amount of money spent.
    pub amount: f64,
    /// Optional free-form notes about the expense.
    pub description: Option<String>,
    /// The date the expense occurred, as entered by the client.
    pub date: String,
    /// The ID of the user the expense belongs to.
    pub user_id: UserID,
}

/// A partial update to an existing expense.
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExpenseUpdate {
    /// The new title, if it should change.
    pub title: Option<String>,
    /// The new amount, if it should change.
    pub amount: Option<f64>,
    /// The new description, if it should change.
    pub description: Option<String>,
    /// The new date, if it should change.
    pub date: Option<String>,
    /// The new owning user ID, if it should change.
    pub user_id: Option<UserID>,
}
