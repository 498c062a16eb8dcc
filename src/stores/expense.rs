//! Defines the store trait for creating, reading, updating, and deleting expenses.

use crate::{
    Error,
    models::{DatabaseID, Expense, ExpenseUpdate, NewExpense},
};

/// Handles the persistence of expense records.
pub trait ExpenseStore {
    /// Add a new expense to the store and return the persisted record.
    fn create(&mut self, expense: NewExpense) -> Result<Expense, Error>;

    /// Get an expense by its ID.
    ///
    /// Returns [Error::NotFound] if no expense with the given ID exists.
    fn get(&self, id: DatabaseID) -> Result<Expense, Error>;

    /// Apply `update` to the expense with the given ID and return the updated
    /// record. Fields the update does not supply keep their stored value.
    ///
    /// Returns [Error::NotFound] if no expense with the given ID exists.
    fn update(&mut self, id: DatabaseID, update: ExpenseUpdate) -> Result<Expense, Error>;

    /// Remove the expense with the given ID from the store.
    ///
    /// Returns [Error::NotFound] if no expense with the given ID exists.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error>;
}
