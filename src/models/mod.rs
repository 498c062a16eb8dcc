//! This module defines the application's domain models.

mod expense;
mod password;
mod user;

pub use expense::{Expense, ExpenseUpdate, NewExpense};
pub use password::PasswordHash;
pub use user::{User, UserID};

/// An alias for the integer type used for database row IDs.
pub type DatabaseID = i64;
