//! This module implements the stores on top of a SQLite database.

mod expense;
mod user;

pub use expense::SQLiteExpenseStore;
pub use user::SQLiteUserStore;
