//! Implements a SQLite backed expense store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DatabaseID, Expense, ExpenseUpdate, NewExpense, UserID},
    stores::ExpenseStore,
};

/// Handles the persistence of expense records.
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new expense store.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn select_by_id(connection: &Connection, id: DatabaseID) -> Result<Expense, Error> {
        connection
            .prepare(
                "SELECT id, title, amount, description, date, user_id FROM expense WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], SQLiteExpenseStore::map_row)
            .map_err(|e| e.into())
    }
}

impl ExpenseStore for SQLiteExpenseStore {
    /// Create and insert a new expense into the database.
    ///
    /// The owning user ID is stored as given and is not checked against the
    /// user table.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or is poisoned.
    ///
    /// # Errors
    ///
    /// Returns an [Error::SqlError] if an SQL related error occurred.
    fn create(&mut self, expense: NewExpense) -> Result<Expense, Error> {
        let connection = self.connection.lock().unwrap();

        connection.execute(
            "INSERT INTO expense (title, amount, description, date, user_id) VALUES (?1, ?2, ?3, ?4, ?5)",
            (
                &expense.title,
                expense.amount,
                &expense.description,
                &expense.date,
                expense.user_id.as_i64(),
            ),
        )?;

        let id = connection.last_insert_rowid();

        Ok(Expense::new(
            id,
            expense.title,
            expense.amount,
            expense.description,
            expense.date,
            expense.user_id,
        ))
    }

    /// Get the expense from the database that has the specified `id`, or return [Error::NotFound] if such expense does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or is poisoned.
    ///
    /// # Errors
    ///
    /// Returns an [Error::NotFound] error if there is no expense with the specified ID or an [Error::SqlError] if there are SQL related errors.
    fn get(&self, id: DatabaseID) -> Result<Expense, Error> {
        let connection = self.connection.lock().unwrap();

        Self::select_by_id(&connection, id)
    }

    /// Merge `update` into the stored expense and write the result back.
    ///
    /// The read and the write happen under a single connection lock, so
    /// concurrent updates to the same ID serialize with last-write-wins
    /// semantics.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or is poisoned.
    ///
    /// # Errors
    ///
    /// Returns an [Error::NotFound] error if there is no expense with the specified ID or an [Error::SqlError] if there are SQL related errors.
    fn update(&mut self, id: DatabaseID, update: ExpenseUpdate) -> Result<Expense, Error> {
        let connection = self.connection.lock().unwrap();

        let expense = Self::select_by_id(&connection, id)?.merge(update);

        connection.execute(
            "UPDATE expense SET title = ?1, amount = ?2, description = ?3, date = ?4, user_id = ?5 WHERE id = ?6",
            (
                expense.title(),
                expense.amount(),
                expense.description(),
                expense.date(),
                expense.user_id().as_i64(),
                expense.id(),
            ),
        )?;

        Ok(expense)
    }

    /// Delete the expense from the database that has the specified `id`, or return [Error::NotFound] if such expense does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the database lock is already acquired by the same thread or is poisoned.
    ///
    /// # Errors
    ///
    /// Returns an [Error::NotFound] error if there is no expense with the specified ID or an [Error::SqlError] if there are SQL related errors.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        let rows_deleted = self
            .connection
            .lock()
            .unwrap()
            .execute("DELETE FROM expense WHERE id = :id", &[(":id", &id)])?;

        if rows_deleted == 0 {
            Err(Error::NotFound)
        } else {
            Ok(())
        }
    }
}

impl CreateTable for SQLiteExpenseStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS expense (
                    id INTEGER PRIMARY KEY,
                    title TEXT NOT NULL,
                    amount REAL NOT NULL,
                    description TEXT,
                    date TEXT NOT NULL,
                    user_id INTEGER NOT NULL,
                    FOREIGN KEY(user_id) REFERENCES user(id)
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteExpenseStore {
    type ReturnType = Expense;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Expense::new(
            row.get(offset)?,
            row.get(offset + 1)?,
            row.get(offset + 2)?,
            row.get(offset + 3)?,
            row.get(offset + 4)?,
            UserID::new(row.get(offset + 5)?),
        ))
    }
}
