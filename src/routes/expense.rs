//! This file defines the route logic for creating, reading, updating, and deleting expenses.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    Error,
    auth::Claims,
    models::{DatabaseID, ExpenseUpdate, NewExpense, UserID},
    state::AppState,
    stores::{ExpenseStore, UserStore},
};

/// The request body for creating a new expense.
///
/// Every field is optional at the deserialization boundary; presence of the
/// required fields is checked by [CreateExpense::validate].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpense {
    /// The title of the expense.
    pub title: Option<String>,
    /// The amount of money spent.
    pub amount: Option<f64>,
    /// Optional free-form notes about the expense.
    pub description: Option<String>,
    /// The date the expense occurred.
    pub date: Option<String>,
    /// The ID of the user the expense belongs to.
    pub user_id: Option<i64>,
}

impl CreateExpense {
    /// Check that the title, amount, date, and user ID are present, and that
    /// the title and date are non-empty.
    ///
    /// # Errors
    ///
    /// Returns [Error::MissingExpenseFields] if a required field is absent.
    fn validate(self) -> Result<NewExpense, Error> {
        match (self.title, self.amount, self.date, self.user_id) {
            (Some(title), Some(amount), Some(date), Some(user_id))
                if !title.is_empty() && !date.is_empty() =>
            {
                Ok(NewExpense {
                    title,
                    amount,
                    description: self.description,
                    date,
                    user_id: UserID::new(user_id),
                })
            }
            _ => Err(Error::MissingExpenseFields),
        }
    }
}

/// A route handler for creating a new expense.
///
/// The owning user ID is stored as given: it is not checked against the user
/// table or the caller's token.
///
/// # Errors
///
/// This function will return an error if a required field is missing or the
/// bearer token is missing or invalid.
pub async fn create_expense<E, U>(
    State(mut state): State<AppState<E, U>>,
    _claims: Claims,
    Json(expense_data): Json<CreateExpense>,
) -> Result<Response, Error>
where
    E: ExpenseStore + Send + Sync,
    U: UserStore + Send + Sync,
{
    let new_expense = expense_data.validate()?;

    let expense = state.expense_store.create(new_expense)?;

    Ok((StatusCode::CREATED, Json(expense)).into_response())
}

/// A route handler for getting an expense by its database ID.
///
/// This function will return the status code 404 if the requested expense
/// does not exist (e.g., not created yet).
pub async fn get_expense<E, U>(
    State(state): State<AppState<E, U>>,
    _claims: Claims,
    Path(expense_id): Path<DatabaseID>,
) -> Result<Response, Error>
where
    E: ExpenseStore + Send + Sync,
    U: UserStore + Send + Sync,
{
    let expense = state.expense_store.get(expense_id)?;

    Ok(Json(expense).into_response())
}

/// A route handler for updating an expense by its database ID.
///
/// Any subset of the expense's fields may be supplied; omitted fields keep
/// their stored value.
///
/// This function will return the status code 404 if the requested expense
/// does not exist.
pub async fn update_expense<E, U>(
    State(mut state): State<AppState<E, U>>,
    _claims: Claims,
    Path(expense_id): Path<DatabaseID>,
    Json(update): Json<ExpenseUpdate>,
) -> Result<Response, Error>
where
    E: ExpenseStore + Send + Sync,
    U: UserStore + Send + Sync,
{
    let expense = state.expense_store.update(expense_id, update)?;

    Ok(Json(expense).into_response())
}

/// A route handler for deleting an expense by its database ID.
///
/// This function will return the status code 404 if the requested expense
/// does not exist.
pub async fn delete_expense<E, U>(
    State(mut state): State<AppState<E, U>>,
    _claims: Claims,
    Path(expense_id): Path<DatabaseID>,
) -> Result<Response, Error>
where
    E: ExpenseStore + Send + Sync,
    U: UserStore + Send + Sync,
{
    state.expense_store.delete(expense_id)?;

    Ok(Json(json!({"message": "Expense deleted successfully."})).into_response())
}
