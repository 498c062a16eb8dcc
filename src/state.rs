//! Implements the structs that hold the state of the REST server.

use axum::extract::FromRef;
use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::stores::{ExpenseStore, UserStore};

/// The state of the REST server.
#[derive(Clone)]
pub struct AppState<E, U>
where
    E: ExpenseStore + Send + Sync,
    U: UserStore + Send + Sync,
{
    /// The key used for signing bearer tokens.
    pub encoding_key: EncodingKey,
    /// The key used for validating bearer tokens.
    pub decoding_key: DecodingKey,
    /// The store for managing [expenses](crate::models::Expense).
    pub expense_store: E,
    /// The store for managing [users](crate::models::User).
    pub user_store: U,
}

impl<E, U> AppState<E, U>
where
    E: ExpenseStore + Send + Sync,
    U: UserStore + Send + Sync,
{
    /// Create a new [AppState] with token keys derived from `jwt_secret`.
    pub fn new(jwt_secret: &str, expense_store: E, user_store: U) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(jwt_secret.as_ref()),
            decoding_key: DecodingKey::from_secret(jwt_secret.as_ref()),
            expense_store,
            user_store,
        }
    }
}

/// The state needed to validate bearer tokens in protected route handlers.
#[derive(Clone)]
pub struct AuthState {
    /// The key used for validating bearer tokens.
    pub decoding_key: DecodingKey,
}

// this impl tells the `Claims` extractor how to access the key from our state
impl<E, U> FromRef<AppState<E, U>> for AuthState
where
    E: ExpenseStore + Send + Sync,
    U: UserStore + Send + Sync,
{
    fn from_ref(state: &AppState<E, U>) -> Self {
        Self {
            decoding_key: state.decoding_key.clone(),
        }
    }
}
