//! Defines the app level error type and its conversion to JSON HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request was missing the username or the password, or one of them
    /// was empty.
    #[error("username and password are required")]
    MissingCredentials,

    /// The username did not match a registered user, or the password did not
    /// verify against the stored hash.
    #[error("incorrect username or password")]
    InvalidCredentials,

    /// The request was missing one of the required expense fields.
    #[error("title, amount, date, and user_id are required fields")]
    MissingExpenseFields,

    /// The username used to register is already taken. The client should try
    /// again with a different username.
    #[error("the username is already in use")]
    DuplicateUsername,

    /// The bearer token was missing, malformed, or failed validation.
    #[error("invalid bearer token")]
    InvalidToken,

    /// The bearer token could not be signed.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("could not create bearer token: {0}")]
    TokenCreation(String),

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    /// When communicating with the application client this error should be
    /// replaced with a general error type indicating an internal server error.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("username") =>
            {
                Error::DuplicateUsername
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Error::MissingCredentials => (
                StatusCode::BAD_REQUEST,
                "Username and password are required.".to_owned(),
            ),
            Error::MissingExpenseFields => (
                StatusCode::BAD_REQUEST,
                "Title, amount, date, and user_id are required fields.".to_owned(),
            ),
            Error::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Incorrect username or password.".to_owned(),
            ),
            Error::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid bearer token.".to_owned()),
            Error::DuplicateUsername => (
                StatusCode::CONFLICT,
                "The username is already in use.".to_owned(),
            ),
            Error::NotFound => (StatusCode::NOT_FOUND, "Expense not found.".to_owned()),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_owned(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
