//! This file defines the route logic for logging in a user and issuing a bearer token.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{
    Error,
    auth::{Credentials, encode_token},
    models::User,
    state::AppState,
    stores::{ExpenseStore, UserStore},
};

/// The response body for a successful log-in.
#[derive(Serialize)]
struct LogInResponse {
    /// The signed bearer token the client should present on the expense routes.
    access_token: String,
    /// The user the token was issued to.
    user: User,
}

/// Handler for log-in requests.
///
/// # Errors
///
/// This function will return an error in a few situations.
/// - The username or the password is missing or empty.
/// - The username does not belong to a registered user.
/// - The password is not correct.
/// - An internal error occurred when verifying the password.
pub async fn post_log_in<E, U>(
    State(state): State<AppState<E, U>>,
    Json(user_data): Json<Credentials>,
) -> Result<Response, Error>
where
    E: ExpenseStore + Send + Sync,
    U: UserStore + Send + Sync,
{
    let (username, password) = user_data.validate()?;

    let user = state
        .user_store
        .get_by_username(&username)
        .map_err(|e| match e {
            Error::NotFound => Error::InvalidCredentials,
            e => e,
        })?;

    let password_is_correct = user
        .password_hash()
        .verify(&password)
        .map_err(|e| Error::HashingError(e.to_string()))?;

    if !password_is_correct {
        return Err(Error::InvalidCredentials);
    }

    let access_token = encode_token(user.id(), &state.encoding_key)?;

    Ok(Json(LogInResponse { access_token, user }).into_response())
}

#[cfg(test)]
mod log_in_tests {
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        AppState, build_router, initialize_db,
        routes::endpoints,
        stores::sqlite::{SQLiteExpenseStore, SQLiteUserStore},
    };

    fn get_test_app_state() -> AppState<SQLiteExpenseStore, SQLiteUserStore> {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        initialize_db(&connection).expect("Could not initialize database.");

        let connection = Arc::new(Mutex::new(connection));

        AppState::new(
            "42",
            SQLiteExpenseStore::new(connection.clone()),
            SQLiteUserStore::new(connection),
        )
    }

    async fn get_test_server_with_user() -> TestServer {
        let app = build_router(get_test_app_state());

        let server = TestServer::try_new(app).expect("Could not create test server.");

        server
            .post(endpoints::REGISTER)
            .content_type("application/json")
            .json(&json!({
                "username": "testuser",
                "password": "1234",
            }))
            .await
            .assert_status(StatusCode::CREATED);

        server
    }

    #[tokio::test]
    async fn log_in_succeeds_with_valid_credentials() {
        let server = get_test_server_with_user().await;

        let response = server
            .post(endpoints::LOG_IN)
            .content_type("application/json")
            .json(&json!({
                "username": "testuser",
                "password": "1234",
            }))
            .await;

        response.assert_status_ok();

        let body = response.json::<Value>();
        assert!(!body["access_token"].as_str().unwrap().is_empty());
        assert_eq!(body["user"]["id"], 1);
        assert_eq!(body["user"]["username"], "testuser");
    }

    #[tokio::test]
    async fn log_in_fails_with_wrong_password() {
        let server = get_test_server_with_user().await;

        server
            .post(endpoints::LOG_IN)
            .content_type("application/json")
            .json(&json!({
                "username": "testuser",
                "password": "definitelyNotTheCorrectPassword",
            }))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn log_in_fails_with_unknown_username() {
        let server = get_test_server_with_user().await;

        server
            .post(endpoints::LOG_IN)
            .content_type("application/json")
            .json(&json!({
                "username": "nosuchuser",
                "password": "1234",
            }))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn log_in_fails_with_missing_credentials() {
        let server = get_test_server_with_user().await;

        server
            .post(endpoints::LOG_IN)
            .content_type("application/json")
            .json(&json!({
                "username": "testuser",
            }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
