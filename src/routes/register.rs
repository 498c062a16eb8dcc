//! This file defines the route logic for registering a new user account.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    auth::Credentials,
    models::PasswordHash,
    state::AppState,
    stores::{ExpenseStore, UserStore},
};

/// Handler for registration requests.
///
/// # Errors
///
/// This function will return an error in a few situations.
/// - The username or the password is missing or empty.
/// - The username is already taken.
/// - An internal error occurred while hashing the password.
pub async fn create_user<E, U>(
    State(mut state): State<AppState<E, U>>,
    Json(user_data): Json<Credentials>,
) -> Result<Response, Error>
where
    E: ExpenseStore + Send + Sync,
    U: UserStore + Send + Sync,
{
    let (username, password) = user_data.validate()?;

    let password_hash = PasswordHash::new(&password, PasswordHash::DEFAULT_COST)?;

    let user = state.user_store.create(username, password_hash)?;

    Ok((StatusCode::CREATED, Json(user)).into_response())
}

#[cfg(test)]
mod register_tests {
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

    fn get_test_server() -> TestServer {
        let app = build_router(get_test_app_state());

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn register_succeeds_with_valid_credentials() {
        let server = get_test_server();

        let response = server
            .post(endpoints::REGISTER)
            .content_type("application/json")
            .json(&json!({
                "username": "testuser",
                "password": "1234",
            }))
            .await;

        response.assert_status(StatusCode::CREATED);

        let user = response.json::<Value>();
        assert_eq!(user["id"], 1);
        assert_eq!(user["username"], "testuser");
        assert!(user.get("password").is_none());
        assert!(user.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn register_fails_with_missing_password() {
        let server = get_test_server();

        server
            .post(endpoints::REGISTER)
            .content_type("application/json")
            .json(&json!({
                "username": "testuser",
            }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_fails_with_empty_username() {
        let server = get_test_server();

        server
            .post(endpoints::REGISTER)
            .content_type("application/json")
            .json(&json!({
                "username": "",
                "password": "1234",
            }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_fails_with_duplicate_username() {
        let server = get_test_server();

        let credentials = json!({
            "username": "testuser",
            "password": "1234",
        });

        server
            .post(endpoints::REGISTER)
            .content_type("application/json")
            .json(&credentials)
            .await
            .assert_status(StatusCode::CREATED);

        server
            .post(endpoints::REGISTER)
            .content_type("application/json")
            .json(&credentials)
            .await
            .assert_status(StatusCode::CONFLICT);
    }
}
