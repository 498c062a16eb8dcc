//! This module defines the REST API's routes and their handlers.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    logging::logging_middleware,
    state::AppState,
    stores::{ExpenseStore, UserStore},
};

pub mod endpoints;
mod expense;
mod log_in;
mod register;

/// Return a router with all the app's routes.
///
/// The expense routes require a valid bearer token; registration and log-in
/// do not.
pub fn build_router<E, U>(state: AppState<E, U>) -> Router
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
    U: UserStore + Clone + Send + Sync + 'static,
{
    let router: Router<AppState<E, U>> = Router::new()
        .route(endpoints::REGISTER, post(register::create_user))
        .route(endpoints::LOG_IN, post(log_in::post_log_in))
        .route(endpoints::EXPENSES, post(expense::create_expense))
        .route(
            endpoints::EXPENSE,
            get(expense::get_expense)
                .put(expense::update_expense)
                .delete(expense::delete_expense),
        )
        .layer(middleware::from_fn(logging_middleware));

    router.with_state(state)
}
