//! The API endpoints URIs.

/// The route for registering new users.
pub const REGISTER: &str = "/user/register";
/// The route for logging in a user and issuing a bearer token.
pub const LOG_IN: &str = "/user/login";
/// The route for creating expenses.
pub const EXPENSES: &str = "/api/expenses";
/// The route for reading, updating, and deleting a single expense.
pub const EXPENSE: &str = "/api/expenses/{expense_id}";
