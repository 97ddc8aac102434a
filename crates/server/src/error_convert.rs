use dioxus::prelude::ServerFnError;
use shared_types::AppError;

// Postgres error classes the portal maps onto structured errors.
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

/// Convert a sqlx::Error into the portal's structured AppError.
///
/// Constraint violations are translated into messages a patient can act on;
/// everything else surfaces as a generic database error.
pub fn sqlx_to_app_error(err: sqlx::Error) -> AppError {
    let sqlx::Error::Database(db_err) = &err else {
        return match err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
            other => AppError::database(other.to_string()),
        };
    };

    match db_err.code().as_deref() {
        Some(UNIQUE_VIOLATION) => AppError::conflict(unique_violation_message(db_err.message())),
        Some(FOREIGN_KEY_VIOLATION) => AppError::not_found("Referenced record does not exist"),
        Some(CHECK_VIOLATION) => AppError::bad_request("Value rejected by a database constraint"),
        _ => AppError::database(err.to_string()),
    }
}

/// Map a unique-violation message onto the portal schema's constraints.
fn unique_violation_message(detail: &str) -> &'static str {
    if detail.contains("email") {
        "An account with this email already exists"
    } else if detail.contains("username") {
        "This username is already taken"
    } else if detail.contains("appointments") {
        "That appointment slot is already booked"
    } else {
        "A record with this value already exists"
    }
}

/// Convert an AppError into a ServerFnError by serializing as JSON, so the
/// client can recover the kind and field errors from the message string.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_app_error()` on sqlx::Error.
pub trait SqlxErrorExt {
    fn into_app_error(self) -> AppError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_app_error(self) -> AppError {
        sqlx_to_app_error(self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
