// Server-only auth helpers for server functions.
// These are shared across all api/* modules.

use dioxus::prelude::*;
use shared_types::AuthUser;

use crate::db::get_db;
use crate::error_convert::{AppErrorExt, SqlxErrorExt};

/// Extract and validate the caller's identity from the current request.
/// Checks middleware-injected Claims first, falls back to cookie parsing.
/// Returns the validated Claims or an "Authentication required" error.
pub(crate) fn require_auth() -> Result<crate::auth::jwt::Claims, ServerFnError> {
    use crate::auth::{cookies, jwt};
    use shared_types::AppError;

    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let parts = ctx.parts_mut();

    // Primary: Claims already validated by auth middleware
    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Ok(claims.clone());
    }

    // Fallback: parse access token from cookies/Bearer header
    let headers = parts.headers.clone();
    let token = cookies::extract_access_token(&headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    jwt::validate_access_token(&token)
        .map_err(|_| AppError::unauthorized("Invalid or expired token").into_server_fn_error())
}

/// Fetch a full AuthUser by user ID.
/// Returns None and clears cookies if the user no longer exists.
pub(crate) async fn fetch_auth_user(user_id: i64) -> Result<Option<AuthUser>, ServerFnError> {
    let db = get_db().await;
    let user = sqlx::query!(
        r#"SELECT id, username, display_name, email, role, phone_number,
                  email_verified, appointment_reminders_enabled
           FROM users WHERE id = $1"#,
        user_id
    )
    .fetch_optional(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    match user {
        Some(u) => Ok(Some(AuthUser {
            id: u.id,
            username: u.username,
            display_name: u.display_name,
            email: u.email,
            role: u.role,
            phone_number: u.phone_number,
            email_verified: u.email_verified,
            appointment_reminders_enabled: u.appointment_reminders_enabled,
        })),
        None => {
            // User no longer exists — clear stale auth cookies to prevent
            // the client from getting stuck in a broken authenticated state
            crate::auth::cookies::schedule_clear_cookies();
            tracing::warn!(
                user_id,
                "Auth token references non-existent user, clearing cookies"
            );
            Ok(None)
        }
    }
}
