use dioxus::prelude::*;
use shared_types::{AuthUser, MessageResponse};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, SqlxErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

/// Register a new patient account. Sets HTTP-only auth cookies on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn register(
    username: String,
    email: String,
    password: String,
    display_name: String,
) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, jwt, password as pw};
    use shared_types::{AppError, RegisterRequest};

    let req = RegisterRequest {
        username: username.clone(),
        email: email.clone(),
        password: password.clone(),
        display_name: display_name.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let password_hash = pw::hash_password(&password)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let db = get_db().await;
    let user = sqlx::query!(
        r#"INSERT INTO users (username, email, password_hash, display_name)
           VALUES ($1, $2, $3, $4)
           RETURNING id, username, display_name, email, role, phone_number,
                     email_verified, appointment_reminders_enabled"#,
        username,
        email,
        password_hash,
        display_name
    )
    .fetch_one(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let access_token = jwt::create_access_token(user.id, &user.email, &user.role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let (refresh_token, expires_at) = jwt::create_refresh_token(user.id, &user.email, &user.role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    // Store the hash of the refresh token — never persist raw JWTs
    let refresh_hash = jwt::hash_token(&refresh_token);
    sqlx::query!(
        "INSERT INTO refresh_tokens (user_id, token_hash, expires_at) VALUES ($1, $2, $3)",
        user.id,
        refresh_hash,
        expires_at
    )
    .execute(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    // Schedule cookies to be set by the middleware
    cookies::schedule_auth_cookies(&access_token, &refresh_token);

    Ok(AuthUser {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        email: user.email,
        role: user.role,
        phone_number: user.phone_number,
        email_verified: user.email_verified,
        appointment_reminders_enabled: user.appointment_reminders_enabled,
    })
}

/// Login with email and password. Sets HTTP-only auth cookies on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, jwt, password as pw};
    use shared_types::{AppError, LoginRequest};

    let req = LoginRequest {
        email: email.clone(),
        password: password.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    let user = sqlx::query!(
        r#"SELECT id, username, display_name, email, password_hash, role, phone_number,
                  email_verified, appointment_reminders_enabled
           FROM users WHERE email = $1"#,
        email
    )
    .fetch_optional(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?
    .ok_or_else(|| AppError::unauthorized("Invalid email or password").into_server_fn_error())?;

    let password_hash = user.password_hash.ok_or_else(|| {
        AppError::unauthorized("Invalid email or password").into_server_fn_error()
    })?;

    let valid = pw::verify_password(&password, &password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    if !valid {
        return Err(AppError::unauthorized("Invalid email or password").into_server_fn_error());
    }

    let access_token = jwt::create_access_token(user.id, &user.email, &user.role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let (refresh_token, expires_at) = jwt::create_refresh_token(user.id, &user.email, &user.role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    // Store the hash of the refresh token — never persist raw JWTs
    let refresh_hash = jwt::hash_token(&refresh_token);
    sqlx::query!(
        "INSERT INTO refresh_tokens (user_id, token_hash, expires_at) VALUES ($1, $2, $3)",
        user.id,
        refresh_hash,
        expires_at
    )
    .execute(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    // Schedule cookies to be set by the middleware
    cookies::schedule_auth_cookies(&access_token, &refresh_token);

    Ok(AuthUser {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        email: user.email,
        role: user.role,
        phone_number: user.phone_number,
        email_verified: user.email_verified,
        appointment_reminders_enabled: user.appointment_reminders_enabled,
    })
}

/// Get the current authenticated user. Returns None if not authenticated.
///
/// First checks request extensions for `Claims` (set by auth_middleware which
/// already validated the token and handled transparent refresh). Falls back
/// to direct cookie parsing when extensions aren't available.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use crate::auth::{cookies, jwt};

    let ctx = match dioxus::fullstack::FullstackContext::current() {
        Some(c) => c,
        None => return Ok(None),
    };

    let parts = ctx.parts_mut();

    // Primary: read Claims from extensions (auth_middleware already validated)
    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        let user_id = claims.sub;
        return fetch_auth_user(user_id).await;
    }

    // Fallback: parse cookies directly (covers cases where middleware didn't run)
    let headers = parts.headers.clone();

    if let Some(token) = cookies::extract_access_token(&headers) {
        if let Ok(claims) = jwt::validate_access_token(&token) {
            return fetch_auth_user(claims.sub).await;
        }
    }

    if let Some(refresh_token) = cookies::extract_refresh_token(&headers) {
        if let Ok(claims) = jwt::validate_refresh_token(&refresh_token) {
            let db = get_db().await;
            let token_hash = jwt::hash_token(&refresh_token);
            let stored = sqlx::query!(
                "SELECT id, revoked FROM refresh_tokens WHERE token_hash = $1 AND user_id = $2",
                token_hash,
                claims.sub
            )
            .fetch_optional(db)
            .await
            .map_err(|e| e.into_app_error().into_server_fn_error())?;

            if let Some(row) = stored {
                if !row.revoked {
                    return fetch_auth_user(claims.sub).await;
                }
            }
        }
    }

    Ok(None)
}

/// Logout by revoking all refresh tokens and clearing auth cookies.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::{cookies, jwt};

    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let headers = ctx.parts_mut().headers.clone();
        if let Some(token) = cookies::extract_access_token(&headers) {
            if let Ok(claims) = jwt::validate_access_token(&token) {
                let db = get_db().await;
                let _ = sqlx::query!(
                    "UPDATE refresh_tokens SET revoked = TRUE WHERE user_id = $1 AND revoked = FALSE",
                    claims.sub
                )
                .execute(db)
                .await;
            }
        }
    }

    // Schedule cookie clearing via middleware
    cookies::schedule_clear_cookies();

    Ok(())
}

/// Update the current user's profile (display name, email, phone). Requires authentication.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_profile(
    display_name: String,
    email: String,
    phone_number: Option<String>,
) -> Result<AuthUser, ServerFnError> {
    use shared_types::AppError;

    let claims = require_auth()?;

    if display_name.trim().is_empty() {
        let mut fields = std::collections::HashMap::new();
        fields.insert(
            "display_name".to_string(),
            "Display name is required".to_string(),
        );
        return Err(AppError::validation("Display name is required", fields).into_server_fn_error());
    }

    let db = get_db().await;
    let user = sqlx::query!(
        r#"UPDATE users SET display_name = $2, email = $3, phone_number = $4 WHERE id = $1
           RETURNING id, username, display_name, email, role, phone_number,
                     email_verified, appointment_reminders_enabled"#,
        claims.sub,
        display_name,
        email,
        phone_number
    )
    .fetch_optional(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?
    .ok_or_else(|| AppError::not_found("User not found").into_server_fn_error())?;

    Ok(AuthUser {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        email: user.email,
        role: user.role,
        phone_number: user.phone_number,
        email_verified: user.email_verified,
        appointment_reminders_enabled: user.appointment_reminders_enabled,
    })
}

/// Toggle appointment reminder notifications for the current user.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_reminder_preference(enabled: bool) -> Result<AuthUser, ServerFnError> {
    let claims = require_auth()?;
    let db = get_db().await;

    sqlx::query!(
        "UPDATE users SET appointment_reminders_enabled = $2 WHERE id = $1",
        claims.sub,
        enabled
    )
    .execute(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    fetch_auth_user(claims.sub)
        .await?
        .ok_or_else(|| shared_types::AppError::not_found("User not found").into_server_fn_error())
}

/// Change password for the currently authenticated user.
/// Requires the current password for verification before setting the new one.
#[cfg_attr(
    feature = "server",
    tracing::instrument(skip(current_password, new_password))
)]
#[server]
pub async fn change_password(
    current_password: String,
    new_password: String,
) -> Result<MessageResponse, ServerFnError> {
    use crate::auth::password as pw;
    use shared_types::AppError;

    let claims = require_auth()?;
    let db = get_db().await;

    if new_password.len() < 8 {
        return Err(AppError::validation(
            "New password must be at least 8 characters",
            Default::default(),
        )
        .into_server_fn_error());
    }

    let user = sqlx::query!("SELECT password_hash FROM users WHERE id = $1", claims.sub)
        .fetch_optional(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?
        .ok_or_else(|| AppError::not_found("User not found").into_server_fn_error())?;

    let password_hash = user.password_hash.ok_or_else(|| {
        AppError::validation("No password set on this account", Default::default())
            .into_server_fn_error()
    })?;

    let valid = pw::verify_password(&current_password, &password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    if !valid {
        return Err(
            AppError::validation("Current password is incorrect", Default::default())
                .into_server_fn_error(),
        );
    }

    let new_hash = pw::hash_password(&new_password)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    sqlx::query!(
        "UPDATE users SET password_hash = $2 WHERE id = $1",
        claims.sub,
        new_hash
    )
    .execute(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    // Revoke all other sessions after a password change
    sqlx::query!(
        "UPDATE refresh_tokens SET revoked = TRUE WHERE user_id = $1 AND revoked = FALSE",
        claims.sub
    )
    .execute(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    Ok(MessageResponse {
        message: "Password changed successfully.".to_string(),
    })
}
