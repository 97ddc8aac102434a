use crate::auth::AuthState;
use shared_types::AuthUser;

#[cfg(feature = "desktop")]
const APP_NAME: &str = "CareBridge";

/// Check whether appointment reminders are enabled for the given user.
fn reminders_enabled(user: Option<&AuthUser>) -> bool {
    user.map(|u| u.appointment_reminders_enabled).unwrap_or(false)
}

/// Send a desktop notification (no-op on non-desktop platforms).
#[allow(unused_variables)]
pub fn send(title: &str, body: &str) {
    #[cfg(feature = "desktop")]
    {
        if let Err(e) = dioxus_sdk_notification::Notification::new()
            .app_name(APP_NAME.to_string())
            .summary(title.to_string())
            .body(body.to_string())
            .show()
        {
            tracing::warn!("failed to show desktop notification: {e}");
        }
    }
}

/// Send a reminder only when the user has appointment reminders enabled.
#[allow(unused_variables)]
pub fn send_if_enabled(auth: &AuthState, title: &str, body: &str) {
    let guard = auth.current_user.read();
    if reminders_enabled(guard.as_ref()) {
        send(title, body);
    }
}
