use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{AuthModal, DoctorAuthModal};
use crate::routes::landing::Landing;
use crate::routes::patient_dashboard::PatientDashboard;

/// Which auth form a patient modal opens on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// At most one modal is open at a time.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ActiveModal {
    #[default]
    None,
    PatientAuth,
    DoctorAuth,
}

/// The application root at `/`.
///
/// Resolves the session exactly once per page load. While the check is in
/// flight only a spinner renders; afterwards the page is either the public
/// landing page (with auth modals) or the patient dashboard.
///
/// Uses `use_server_future` with `?` to propagate suspension properly.
/// During SSR the component suspends until the session check completes, then
/// Dioxus re-renders with the resolved data embedded in the HTML.
#[component]
pub fn Home() -> Element {
    let mut auth = use_auth();
    let mut active_modal = use_signal(ActiveModal::default);
    let mut auth_mode = use_signal(|| AuthMode::SignIn);
    // The cached session result may only populate the auth context once;
    // otherwise signing out would be undone by re-reading the stale resource.
    let mut session_seeded = use_signal(|| false);

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    // Clone the result out of the resource guard to avoid lifetime issues.
    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !*session_seeded.peek() {
                session_seeded.set(true);
                auth.set_user(user);
            }
        }
        Some(Ok(None)) => {}
        Some(Err(e)) => {
            // Treat a failed session check as signed-out
            tracing::warn!("session check failed: {e}");
        }
        None => {
            return rsx! {
                div { class: "portal-loading",
                    div { class: "portal-spinner" }
                }
            };
        }
    }

    if auth.is_authenticated() {
        return rsx! { PatientDashboard {} };
    }

    rsx! {
        Landing {
            on_patient_sign_in: move |_| {
                auth_mode.set(AuthMode::SignIn);
                active_modal.set(ActiveModal::PatientAuth);
            },
            on_patient_sign_up: move |_| {
                auth_mode.set(AuthMode::SignUp);
                active_modal.set(ActiveModal::PatientAuth);
            },
            on_doctor_portal: move |_| {
                active_modal.set(ActiveModal::DoctorAuth);
            },
        }

        match *active_modal.read() {
            ActiveModal::PatientAuth => rsx! {
                AuthModal {
                    mode: auth_mode(),
                    on_mode_switch: move |mode| auth_mode.set(mode),
                    on_close: move |_| active_modal.set(ActiveModal::None),
                    on_authenticated: move |user| {
                        auth.set_user(user);
                        active_modal.set(ActiveModal::None);
                    },
                }
            },
            ActiveModal::DoctorAuth => rsx! {
                DoctorAuthModal {
                    on_close: move |_| active_modal.set(ActiveModal::None),
                }
            },
            ActiveModal::None => rsx! {},
        }
    }
}
