use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{DialogContent, DialogDescription, DialogRoot, DialogTitle, Input};

use crate::routes::Route;

/// Doctor sign-in modal.
///
/// Credentials are verified server-side but no session is issued; a
/// successful check navigates straight to the doctor dashboard.
#[component]
pub fn DoctorAuthModal(on_close: EventHandler<()>) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        match server::api::doctor_login(email(), password()).await {
            Ok(_profile) => {
                navigator().push(Route::DoctorDashboard {});
            }
            Err(e) => {
                error_msg.set(Some(AppError::friendly_message(&e.to_string())));
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./doctor_auth_modal.css") }

        DialogRoot {
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Doctor Portal" }
                DialogDescription { "Sign in with your practice credentials." }

                if let Some(err) = error_msg() {
                    div { class: "doctor-modal-error", "{err}" }
                }

                form { class: "doctor-modal-form", onsubmit: handle_submit,
                    Input {
                        label: "Work email",
                        input_type: "email",
                        placeholder: "doctor@medic.com",
                        value: email(),
                        on_input: move |e: FormEvent| email.set(e.value()),
                    }
                    Input {
                        label: "Password",
                        input_type: "password",
                        value: password(),
                        on_input: move |e: FormEvent| password.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "doctor-modal-submit button",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
