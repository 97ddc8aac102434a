use dioxus::prelude::*;
use shared_types::{AppError, AuthUser};
use shared_ui::{DialogContent, DialogDescription, DialogRoot, DialogTitle, Input, Separator};
use std::collections::HashMap;

use crate::routes::home::AuthMode;

/// Patient sign-in / sign-up modal.
///
/// Shows the form picked by `mode`; the in-modal switch link reports the
/// other mode through `on_mode_switch`, so the root owns the mode selector.
/// Calls `on_authenticated` with the signed-in user.
#[component]
pub fn AuthModal(
    mode: AuthMode,
    on_mode_switch: EventHandler<AuthMode>,
    on_close: EventHandler<()>,
    on_authenticated: EventHandler<AuthUser>,
) -> Element {
    let mut username = use_signal(String::new);
    let mut display_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let result = match mode {
            AuthMode::SignIn => server::api::login(email(), password()).await,
            AuthMode::SignUp => {
                server::api::register(username(), email(), password(), display_name()).await
            }
        };

        match result {
            Ok(user) => {
                on_authenticated.call(user);
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    let signing_in = mode == AuthMode::SignIn;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth_modal.css") }

        DialogRoot {
            open: true,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle {
                    if signing_in { "Sign in to CareBridge" } else { "Create your account" }
                }
                DialogDescription {
                    if signing_in {
                        "Welcome back. Enter your details to continue."
                    } else {
                        "A few details and you're in."
                    }
                }

                if let Some(err) = error_msg() {
                    div { class: "auth-modal-error", "{err}" }
                }

                form { class: "auth-modal-form", onsubmit: handle_submit,
                    if !signing_in {
                        Input {
                            label: "Username",
                            placeholder: "jdoe",
                            value: username(),
                            on_input: move |e: FormEvent| username.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("username") {
                            span { class: "auth-modal-field-error", "{err}" }
                        }
                        Input {
                            label: "Full name",
                            placeholder: "Jane Doe",
                            value: display_name(),
                            on_input: move |e: FormEvent| display_name.set(e.value()),
                        }
                        if let Some(err) = field_errors().get("display_name") {
                            span { class: "auth-modal-field-error", "{err}" }
                        }
                    }
                    Input {
                        label: "Email",
                        input_type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        on_input: move |e: FormEvent| email.set(e.value()),
                    }
                    if let Some(err) = field_errors().get("email") {
                        span { class: "auth-modal-field-error", "{err}" }
                    }
                    Input {
                        label: "Password",
                        input_type: "password",
                        placeholder: "At least 8 characters",
                        value: password(),
                        on_input: move |e: FormEvent| password.set(e.value()),
                    }
                    if let Some(err) = field_errors().get("password") {
                        span { class: "auth-modal-field-error", "{err}" }
                    }

                    button {
                        r#type: "submit",
                        class: "auth-modal-submit button",
                        disabled: loading(),
                        if loading() {
                            "Please wait..."
                        } else if signing_in {
                            "Sign In"
                        } else {
                            "Sign Up"
                        }
                    }
                }

                div { class: "auth-modal-divider",
                    Separator {}
                }

                button {
                    r#type: "button",
                    class: "auth-modal-switch",
                    onclick: move |_| {
                        error_msg.set(None);
                        field_errors.set(HashMap::new());
                        on_mode_switch.call(if signing_in {
                            AuthMode::SignUp
                        } else {
                            AuthMode::SignIn
                        });
                    },
                    if signing_in {
                        "New here? Create an account"
                    } else {
                        "Already have an account? Sign in"
                    }
                }
            }
        }
    }
}
