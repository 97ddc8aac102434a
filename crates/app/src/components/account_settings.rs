use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::theme::{ThemeFamily, ThemeState, ALL_FAMILIES};
use shared_ui::{
    use_toast, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label, Separator,
    ToastOptions,
};

use crate::auth::use_auth;

/// Profile, reminder, and password settings for the signed-in patient.
#[component]
pub fn AccountSettings() -> Element {
    let mut auth = use_auth();
    let toast = use_toast();

    let (initial_name, initial_email, initial_phone, reminders_enabled) = {
        let guard = auth.current_user.read();
        match guard.as_ref() {
            Some(u) => (
                u.display_name.clone(),
                u.email.clone(),
                u.phone_number.clone().unwrap_or_default(),
                u.appointment_reminders_enabled,
            ),
            None => (String::new(), String::new(), String::new(), false),
        }
    };

    let mut display_name = use_signal(move || initial_name);
    let mut email = use_signal(move || initial_email);
    let mut phone = use_signal(move || initial_phone);
    let mut profile_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut password_error = use_signal(|| Option::<String>::None);
    let mut changing = use_signal(|| false);

    let mut theme_family = use_signal(|| ThemeFamily::default().as_str().to_string());
    let mut theme_dark = use_signal(|| false);
    let theme = ThemeState {
        family: theme_family,
        is_dark: theme_dark,
    };

    let handle_save_profile = move |evt: FormEvent| async move {
        evt.prevent_default();
        profile_error.set(None);
        saving.set(true);

        let phone_number = {
            let p = phone();
            if p.trim().is_empty() { None } else { Some(p) }
        };
        match server::api::update_profile(display_name(), email(), phone_number).await {
            Ok(updated) => {
                auth.set_user(updated);
                toast.success("Profile updated".to_string(), ToastOptions::new());
            }
            Err(e) => {
                profile_error.set(Some(AppError::friendly_message(&e.to_string())));
            }
        }
        saving.set(false);
    };

    let handle_toggle_reminders = move |evt: FormEvent| async move {
        match server::api::update_reminder_preference(evt.checked()).await {
            Ok(updated) => {
                auth.set_user(updated);
            }
            Err(e) => {
                toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
            }
        }
    };

    let handle_change_password = move |evt: FormEvent| async move {
        evt.prevent_default();
        password_error.set(None);
        changing.set(true);

        match server::api::change_password(current_password(), new_password()).await {
            Ok(resp) => {
                toast.success(resp.message, ToastOptions::new());
                current_password.set(String::new());
                new_password.set(String::new());
            }
            Err(e) => {
                password_error.set(Some(AppError::friendly_message(&e.to_string())));
            }
        }
        changing.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./account_settings.css") }

        Card { class: "account-settings",
            CardHeader {
                CardTitle { "Account settings" }
                CardDescription { "Keep your contact details and preferences up to date." }
            }
            CardContent {
                if let Some(err) = profile_error() {
                    div { class: "account-form-error", "{err}" }
                }
                form { onsubmit: handle_save_profile,
                    Input {
                        label: "Display name",
                        value: display_name(),
                        on_input: move |e: FormEvent| display_name.set(e.value()),
                    }
                    Input {
                        label: "Email",
                        input_type: "email",
                        value: email(),
                        on_input: move |e: FormEvent| email.set(e.value()),
                    }
                    Input {
                        label: "Phone number",
                        placeholder: "Optional",
                        value: phone(),
                        on_input: move |e: FormEvent| phone.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "account-submit button",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save Profile" }
                    }
                }

                label { class: "account-reminder-row",
                    input {
                        r#type: "checkbox",
                        checked: reminders_enabled,
                        onchange: handle_toggle_reminders,
                    }
                    span { "Remind me about upcoming appointments" }
                }

                Separator {}

                div { class: "account-appearance",
                    Label { html_for: "theme", "Theme" }
                    select {
                        id: "theme",
                        class: "account-select",
                        value: theme_family(),
                        onchange: move |evt| {
                            theme_family.set(evt.value());
                            if !ThemeFamily::from_key(&theme_family()).has_dark() {
                                theme_dark.set(false);
                            }
                            theme.apply();
                        },
                        for family in ALL_FAMILIES {
                            option { key: "{family.as_str()}", value: family.as_str(),
                                "{family.display_name()}"
                            }
                        }
                    }
                    label { class: "account-reminder-row",
                        input {
                            r#type: "checkbox",
                            checked: theme_dark(),
                            disabled: !ThemeFamily::from_key(&theme_family()).has_dark(),
                            onchange: move |evt: FormEvent| {
                                theme_dark.set(evt.checked());
                                theme.apply();
                            },
                        }
                        span { "Dark mode" }
                    }
                }

                Separator {}

                if let Some(err) = password_error() {
                    div { class: "account-form-error", "{err}" }
                }
                form { onsubmit: handle_change_password,
                    Input {
                        label: "Current password",
                        input_type: "password",
                        value: current_password(),
                        on_input: move |e: FormEvent| current_password.set(e.value()),
                    }
                    Input {
                        label: "New password",
                        input_type: "password",
                        value: new_password(),
                        on_input: move |e: FormEvent| new_password.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "account-submit button",
                        disabled: changing(),
                        if changing() { "Changing..." } else { "Change Password" }
                    }
                }
            }
        }
    }
}
