use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendarPlus, LdLogOut, LdStethoscope};
use dioxus_free_icons::Icon;
use shared_types::{AppError, Appointment, AppointmentStatus};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardAction, CardContent,
    CardDescription, CardHeader, CardTitle, Input, Label, Separator, Skeleton, ToastOptions,
};

use crate::auth::use_auth;
use crate::components::AccountSettings;
use crate::format_helpers::format_appointment_time;
use crate::notify;

fn status_badge(status: AppointmentStatus) -> BadgeVariant {
    match status {
        AppointmentStatus::Scheduled => BadgeVariant::Primary,
        AppointmentStatus::Completed => BadgeVariant::Success,
        AppointmentStatus::Cancelled => BadgeVariant::Outline,
    }
}

/// Parse the value of a `datetime-local` input into a UTC timestamp.
fn parse_slot(value: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Signed-in patient view: upcoming appointments plus the booking form.
#[component]
pub fn PatientDashboard() -> Element {
    let mut auth = use_auth();
    let toast = use_toast();

    let display_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.display_name.clone())
        .unwrap_or_default();

    let mut appointments =
        use_resource(move || async move { server::api::my_appointments().await });
    let doctors = use_resource(move || async move { server::api::list_doctors(None).await });

    // Booking form state
    let mut doctor_id = use_signal(String::new);
    let mut slot = use_signal(String::new);
    let mut reason = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut booking = use_signal(|| false);

    let handle_book = move |evt: FormEvent| async move {
        evt.prevent_default();
        form_error.set(None);

        if doctor_id().is_empty() {
            form_error.set(Some("Choose a doctor first".to_string()));
            return;
        }
        let Some(scheduled_at) = parse_slot(&slot()) else {
            form_error.set(Some("Pick a date and time".to_string()));
            return;
        };

        booking.set(true);
        match server::api::book_appointment(doctor_id(), scheduled_at, reason()).await {
            Ok(appt) => {
                toast.success(
                    format!("Appointment booked with {}", appt.doctor_name),
                    ToastOptions::new(),
                );
                notify::send_if_enabled(
                    &auth,
                    "Appointment booked",
                    &format!(
                        "{} on {}",
                        appt.doctor_name,
                        format_appointment_time(&appt.scheduled_at)
                    ),
                );
                doctor_id.set(String::new());
                slot.set(String::new());
                reason.set(String::new());
                appointments.restart();
            }
            Err(e) => {
                form_error.set(Some(AppError::friendly_message(&e.to_string())));
            }
        }
        booking.set(false);
    };

    let handle_sign_out = move |_| async move {
        let _ = server::api::logout().await;
        auth.clear_auth();
    };

    let handle_cancel = move |appt: Appointment| async move {
        match server::api::cancel_appointment(appt.id.to_string()).await {
            Ok(resp) => {
                toast.success(resp.message, ToastOptions::new());
                appointments.restart();
            }
            Err(e) => {
                toast.error(AppError::friendly_message(&e.to_string()), ToastOptions::new());
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./patient_dashboard.css") }

        div { class: "dashboard-page",
            header { class: "dashboard-header",
                div { class: "dashboard-brand",
                    Icon { icon: LdStethoscope, width: 24, height: 24 }
                    span { "CareBridge" }
                }
                div { class: "dashboard-header-actions",
                    span { class: "dashboard-greeting", "Hi, {display_name}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: handle_sign_out,
                        Icon { icon: LdLogOut, width: 16, height: 16 }
                        "Sign Out"
                    }
                }
            }

            main { class: "dashboard-main",
                Card { class: "dashboard-booking",
                    CardHeader {
                        CardTitle { "Book an appointment" }
                        CardDescription { "Pick a doctor, a time, and tell us what's going on." }
                        CardAction {
                            Icon { icon: LdCalendarPlus, width: 20, height: 20 }
                        }
                    }
                    CardContent {
                        if let Some(err) = form_error() {
                            div { class: "dashboard-form-error", "{err}" }
                        }
                        form { onsubmit: handle_book,
                            Label { html_for: "doctor", "Doctor" }
                            select {
                                id: "doctor",
                                class: "dashboard-select",
                                value: doctor_id(),
                                onchange: move |evt| doctor_id.set(evt.value()),
                                option { value: "", "Select a doctor..." }
                                if let Some(Ok(list)) = doctors.read().as_ref() {
                                    for doctor in list.iter().filter(|d| d.accepting_patients) {
                                        option { key: "{doctor.id}", value: "{doctor.id}",
                                            "{doctor.full_name} ({doctor.specialization})"
                                        }
                                    }
                                }
                            }
                            Input {
                                label: "Date and time",
                                input_type: "datetime-local",
                                value: slot(),
                                on_input: move |e: FormEvent| slot.set(e.value()),
                            }
                            Input {
                                label: "Reason for visit",
                                placeholder: "Annual check-up",
                                value: reason(),
                                on_input: move |e: FormEvent| reason.set(e.value()),
                            }
                            button {
                                r#type: "submit",
                                class: "dashboard-submit button",
                                disabled: booking(),
                                if booking() { "Booking..." } else { "Book Appointment" }
                            }
                        }
                    }
                }

                Separator {}

                section { class: "dashboard-appointments",
                    h2 { "Your appointments" }
                    match appointments.read().as_ref() {
                        Some(Ok(list)) if list.is_empty() => rsx! {
                            p { class: "dashboard-empty", "No appointments yet. Book your first visit above." }
                        },
                        Some(Ok(list)) => rsx! {
                            for appt in list.iter() {
                                {
                                    let appt = appt.clone();
                                    let cancellable = appt.status == AppointmentStatus::Scheduled;
                                    rsx! {
                                        Card { key: "{appt.id}",
                                            CardHeader {
                                                CardTitle { "{appt.doctor_name}" }
                                                CardDescription {
                                                    "{appt.specialization} · {format_appointment_time(&appt.scheduled_at)}"
                                                }
                                                CardAction {
                                                    Badge { variant: status_badge(appt.status), "{appt.status.as_str()}" }
                                                }
                                            }
                                            CardContent {
                                                p { class: "dashboard-reason", "{appt.reason}" }
                                                if let Some(notes) = appt.notes.as_ref() {
                                                    p { class: "dashboard-notes", "Notes: {notes}" }
                                                }
                                                if cancellable {
                                                    Button {
                                                        variant: ButtonVariant::Destructive,
                                                        onclick: move |_| handle_cancel(appt.clone()),
                                                        "Cancel"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        Some(Err(_)) => rsx! {
                            p { class: "dashboard-empty", "Could not load your appointments." }
                        },
                        None => rsx! {
                            Skeleton { style: "height: 6rem;" }
                            Skeleton { style: "height: 6rem;" }
                        },
                    }
                }

                Separator {}

                AccountSettings {}
            }
        }
    }
}
