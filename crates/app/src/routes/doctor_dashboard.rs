use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdStethoscope};
use dioxus_free_icons::Icon;
use shared_types::{AppError, Appointment, DoctorProfile};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardFooter, CardHeader, CardTitle, Input, Separator, Skeleton, ToastOptions,
};

use crate::format_helpers::format_appointment_time;
use crate::routes::Route;

/// Doctor view at `/doctor-dashboard`.
///
/// The doctor portal runs on the demo profile: doctor sign-in is verified
/// server-side but issues no session, so this page renders the same profile
/// for every visitor. Sign out just navigates back to the landing page.
#[component]
pub fn DoctorDashboard() -> Element {
    let profile = DoctorProfile::demo();

    let doctor_id = profile.id.clone();
    let mut schedule =
        use_resource(move || {
            let doctor_id = doctor_id.clone();
            async move { server::api::doctor_schedule(doctor_id).await }
        });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./doctor_dashboard.css") }

        div { class: "doctor-page",
            header { class: "doctor-header",
                div { class: "doctor-brand",
                    Icon { icon: LdStethoscope, width: 24, height: 24 }
                    span { "CareBridge · Doctors" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| { navigator().push(Route::Home {}); },
                    Icon { icon: LdLogOut, width: 16, height: 16 }
                    "Sign Out"
                }
            }

            main { class: "doctor-main",
                Card {
                    CardHeader {
                        CardTitle { "{profile.full_name}" }
                        CardDescription {
                            "{profile.specialization} · {profile.years_experience} years of experience"
                        }
                    }
                    CardContent {
                        p { class: "doctor-contact", "{profile.contact_email}" }
                        p { class: "doctor-contact", "{profile.contact_phone}" }
                    }
                    CardFooter {
                        if profile.accepting_patients {
                            Badge { variant: BadgeVariant::Success, "Accepting patients" }
                        } else {
                            Badge { variant: BadgeVariant::Outline, "Not accepting patients" }
                        }
                    }
                }

                Separator {}

                section { class: "doctor-schedule",
                    h2 { "Upcoming schedule" }
                    match schedule.read().as_ref() {
                        Some(Ok(list)) if list.is_empty() => rsx! {
                            p { class: "doctor-empty", "No scheduled appointments." }
                        },
                        Some(Ok(list)) => rsx! {
                            for appt in list.iter() {
                                ScheduleCard {
                                    key: "{appt.id}",
                                    appointment: appt.clone(),
                                    on_completed: move |_| schedule.restart(),
                                }
                            }
                        },
                        Some(Err(_)) => rsx! {
                            p { class: "doctor-empty", "Could not load the schedule." }
                        },
                        None => rsx! {
                            Skeleton { style: "height: 6rem;" }
                            Skeleton { style: "height: 6rem;" }
                        },
                    }
                }
            }
        }
    }
}

/// One scheduled appointment with a completion form.
#[component]
fn ScheduleCard(appointment: Appointment, on_completed: EventHandler<()>) -> Element {
    let toast = use_toast();
    let mut notes = use_signal(String::new);
    let mut completing = use_signal(|| false);

    let appointment_id = appointment.id.to_string();
    let handle_complete = move |_| {
        let appointment_id = appointment_id.clone();
        async move {
            completing.set(true);
            let visit_notes = {
                let n = notes();
                if n.trim().is_empty() { None } else { Some(n) }
            };
            match server::api::complete_appointment(appointment_id, visit_notes).await {
                Ok(_) => {
                    toast.success("Appointment completed".to_string(), ToastOptions::new());
                    on_completed.call(());
                }
                Err(e) => {
                    toast.error(
                        AppError::friendly_message(&e.to_string()),
                        ToastOptions::new(),
                    );
                }
            }
            completing.set(false);
        }
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Patient #{appointment.patient_id}" }
                CardDescription { "{format_appointment_time(&appointment.scheduled_at)}" }
            }
            CardContent {
                p { class: "doctor-reason", "{appointment.reason}" }
                Input {
                    label: "Visit notes",
                    placeholder: "Optional notes for the record",
                    value: notes(),
                    on_input: move |e: FormEvent| notes.set(e.value()),
                }
                Button {
                    disabled: completing(),
                    onclick: handle_complete,
                    if completing() { "Saving..." } else { "Mark Completed" }
                }
            }
        }
    }
}
