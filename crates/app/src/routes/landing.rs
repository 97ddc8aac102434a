use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdShield, LdStethoscope, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::FeatureFlags;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Skeleton,
};

/// Public landing page shown to signed-out visitors.
///
/// Opens the patient or doctor auth modal via the callbacks; all modal state
/// lives in [`crate::routes::home::Home`].
#[component]
pub fn Landing(
    on_patient_sign_in: EventHandler<()>,
    on_patient_sign_up: EventHandler<()>,
    on_doctor_portal: EventHandler<()>,
) -> Element {
    let flags = use_context::<FeatureFlags>();

    // Directory preview, loads after first paint
    let doctors = use_resource(move || async move { server::api::list_doctors(None).await });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing-page",
            header { class: "landing-header",
                div { class: "landing-brand",
                    Icon { icon: LdStethoscope, width: 24, height: 24 }
                    span { "CareBridge" }
                }
                nav { class: "landing-header-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_patient_sign_in.call(()),
                        "Sign In"
                    }
                    Button {
                        onclick: move |_| on_patient_sign_up.call(()),
                        "Get Started"
                    }
                }
            }

            section { class: "landing-hero",
                h1 { "Healthcare that meets you where you are" }
                p { class: "landing-hero-sub",
                    "Book appointments with trusted specialists, manage your visits, "
                    "and keep your care in one place."
                }
                div { class: "landing-hero-actions",
                    Button {
                        onclick: move |_| on_patient_sign_up.call(()),
                        "Patient Portal"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_doctor_portal.call(()),
                        "Doctor Portal"
                    }
                }
            }

            section { class: "landing-features",
                Card {
                    CardHeader {
                        Icon { icon: LdCalendar, width: 28, height: 28 }
                        CardTitle { "Easy scheduling" }
                        CardDescription {
                            "See open slots and book in seconds. Cancel or reschedule anytime."
                        }
                    }
                }
                Card {
                    CardHeader {
                        Icon { icon: LdUsers, width: 28, height: 28 }
                        CardTitle { "Trusted specialists" }
                        CardDescription {
                            "Cardiology, dermatology, pediatrics and more, all in one directory."
                        }
                    }
                }
                Card {
                    CardHeader {
                        Icon { icon: LdShield, width: 28, height: 28 }
                        CardTitle { "Private and secure" }
                        CardDescription {
                            "Your records stay yours. Sessions are encrypted end to end."
                        }
                    }
                }
            }

            section { class: "landing-doctors",
                h2 { "Our specialists" }
                div { class: "landing-doctors-grid",
                    match doctors.read().as_ref() {
                        Some(Ok(list)) => rsx! {
                            for doctor in list.iter() {
                                Card { key: "{doctor.id}",
                                    CardHeader {
                                        CardTitle { "{doctor.full_name}" }
                                        CardDescription { "{doctor.years_experience} years of experience" }
                                    }
                                    CardContent {
                                        Badge { variant: BadgeVariant::Secondary, "{doctor.specialization}" }
                                        if !doctor.accepting_patients {
                                            Badge { variant: BadgeVariant::Outline, "Not accepting patients" }
                                        }
                                    }
                                }
                            }
                        },
                        Some(Err(_)) => rsx! {
                            p { class: "landing-doctors-error", "The directory is unavailable right now." }
                        },
                        None => rsx! {
                            for i in 0..4 {
                                Skeleton { key: "{i}", style: "height: 8rem;" }
                            }
                        },
                    }
                }
            }

            footer { class: "landing-footer",
                span { "CareBridge" }
                span { class: "landing-footer-note", "Care, connected." }
                if flags.api_docs {
                    a { class: "landing-footer-link", href: "/docs", "API docs" }
                }
            }
        }
    }
}
