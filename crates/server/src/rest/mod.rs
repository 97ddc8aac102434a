pub mod appointment;
pub mod doctor;

use crate::db::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Build the REST API router (doctor directory + appointment book).
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Doctor directory
        .route("/api/doctors", get(doctor::list_doctors))
        .route("/api/doctors/{id}", get(doctor::get_doctor))
        .route("/api/doctors/{id}/schedule", get(doctor::get_schedule))
        // Appointments
        .route("/api/appointments", post(appointment::create_appointment))
        .route("/api/appointments/{id}", get(appointment::get_appointment))
        .route(
            "/api/appointments/{id}/cancel",
            post(appointment::cancel_appointment),
        )
        .route(
            "/api/appointments/{id}/complete",
            post(appointment::complete_appointment),
        )
        .route(
            "/api/appointments/patient/{patient_id}",
            get(appointment::list_by_patient),
        )
}
