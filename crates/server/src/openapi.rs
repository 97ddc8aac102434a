use axum::Router;
use shared_types::{
    AppError, AppErrorKind, Appointment, AppointmentStatus, AuthUser, BookAppointmentRequest,
    DoctorLoginRequest, DoctorProfile, LoginRequest, MessageResponse, PortalRole, RegisterRequest,
};
use sqlx::{Pool, Postgres};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::db::AppState;
use crate::health;
use crate::rest;
use crate::rest::appointment::{CompleteAppointmentBody, CreateAppointmentBody};

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        // Doctors
        rest::doctor::list_doctors,
        rest::doctor::get_doctor,
        rest::doctor::get_schedule,
        // Appointments
        rest::appointment::create_appointment,
        rest::appointment::get_appointment,
        rest::appointment::list_by_patient,
        rest::appointment::cancel_appointment,
        rest::appointment::complete_appointment,
        health::health_check,
    ),
    components(schemas(
        AppError, AppErrorKind, AuthUser, PortalRole,
        LoginRequest, RegisterRequest, DoctorLoginRequest, MessageResponse,
        DoctorProfile,
        Appointment, AppointmentStatus, BookAppointmentRequest,
        CreateAppointmentBody, CompleteAppointmentBody,
        health::HealthResponse,
    )),
    tags(
        (name = "doctors", description = "Doctor directory endpoints"),
        (name = "appointments", description = "Appointment booking and lifecycle endpoints"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "CareBridge API",
        description = "Patient and doctor healthcare portal API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the REST API at `/api/*`,
/// the health check at `/health`, and (if enabled) docs at `/docs`.
pub fn api_router(pool: Pool<Postgres>) -> Router {
    let state = AppState { pool };
    let flags = crate::config::feature_flags();

    let router = Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state);

    if flags.api_docs {
        router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
    } else {
        router
    }
}
