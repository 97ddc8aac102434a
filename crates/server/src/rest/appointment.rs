use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{AppError, Appointment, AppointmentStatus};

use crate::error_convert::SqlxErrorExt;

#[derive(Debug, serde::Deserialize, utoipa::ToSchema)]
pub struct CreateAppointmentBody {
    pub patient_id: i64,
    pub doctor_id: String,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    pub reason: String,
}

#[derive(Debug, Default, serde::Deserialize, utoipa::ToSchema)]
pub struct CompleteAppointmentBody {
    pub notes: Option<String>,
}

fn parse_appointment_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::bad_request("Invalid UUID format"))
}

async fn fetch_appointment(pool: &Pool<Postgres>, id: Uuid) -> Result<Appointment, AppError> {
    let row = sqlx::query!(
        r#"SELECT a.id, a.patient_id, a.doctor_id, d.full_name, d.specialization,
                  a.scheduled_at, a.reason, a.status, a.notes
           FROM appointments a
           JOIN doctors d ON d.id = a.doctor_id
           WHERE a.id = $1"#,
        id
    )
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?
    .ok_or_else(|| AppError::not_found(format!("Appointment {} not found", id)))?;

    Ok(Appointment {
        id: row.id,
        patient_id: row.patient_id,
        doctor_id: row.doctor_id,
        doctor_name: row.full_name,
        specialization: row.specialization,
        scheduled_at: row.scheduled_at,
        reason: row.reason,
        status: AppointmentStatus::from_str_or_default(&row.status),
        notes: row.notes,
    })
}

/// POST /api/appointments
#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = CreateAppointmentBody,
    responses(
        (status = 201, description = "Appointment booked", body = Appointment),
        (status = 400, description = "Invalid request", body = AppError),
        (status = 404, description = "Doctor or patient not found", body = AppError),
        (status = 409, description = "Slot conflict", body = AppError)
    ),
    tag = "appointments"
)]
pub async fn create_appointment(
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<CreateAppointmentBody>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    if body.reason.trim().len() < 3 {
        return Err(AppError::bad_request(
            "Reason must be at least 3 characters",
        ));
    }
    if body.scheduled_at <= chrono::Utc::now() {
        return Err(AppError::bad_request(
            "Appointments must be scheduled in the future",
        ));
    }

    let patient = sqlx::query_scalar!(
        "SELECT COUNT(*) FROM users WHERE id = $1",
        body.patient_id
    )
    .fetch_one(&pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?
    .unwrap_or(0);

    if patient == 0 {
        return Err(AppError::not_found(format!(
            "Patient {} not found",
            body.patient_id
        )));
    }

    let doctor = sqlx::query!(
        "SELECT accepting_patients FROM doctors WHERE id = $1",
        body.doctor_id
    )
    .fetch_optional(&pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?
    .ok_or_else(|| AppError::not_found(format!("Doctor {} not found", body.doctor_id)))?;

    if !doctor.accepting_patients {
        return Err(AppError::conflict(
            "This doctor is not accepting new patients",
        ));
    }

    let taken = sqlx::query_scalar!(
        r#"SELECT COUNT(*) FROM appointments
           WHERE doctor_id = $1 AND scheduled_at = $2 AND status = 'scheduled'"#,
        body.doctor_id,
        body.scheduled_at
    )
    .fetch_one(&pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?
    .unwrap_or(0);

    if taken > 0 {
        return Err(AppError::conflict("That time slot is taken"));
    }

    let id: Uuid = sqlx::query_scalar!(
        r#"INSERT INTO appointments (patient_id, doctor_id, scheduled_at, reason)
           VALUES ($1, $2, $3, $4)
           RETURNING id"#,
        body.patient_id,
        body.doctor_id,
        body.scheduled_at,
        body.reason
    )
    .fetch_one(&pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let appointment = fetch_appointment(&pool, id).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// GET /api/appointments/{id}
#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    params(("id" = String, Path, description = "Appointment UUID")),
    responses(
        (status = 200, description = "Appointment found", body = Appointment),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "appointments"
)]
pub async fn get_appointment(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<String>,
) -> Result<Json<Appointment>, AppError> {
    let uuid = parse_appointment_id(&id)?;
    let appointment = fetch_appointment(&pool, uuid).await?;
    Ok(Json(appointment))
}

/// GET /api/appointments/patient/{patient_id}
#[utoipa::path(
    get,
    path = "/api/appointments/patient/{patient_id}",
    params(("patient_id" = i64, Path, description = "Patient user ID")),
    responses((status = 200, description = "Appointments for patient", body = Vec<Appointment>)),
    tag = "appointments"
)]
pub async fn list_by_patient(
    State(pool): State<Pool<Postgres>>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let rows = sqlx::query!(
        r#"SELECT a.id, a.patient_id, a.doctor_id, d.full_name, d.specialization,
                  a.scheduled_at, a.reason, a.status, a.notes
           FROM appointments a
           JOIN doctors d ON d.id = a.doctor_id
           WHERE a.patient_id = $1
           ORDER BY a.scheduled_at"#,
        patient_id
    )
    .fetch_all(&pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let appointments = rows
        .into_iter()
        .map(|r| Appointment {
            id: r.id,
            patient_id: r.patient_id,
            doctor_id: r.doctor_id,
            doctor_name: r.full_name,
            specialization: r.specialization,
            scheduled_at: r.scheduled_at,
            reason: r.reason,
            status: AppointmentStatus::from_str_or_default(&r.status),
            notes: r.notes,
        })
        .collect();

    Ok(Json(appointments))
}

/// POST /api/appointments/{id}/cancel
#[utoipa::path(
    post,
    path = "/api/appointments/{id}/cancel",
    params(("id" = String, Path, description = "Appointment UUID")),
    responses(
        (status = 200, description = "Appointment cancelled", body = Appointment),
        (status = 404, description = "Not found", body = AppError),
        (status = 409, description = "Not cancellable", body = AppError)
    ),
    tag = "appointments"
)]
pub async fn cancel_appointment(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<String>,
) -> Result<Json<Appointment>, AppError> {
    let uuid = parse_appointment_id(&id)?;
    let current = fetch_appointment(&pool, uuid).await?;

    if !current.status.can_transition_to(AppointmentStatus::Cancelled) {
        return Err(AppError::conflict(format!(
            "Cannot cancel a {} appointment",
            current.status.as_str()
        )));
    }

    sqlx::query!(
        "UPDATE appointments SET status = 'cancelled' WHERE id = $1",
        uuid
    )
    .execute(&pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let updated = fetch_appointment(&pool, uuid).await?;
    Ok(Json(updated))
}

/// POST /api/appointments/{id}/complete
#[utoipa::path(
    post,
    path = "/api/appointments/{id}/complete",
    request_body = CompleteAppointmentBody,
    params(("id" = String, Path, description = "Appointment UUID")),
    responses(
        (status = 200, description = "Appointment completed", body = Appointment),
        (status = 404, description = "Not found", body = AppError),
        (status = 409, description = "Not completable", body = AppError)
    ),
    tag = "appointments"
)]
pub async fn complete_appointment(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<String>,
    Json(body): Json<CompleteAppointmentBody>,
) -> Result<Json<Appointment>, AppError> {
    let uuid = parse_appointment_id(&id)?;
    let current = fetch_appointment(&pool, uuid).await?;

    if !current.status.can_transition_to(AppointmentStatus::Completed) {
        return Err(AppError::conflict(format!(
            "Cannot complete a {} appointment",
            current.status.as_str()
        )));
    }

    sqlx::query!(
        "UPDATE appointments SET status = 'completed', notes = COALESCE($2, notes) WHERE id = $1",
        uuid,
        body.notes
    )
    .execute(&pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let updated = fetch_appointment(&pool, uuid).await?;
    Ok(Json(updated))
}
