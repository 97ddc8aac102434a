use dioxus::prelude::*;
use shared_types::{Appointment, MessageResponse};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, SqlxErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

#[cfg(feature = "server")]
fn row_to_appointment(
    id: uuid::Uuid,
    patient_id: i64,
    doctor_id: String,
    doctor_name: String,
    specialization: String,
    scheduled_at: chrono::DateTime<chrono::Utc>,
    reason: String,
    status: String,
    notes: Option<String>,
) -> Appointment {
    Appointment {
        id,
        patient_id,
        doctor_id,
        doctor_name,
        specialization,
        scheduled_at,
        reason,
        status: shared_types::AppointmentStatus::from_str_or_default(&status),
        notes,
    }
}

/// Book an appointment with a doctor. Requires a patient session.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn book_appointment(
    doctor_id: String,
    scheduled_at: chrono::DateTime<chrono::Utc>,
    reason: String,
) -> Result<Appointment, ServerFnError> {
    use shared_types::{AppError, BookAppointmentRequest};

    let claims = require_auth()?;

    let req = BookAppointmentRequest {
        doctor_id: doctor_id.clone(),
        scheduled_at,
        reason: reason.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    if scheduled_at <= chrono::Utc::now() {
        return Err(
            AppError::bad_request("Appointments must be scheduled in the future")
                .into_server_fn_error(),
        );
    }

    let db = get_db().await;

    let doctor = sqlx::query!(
        "SELECT full_name, specialization, accepting_patients FROM doctors WHERE id = $1",
        doctor_id
    )
    .fetch_optional(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?
    .ok_or_else(|| AppError::not_found("Doctor not found").into_server_fn_error())?;

    if !doctor.accepting_patients {
        return Err(
            AppError::conflict("This doctor is not accepting new patients").into_server_fn_error(),
        );
    }

    // One scheduled appointment per doctor/time slot
    let taken = sqlx::query_scalar!(
        r#"SELECT COUNT(*) FROM appointments
           WHERE doctor_id = $1 AND scheduled_at = $2 AND status = 'scheduled'"#,
        doctor_id,
        scheduled_at
    )
    .fetch_one(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?
    .unwrap_or(0);

    if taken > 0 {
        return Err(AppError::conflict("That time slot is taken").into_server_fn_error());
    }

    let row = sqlx::query!(
        r#"INSERT INTO appointments (patient_id, doctor_id, scheduled_at, reason)
           VALUES ($1, $2, $3, $4)
           RETURNING id, patient_id, doctor_id, scheduled_at, reason, status, notes"#,
        claims.sub,
        doctor_id,
        scheduled_at,
        reason
    )
    .fetch_one(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    Ok(row_to_appointment(
        row.id,
        row.patient_id,
        row.doctor_id,
        doctor.full_name,
        doctor.specialization,
        row.scheduled_at,
        row.reason,
        row.status,
        row.notes,
    ))
}

/// List the current patient's appointments, soonest first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn my_appointments() -> Result<Vec<Appointment>, ServerFnError> {
    let claims = require_auth()?;
    let db = get_db().await;

    let rows = sqlx::query!(
        r#"SELECT a.id, a.patient_id, a.doctor_id, d.full_name, d.specialization,
                  a.scheduled_at, a.reason, a.status, a.notes
           FROM appointments a
           JOIN doctors d ON d.id = a.doctor_id
           WHERE a.patient_id = $1
           ORDER BY a.scheduled_at"#,
        claims.sub
    )
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    Ok(rows
        .into_iter()
        .map(|r| {
            row_to_appointment(
                r.id,
                r.patient_id,
                r.doctor_id,
                r.full_name,
                r.specialization,
                r.scheduled_at,
                r.reason,
                r.status,
                r.notes,
            )
        })
        .collect())
}

/// Cancel one of the current patient's scheduled appointments.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn cancel_appointment(appointment_id: String) -> Result<MessageResponse, ServerFnError> {
    use shared_types::{AppError, AppointmentStatus};

    let claims = require_auth()?;

    let appt_id = uuid::Uuid::parse_str(&appointment_id)
        .map_err(|_| AppError::bad_request("Invalid appointment ID").into_server_fn_error())?;

    let db = get_db().await;
    let row = sqlx::query!(
        "SELECT patient_id, status FROM appointments WHERE id = $1",
        appt_id
    )
    .fetch_optional(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?
    .ok_or_else(|| AppError::not_found("Appointment not found").into_server_fn_error())?;

    if row.patient_id != claims.sub {
        return Err(AppError::not_found("Appointment not found").into_server_fn_error());
    }

    let current = AppointmentStatus::from_str_or_default(&row.status);
    if !current.can_transition_to(AppointmentStatus::Cancelled) {
        return Err(AppError::conflict(format!(
            "Cannot cancel a {} appointment",
            current.as_str()
        ))
        .into_server_fn_error());
    }

    sqlx::query!(
        "UPDATE appointments SET status = 'cancelled' WHERE id = $1",
        appt_id
    )
    .execute(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    Ok(MessageResponse {
        message: "Appointment cancelled.".to_string(),
    })
}

/// List a doctor's scheduled appointments, soonest first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn doctor_schedule(doctor_id: String) -> Result<Vec<Appointment>, ServerFnError> {
    use shared_types::AppError;

    let db = get_db().await;

    let exists = sqlx::query_scalar!("SELECT COUNT(*) FROM doctors WHERE id = $1", doctor_id)
        .fetch_one(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?
        .unwrap_or(0);

    if exists == 0 {
        return Err(AppError::not_found("Doctor not found").into_server_fn_error());
    }

    let rows = sqlx::query!(
        r#"SELECT a.id, a.patient_id, a.doctor_id, d.full_name, d.specialization,
                  a.scheduled_at, a.reason, a.status, a.notes
           FROM appointments a
           JOIN doctors d ON d.id = a.doctor_id
           WHERE a.doctor_id = $1 AND a.status = 'scheduled'
           ORDER BY a.scheduled_at"#,
        doctor_id
    )
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    Ok(rows
        .into_iter()
        .map(|r| {
            row_to_appointment(
                r.id,
                r.patient_id,
                r.doctor_id,
                r.full_name,
                r.specialization,
                r.scheduled_at,
                r.reason,
                r.status,
                r.notes,
            )
        })
        .collect())
}

/// Mark an appointment as completed, with optional visit notes.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn complete_appointment(
    appointment_id: String,
    notes: Option<String>,
) -> Result<Appointment, ServerFnError> {
    use shared_types::{AppError, AppointmentStatus};

    let appt_id = uuid::Uuid::parse_str(&appointment_id)
        .map_err(|_| AppError::bad_request("Invalid appointment ID").into_server_fn_error())?;

    let db = get_db().await;
    let row = sqlx::query!("SELECT status FROM appointments WHERE id = $1", appt_id)
        .fetch_optional(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?
        .ok_or_else(|| AppError::not_found("Appointment not found").into_server_fn_error())?;

    let current = AppointmentStatus::from_str_or_default(&row.status);
    if !current.can_transition_to(AppointmentStatus::Completed) {
        return Err(AppError::conflict(format!(
            "Cannot complete a {} appointment",
            current.as_str()
        ))
        .into_server_fn_error());
    }

    let updated = sqlx::query!(
        r#"UPDATE appointments a SET status = 'completed', notes = COALESCE($2, a.notes)
           FROM doctors d
           WHERE a.id = $1 AND d.id = a.doctor_id
           RETURNING a.id, a.patient_id, a.doctor_id, d.full_name, d.specialization,
                     a.scheduled_at, a.reason, a.status, a.notes"#,
        appt_id,
        notes
    )
    .fetch_one(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    Ok(row_to_appointment(
        updated.id,
        updated.patient_id,
        updated.doctor_id,
        updated.full_name,
        updated.specialization,
        updated.scheduled_at,
        updated.reason,
        updated.status,
        updated.notes,
    ))
}
