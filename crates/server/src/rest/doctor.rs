use axum::{
    extract::{Path, Query, State},
    Json,
};
use sqlx::{Pool, Postgres};

use shared_types::{AppError, Appointment, AppointmentStatus, DoctorProfile};

use crate::error_convert::SqlxErrorExt;

#[derive(Debug, serde::Deserialize)]
pub struct DirectoryQuery {
    pub specialization: Option<String>,
}

/// GET /api/doctors
#[utoipa::path(
    get,
    path = "/api/doctors",
    params(("specialization" = Option<String>, Query, description = "Filter by specialization")),
    responses((status = 200, description = "Doctor directory", body = Vec<DoctorProfile>)),
    tag = "doctors"
)]
pub async fn list_doctors(
    State(pool): State<Pool<Postgres>>,
    Query(params): Query<DirectoryQuery>,
) -> Result<Json<Vec<DoctorProfile>>, AppError> {
    let rows = sqlx::query!(
        r#"SELECT id, full_name, specialization, years_experience, contact_email,
                  contact_phone, accepting_patients
           FROM doctors
           WHERE $1::TEXT IS NULL OR specialization = $1
           ORDER BY full_name"#,
        params.specialization.as_deref()
    )
    .fetch_all(&pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let doctors = rows
        .into_iter()
        .map(|r| DoctorProfile {
            id: r.id,
            full_name: r.full_name,
            specialization: r.specialization,
            years_experience: r.years_experience,
            contact_email: r.contact_email,
            contact_phone: r.contact_phone,
            accepting_patients: r.accepting_patients,
        })
        .collect();

    Ok(Json(doctors))
}

/// GET /api/doctors/{id}
#[utoipa::path(
    get,
    path = "/api/doctors/{id}",
    params(("id" = String, Path, description = "Doctor ID, e.g. DOC001")),
    responses(
        (status = 200, description = "Doctor found", body = DoctorProfile),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "doctors"
)]
pub async fn get_doctor(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<String>,
) -> Result<Json<DoctorProfile>, AppError> {
    let row = sqlx::query!(
        r#"SELECT id, full_name, specialization, years_experience, contact_email,
                  contact_phone, accepting_patients
           FROM doctors WHERE id = $1"#,
        id
    )
    .fetch_optional(&pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?
    .ok_or_else(|| AppError::not_found(format!("Doctor {} not found", id)))?;

    Ok(Json(DoctorProfile {
        id: row.id,
        full_name: row.full_name,
        specialization: row.specialization,
        years_experience: row.years_experience,
        contact_email: row.contact_email,
        contact_phone: row.contact_phone,
        accepting_patients: row.accepting_patients,
    }))
}

/// GET /api/doctors/{id}/schedule
/// Scheduled appointments only, soonest first.
#[utoipa::path(
    get,
    path = "/api/doctors/{id}/schedule",
    params(("id" = String, Path, description = "Doctor ID, e.g. DOC001")),
    responses(
        (status = 200, description = "Scheduled appointments", body = Vec<Appointment>),
        (status = 404, description = "Not found", body = AppError)
    ),
    tag = "doctors"
)]
pub async fn get_schedule(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let exists = sqlx::query_scalar!("SELECT COUNT(*) FROM doctors WHERE id = $1", id)
        .fetch_one(&pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?
        .unwrap_or(0);

    if exists == 0 {
        return Err(AppError::not_found(format!("Doctor {} not found", id)));
    }

    let rows = sqlx::query!(
        r#"SELECT a.id, a.patient_id, a.doctor_id, d.full_name, d.specialization,
                  a.scheduled_at, a.reason, a.status, a.notes
           FROM appointments a
           JOIN doctors d ON d.id = a.doctor_id
           WHERE a.doctor_id = $1 AND a.status = 'scheduled'
           ORDER BY a.scheduled_at"#,
        id
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
