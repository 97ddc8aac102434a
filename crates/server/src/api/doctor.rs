use dioxus::prelude::*;
use shared_types::DoctorProfile;

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, SqlxErrorExt, ValidateRequest};

/// Sign in as a doctor using the provisioned contact email and password.
///
/// Doctor sessions are stateless: the profile is returned to the client and
/// held in memory only. No cookies are issued, so "signing out" of the doctor
/// dashboard is purely a client-side state reset.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn doctor_login(email: String, password: String) -> Result<DoctorProfile, ServerFnError> {
    use crate::auth::password as pw;
    use shared_types::{AppError, DoctorLoginRequest};

    let req = DoctorLoginRequest {
        email: email.clone(),
        password: password.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    let doctor = sqlx::query!(
        r#"SELECT id, full_name, specialization, years_experience, contact_email,
                  contact_phone, password_hash, accepting_patients
           FROM doctors WHERE contact_email = $1"#,
        email
    )
    .fetch_optional(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?
    .ok_or_else(|| AppError::unauthorized("Invalid email or password").into_server_fn_error())?;

    let password_hash = doctor.password_hash.ok_or_else(|| {
        AppError::unauthorized("This account has not been activated yet").into_server_fn_error()
    })?;

    let valid = pw::verify_password(&password, &password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    if !valid {
        return Err(AppError::unauthorized("Invalid email or password").into_server_fn_error());
    }

    Ok(DoctorProfile {
        id: doctor.id,
        full_name: doctor.full_name,
        specialization: doctor.specialization,
        years_experience: doctor.years_experience,
        contact_email: doctor.contact_email,
        contact_phone: doctor.contact_phone,
        accepting_patients: doctor.accepting_patients,
    })
}

/// List the doctor directory, optionally filtered by specialization.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_doctors(
    specialization: Option<String>,
) -> Result<Vec<DoctorProfile>, ServerFnError> {
    let db = get_db().await;

    let rows = sqlx::query!(
        r#"SELECT id, full_name, specialization, years_experience, contact_email,
                  contact_phone, accepting_patients
           FROM doctors
           WHERE $1::TEXT IS NULL OR specialization = $1
           ORDER BY full_name"#,
        specialization.as_deref()
    )
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    Ok(rows
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
        .collect())
}

/// Get a single doctor's public profile by id.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_doctor(doctor_id: String) -> Result<DoctorProfile, ServerFnError> {
    use shared_types::AppError;

    let db = get_db().await;
    let doctor = sqlx::query!(
        r#"SELECT id, full_name, specialization, years_experience, contact_email,
                  contact_phone, accepting_patients
           FROM doctors WHERE id = $1"#,
        doctor_id
    )
    .fetch_optional(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?
    .ok_or_else(|| AppError::not_found("Doctor not found").into_server_fn_error())?;

    Ok(DoctorProfile {
        id: doctor.id,
        full_name: doctor.full_name,
        specialization: doctor.specialization,
        years_experience: doctor.years_experience,
        contact_email: doctor.contact_email,
        contact_phone: doctor.contact_phone,
        accepting_patients: doctor.accepting_patients,
    })
}
