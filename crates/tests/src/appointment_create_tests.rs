use crate::common;
use axum::http::StatusCode;

#[tokio::test]
async fn test_create_appointment_success() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = serde_json::json!({
        "patient_id": common::TEST_PATIENT_ID,
        "doctor_id": "DOC001",
        "scheduled_at": common::future_slot(5),
        "reason": "Chest pain follow-up",
    });
    let (status, response) = common::post_json(&app, "/api/appointments", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["doctor_id"], "DOC001");
    assert_eq!(response["doctor_name"], "Dr. James Miller");
    assert_eq!(response["specialization"], "Cardiologist");
    assert_eq!(response["status"], "scheduled");
    assert_eq!(response["reason"], "Chest pain follow-up");
    assert!(response["notes"].is_null());
}

#[tokio::test]
async fn test_create_appointment_reason_too_short() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = serde_json::json!({
        "patient_id": common::TEST_PATIENT_ID,
        "doctor_id": "DOC001",
        "scheduled_at": common::future_slot(5),
        "reason": "ow",
    });
    let (status, response) = common::post_json(&app, "/api/appointments", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "BadRequest");
}

#[tokio::test]
async fn test_create_appointment_in_the_past_rejected() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = serde_json::json!({
        "patient_id": common::TEST_PATIENT_ID,
        "doctor_id": "DOC001",
        "scheduled_at": "2020-01-01T09:00:00Z",
        "reason": "Annual check-up",
    });
    let (status, _) = common::post_json(&app, "/api/appointments", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_appointment_unknown_doctor() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = serde_json::json!({
        "patient_id": common::TEST_PATIENT_ID,
        "doctor_id": "DOC999",
        "scheduled_at": common::future_slot(5),
        "reason": "Annual check-up",
    });
    let (status, _) = common::post_json(&app, "/api/appointments", &body.to_string()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_appointment_unknown_patient() {
    let (app, _pool, _guard) = common::test_app().await;
    let body = serde_json::json!({
        "patient_id": 9999,
        "doctor_id": "DOC001",
        "scheduled_at": common::future_slot(5),
        "reason": "Annual check-up",
    });
    let (status, _) = common::post_json(&app, "/api/appointments", &body.to_string()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_appointment_doctor_not_accepting() {
    let (app, pool, _guard) = common::test_app().await;
    sqlx::query("UPDATE doctors SET accepting_patients = FALSE WHERE id = 'DOC004'")
        .execute(&pool)
        .await
        .unwrap();

    let body = serde_json::json!({
        "patient_id": common::TEST_PATIENT_ID,
        "doctor_id": "DOC004",
        "scheduled_at": common::future_slot(5),
        "reason": "Annual check-up",
    });
    let (status, response) = common::post_json(&app, "/api/appointments", &body.to_string()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(response["kind"], "Conflict");
}

#[tokio::test]
async fn test_create_appointment_slot_conflict() {
    let (app, _pool, _guard) = common::test_app().await;
    let slot = common::future_slot(5);
    common::create_test_appointment(&app, "DOC001", &slot).await;

    let body = serde_json::json!({
        "patient_id": common::TEST_PATIENT_ID,
        "doctor_id": "DOC001",
        "scheduled_at": slot,
        "reason": "Second booking, same slot",
    });
    let (status, _) = common::post_json(&app, "/api/appointments", &body.to_string()).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_same_slot_free_after_cancellation() {
    let (app, _pool, _guard) = common::test_app().await;
    let slot = common::future_slot(5);
    let id = common::create_test_appointment(&app, "DOC001", &slot).await;

    let (status, _) =
        common::post_json(&app, &format!("/api/appointments/{id}/cancel"), "{}").await;
    assert_eq!(status, StatusCode::OK);

    // Cancelled appointments release the slot
    common::create_test_appointment(&app, "DOC001", &slot).await;
}
