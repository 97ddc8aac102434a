use crate::common;
use axum::http::StatusCode;

#[tokio::test]
async fn test_get_appointment_success() {
    let (app, _pool, _guard) = common::test_app().await;
    let id = common::create_test_appointment(&app, "DOC002", &common::future_slot(4)).await;

    let (status, response) = common::get_json(&app, &format!("/api/appointments/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["id"], id.as_str());
    assert_eq!(response["doctor_name"], "Dr. Priya Raman");
    assert_eq!(response["patient_id"], common::TEST_PATIENT_ID);
}

#[tokio::test]
async fn test_get_appointment_invalid_uuid() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, response) = common::get_json(&app, "/api/appointments/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "BadRequest");
}

#[tokio::test]
async fn test_get_appointment_not_found() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, _) = common::get_json(
        &app,
        "/api/appointments/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
