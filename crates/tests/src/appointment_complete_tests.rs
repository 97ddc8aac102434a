use crate::common;
use axum::http::StatusCode;

#[tokio::test]
async fn test_complete_with_notes() {
    let (app, _pool, _guard) = common::test_app().await;
    let id = common::create_test_appointment(&app, "DOC003", &common::future_slot(2)).await;

    let body = serde_json::json!({ "notes": "BP normal, follow up in 6 months" });
    let (status, response) = common::post_json(
        &app,
        &format!("/api/appointments/{id}/complete"),
        &body.to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "completed");
    assert_eq!(response["notes"], "BP normal, follow up in 6 months");
}

#[tokio::test]
async fn test_complete_without_notes_keeps_null() {
    let (app, _pool, _guard) = common::test_app().await;
    let id = common::create_test_appointment(&app, "DOC003", &common::future_slot(2)).await;

    let (status, response) =
        common::post_json(&app, &format!("/api/appointments/{id}/complete"), "{}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "completed");
    assert!(response["notes"].is_null());
}

#[tokio::test]
async fn test_complete_cancelled_appointment_conflicts() {
    let (app, _pool, _guard) = common::test_app().await;
    let id = common::create_test_appointment(&app, "DOC003", &common::future_slot(2)).await;

    let (status, _) =
        common::post_json(&app, &format!("/api/appointments/{id}/cancel"), "{}").await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) =
        common::post_json(&app, &format!("/api/appointments/{id}/complete"), "{}").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(response["kind"], "Conflict");
}

#[tokio::test]
async fn test_complete_twice_conflicts() {
    let (app, _pool, _guard) = common::test_app().await;
    let id = common::create_test_appointment(&app, "DOC003", &common::future_slot(2)).await;

    let (status, _) =
        common::post_json(&app, &format!("/api/appointments/{id}/complete"), "{}").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) =
        common::post_json(&app, &format!("/api/appointments/{id}/complete"), "{}").await;
    assert_eq!(status, StatusCode::CONFLICT);
}
