use crate::common;
use axum::http::StatusCode;

#[tokio::test]
async fn test_cancel_scheduled_appointment() {
    let (app, _pool, _guard) = common::test_app().await;
    let id = common::create_test_appointment(&app, "DOC001", &common::future_slot(3)).await;

    let (status, response) =
        common::post_json(&app, &format!("/api/appointments/{id}/cancel"), "{}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "cancelled");
}

#[tokio::test]
async fn test_cancel_twice_conflicts() {
    let (app, _pool, _guard) = common::test_app().await;
    let id = common::create_test_appointment(&app, "DOC001", &common::future_slot(3)).await;

    let (status, _) =
        common::post_json(&app, &format!("/api/appointments/{id}/cancel"), "{}").await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) =
        common::post_json(&app, &format!("/api/appointments/{id}/cancel"), "{}").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(response["kind"], "Conflict");
}

#[tokio::test]
async fn test_cancel_completed_appointment_conflicts() {
    let (app, _pool, _guard) = common::test_app().await;
    let id = common::create_test_appointment(&app, "DOC001", &common::future_slot(3)).await;

    let (status, _) =
        common::post_json(&app, &format!("/api/appointments/{id}/complete"), "{}").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) =
        common::post_json(&app, &format!("/api/appointments/{id}/cancel"), "{}").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_cancel_unknown_appointment() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, _) = common::post_json(
        &app,
        "/api/appointments/00000000-0000-0000-0000-000000000000/cancel",
        "{}",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
