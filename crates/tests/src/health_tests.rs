use crate::common;
use axum::http::StatusCode;

#[tokio::test]
async fn test_health_check_ok() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, response) = common::get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "ok");
    assert_eq!(response["db"], "ok");
    // The probe counts the seeded roster, confirming migrations ran
    assert_eq!(response["doctors_on_roster"], 4);
}
