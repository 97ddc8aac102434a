use crate::common;
use axum::http::StatusCode;

#[tokio::test]
async fn test_get_doctor_success() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, response) = common::get_json(&app, "/api/doctors/DOC001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["id"], "DOC001");
    assert_eq!(response["full_name"], "Dr. James Miller");
    assert_eq!(response["specialization"], "Cardiologist");
    assert_eq!(response["years_experience"], 15);
    assert_eq!(response["accepting_patients"], true);
}

#[tokio::test]
async fn test_get_doctor_not_found() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, response) = common::get_json(&app, "/api/doctors/DOC999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["kind"], "NotFound");
}
