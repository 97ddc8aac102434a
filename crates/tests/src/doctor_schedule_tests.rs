use crate::common;
use axum::http::StatusCode;

#[tokio::test]
async fn test_schedule_empty_for_seeded_doctor() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, response) = common::get_json(&app, "/api/doctors/DOC002/schedule").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.as_array().map(|a| a.len()), Some(0));
}

#[tokio::test]
async fn test_schedule_includes_booked_appointment() {
    let (app, _pool, _guard) = common::test_app().await;
    let id = common::create_test_appointment(&app, "DOC001", &common::future_slot(3)).await;

    let (status, response) = common::get_json(&app, "/api/doctors/DOC001/schedule").await;
    assert_eq!(status, StatusCode::OK);
    let schedule = response.as_array().expect("array of appointments");
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0]["id"], id.as_str());
    assert_eq!(schedule[0]["doctor_name"], "Dr. James Miller");
    assert_eq!(schedule[0]["status"], "scheduled");
}

#[tokio::test]
async fn test_schedule_excludes_cancelled_appointments() {
    let (app, _pool, _guard) = common::test_app().await;
    let id = common::create_test_appointment(&app, "DOC001", &common::future_slot(3)).await;

    let (status, _) =
        common::post_json(&app, &format!("/api/appointments/{id}/cancel"), "{}").await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = common::get_json(&app, "/api/doctors/DOC001/schedule").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.as_array().map(|a| a.len()), Some(0));
}

#[tokio::test]
async fn test_schedule_sorted_soonest_first() {
    let (app, _pool, _guard) = common::test_app().await;
    let later = common::create_test_appointment(&app, "DOC001", &common::future_slot(10)).await;
    let sooner = common::create_test_appointment(&app, "DOC001", &common::future_slot(2)).await;

    let (status, response) = common::get_json(&app, "/api/doctors/DOC001/schedule").await;
    assert_eq!(status, StatusCode::OK);
    let schedule = response.as_array().expect("array of appointments");
    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule[0]["id"], sooner.as_str());
    assert_eq!(schedule[1]["id"], later.as_str());
}

#[tokio::test]
async fn test_schedule_unknown_doctor_not_found() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, _) = common::get_json(&app, "/api/doctors/DOC999/schedule").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
