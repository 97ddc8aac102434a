use crate::common;
use axum::http::StatusCode;

#[tokio::test]
async fn test_list_by_patient_empty() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, response) = common::get_json(
        &app,
        &format!("/api/appointments/patient/{}", common::TEST_PATIENT_ID),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.as_array().map(|a| a.len()), Some(0));
}

#[tokio::test]
async fn test_list_by_patient_sorted_soonest_first() {
    let (app, _pool, _guard) = common::test_app().await;
    let later = common::create_test_appointment(&app, "DOC001", &common::future_slot(9)).await;
    let sooner = common::create_test_appointment(&app, "DOC002", &common::future_slot(2)).await;

    let (status, response) = common::get_json(
        &app,
        &format!("/api/appointments/patient/{}", common::TEST_PATIENT_ID),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let list = response.as_array().expect("array of appointments");
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], sooner.as_str());
    assert_eq!(list[1]["id"], later.as_str());
}

#[tokio::test]
async fn test_list_by_patient_includes_all_statuses() {
    let (app, _pool, _guard) = common::test_app().await;
    let kept = common::create_test_appointment(&app, "DOC001", &common::future_slot(2)).await;
    let cancelled = common::create_test_appointment(&app, "DOC002", &common::future_slot(3)).await;

    let (status, _) = common::post_json(
        &app,
        &format!("/api/appointments/{cancelled}/cancel"),
        "{}",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = common::get_json(
        &app,
        &format!("/api/appointments/patient/{}", common::TEST_PATIENT_ID),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let list = response.as_array().expect("array of appointments");
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], kept.as_str());
    assert_eq!(list[0]["status"], "scheduled");
    assert_eq!(list[1]["status"], "cancelled");
}
