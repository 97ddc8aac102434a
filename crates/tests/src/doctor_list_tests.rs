use crate::common;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_list_doctors_returns_seeded_directory() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, response) = common::get_json(&app, "/api/doctors").await;
    assert_eq!(status, StatusCode::OK);

    let doctors = response.as_array().expect("array of doctors");
    assert_eq!(doctors.len(), 4);

    // Sorted by full name
    let names: Vec<&str> = doctors
        .iter()
        .map(|d| d["full_name"].as_str().unwrap())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn test_list_doctors_filter_by_specialization() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, response) =
        common::get_json(&app, "/api/doctors?specialization=Cardiologist").await;
    assert_eq!(status, StatusCode::OK);

    let doctors = response.as_array().expect("array of doctors");
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0]["id"], "DOC001");
    assert_eq!(doctors[0]["specialization"], "Cardiologist");
}

#[tokio::test]
async fn test_list_doctors_unknown_specialization_is_empty() {
    let (app, _pool, _guard) = common::test_app().await;
    let (status, response) = common::get_json(&app, "/api/doctors?specialization=Astrology").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.as_array().map(|a| a.len()), Some(0));
}
