use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use serde_json::Value;
use sqlx::{Pool, Postgres};
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Global mutex ensuring tests run sequentially against the shared database.
/// Each test acquires this lock before truncating and seeding, preventing
/// concurrent tests from interfering with each other's data.
static TEST_MUTEX: std::sync::LazyLock<Mutex<()>> = std::sync::LazyLock::new(|| Mutex::new(()));

/// Fixed patient id seeded for every test.
pub const TEST_PATIENT_ID: i64 = 1;

/// Build a test router backed by a real Postgres pool.
/// Acquires a global lock, truncates appointment data, and re-seeds the test
/// patient. The returned `MutexGuard` must be held for the duration of the
/// test to prevent concurrent tests from truncating data.
pub async fn test_app() -> (Router, Pool<Postgres>, tokio::sync::MutexGuard<'static, ()>) {
    // Acquire the global test lock — held until the test completes
    let guard = TEST_MUTEX.lock().await;

    let _ = dotenvy::dotenv();

    let database_url = std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("TEST_DATABASE_URL or DATABASE_URL must be set for tests");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    // Run migrations
    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    // Truncate all mutable data; the doctors table keeps its migration seeds
    sqlx::query("TRUNCATE appointments, refresh_tokens, users CASCADE")
        .execute(&pool)
        .await
        .expect("Failed to truncate");

    sqlx::query("UPDATE doctors SET accepting_patients = TRUE")
        .execute(&pool)
        .await
        .expect("Failed to reset doctors");

    // Seed a test patient (id=1) for appointment tests
    sqlx::query(
        "INSERT INTO users (id, username, display_name, email, role) \
         VALUES (1, 'testpatient', 'Test Patient', 'patient@test.com', 'patient') \
         ON CONFLICT (id) DO NOTHING",
    )
    .execute(&pool)
    .await
    .expect("Failed to seed test patient");

    let state = server::db::AppState { pool: pool.clone() };
    let router = server::rest::api_router()
        .route("/health", get(server::health::health_check))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            server::auth::middleware::auth_middleware,
        ))
        .with_state(state);

    (router, pool, guard)
}

/// POST JSON to a route.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// GET a route.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };

    (status, body)
}

/// An ISO timestamp `days` days in the future, on a minute boundary.
pub fn future_slot(days: i64) -> String {
    let at = chrono::Utc::now() + chrono::Duration::days(days);
    at.format("%Y-%m-%dT%H:%M:00Z").to_string()
}

/// Book an appointment for the test patient and return its id.
pub async fn create_test_appointment(app: &Router, doctor_id: &str, slot: &str) -> String {
    let body = serde_json::json!({
        "patient_id": TEST_PATIENT_ID,
        "doctor_id": doctor_id,
        "scheduled_at": slot,
        "reason": "Annual check-up",
    });
    let (status, response) = post_json(app, "/api/appointments", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED, "booking failed: {response}");
    response["id"].as_str().expect("appointment id").to_string()
}
