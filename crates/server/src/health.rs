use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the portal start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Liveness payload. The database probe counts the doctor roster, so a
/// healthy response also confirms the seed migration ran.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub db: String,
    pub doctors_on_roster: i64,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Health check handler.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Portal health and database probe", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(pool): State<Pool<Postgres>>) -> Json<HealthResponse> {
    let (db, doctors_on_roster) = match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM doctors")
        .fetch_one(&pool)
        .await
    {
        Ok(count) => ("ok".to_string(), count),
        Err(e) => (format!("error: {e}"), 0),
    };

    let status = if db == "ok" { "ok" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        db,
        doctors_on_roster,
        uptime_seconds: START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
