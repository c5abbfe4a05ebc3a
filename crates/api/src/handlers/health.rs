use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use ferrous_zone_domain::{HealthReport, HealthStatus};

/// Full health report; an unhealthy system answers 503 with the same body.
pub async fn get_health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let report = state.get_health.execute().await;
    let status = match report.status {
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
    };
    (status, Json(report))
}
