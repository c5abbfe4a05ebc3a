use crate::dto::DnsServerResponse;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use ferrous_zone_infrastructure::dns::ControllerError;
use tracing::{error, warn};

async fn current_status(state: &AppState) -> DnsServerResponse {
    let local_address = state.dns_server.local_addr().await;
    DnsServerResponse {
        running: local_address.is_some(),
        configured_address: state.dns_server.configured_address().to_string(),
        local_address: local_address.map(|addr| addr.to_string()),
    }
}

fn controller_error(e: ControllerError) -> (StatusCode, String) {
    match e {
        ControllerError::AlreadyRunning | ControllerError::NotRunning => {
            warn!(error = %e, "Rejected DNS server transition");
            (StatusCode::CONFLICT, e.to_string())
        }
        ControllerError::Bind { .. } => {
            error!(error = %e, "DNS server failed to bind");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub async fn dns_status(State(state): State<AppState>) -> Json<DnsServerResponse> {
    Json(current_status(&state).await)
}

pub async fn start_dns(
    State(state): State<AppState>,
) -> Result<Json<DnsServerResponse>, (StatusCode, String)> {
    state.dns_server.start().await.map_err(controller_error)?;
    Ok(Json(current_status(&state).await))
}

pub async fn stop_dns(
    State(state): State<AppState>,
) -> Result<Json<DnsServerResponse>, (StatusCode, String)> {
    state.dns_server.stop().await.map_err(controller_error)?;
    Ok(Json(current_status(&state).await))
}

pub async fn reload_dns(
    State(state): State<AppState>,
) -> Result<Json<DnsServerResponse>, (StatusCode, String)> {
    state.dns_server.reload().await.map_err(controller_error)?;
    Ok(Json(current_status(&state).await))
}
