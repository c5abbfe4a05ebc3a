use axum::http::StatusCode;
use ferrous_zone_domain::DomainError;
use tracing::error;

/// Map a domain error onto the response the management API returns.
pub fn error_response(e: DomainError) -> (StatusCode, String) {
    let status = match &e {
        DomainError::DoesNotExist { .. } | DomainError::ZeroRecords(_) => StatusCode::NOT_FOUND,
        e if e.is_validation() => StatusCode::BAD_REQUEST,
        DomainError::Unimplemented => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Fallback(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!(error = %e, "Request failed");
    }

    (status, e.to_string())
}
