use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route(
            "/records",
            get(handlers::list_records)
                .post(handlers::add_records)
                .put(handlers::update_record)
                .delete(handlers::delete_records),
        )
        .route(
            "/records/by-type/{record_type}/{domain}",
            get(handlers::get_record),
        )
        .route(
            "/records/by-domain/{domain}",
            get(handlers::get_records_by_domain),
        )
        .route(
            "/records/by-address/{address}",
            get(handlers::get_records_by_address),
        )
        .route("/dns", get(handlers::dns_status))
        .route("/dns/start", post(handlers::start_dns))
        .route("/dns/stop", post(handlers::stop_dns))
        .route("/dns/reload", post(handlers::reload_dns))
        .with_state(state)
}
