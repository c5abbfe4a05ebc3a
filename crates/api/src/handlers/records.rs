use crate::dto::{AddRecordsRequest, DeleteRecordsRequest, UpdateRecordRequest};
use crate::errors::error_response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use ferrous_zone_domain::{Record, RecordType};
use tracing::debug;

pub async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, (StatusCode, String)> {
    match state.list_records.execute().await {
        Ok(records) => {
            debug!(count = records.len(), "Records retrieved");
            Ok(Json(records))
        }
        Err(e) => Err(error_response(e)),
    }
}

pub async fn add_records(
    State(state): State<AppState>,
    Json(request): Json<AddRecordsRequest>,
) -> Result<(StatusCode, Json<Vec<Record>>), (StatusCode, String)> {
    let records = request.into_records().map_err(error_response)?;

    match state.add_records.execute(records).await {
        Ok(added) => Ok((StatusCode::CREATED, Json(added))),
        Err(e) => Err(error_response(e)),
    }
}

pub async fn get_record(
    State(state): State<AppState>,
    Path((record_type, domain)): Path<(String, String)>,
) -> Result<Json<Record>, (StatusCode, String)> {
    let record_type: RecordType = record_type.parse().map_err(error_response)?;

    state
        .get_record
        .execute(record_type, &domain)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn get_records_by_domain(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<Vec<Record>>, (StatusCode, String)> {
    state
        .get_records_by_domain
        .execute(&domain)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn get_records_by_address(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<Vec<Record>>, (StatusCode, String)> {
    state
        .get_records_by_address
        .execute(&address)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn update_record(
    State(state): State<AppState>,
    Json(request): Json<UpdateRecordRequest>,
) -> Result<Json<Record>, (StatusCode, String)> {
    let update = request.into_update().map_err(error_response)?;

    state
        .update_record
        .execute(update)
        .await
        .map(Json)
        .map_err(error_response)
}

pub async fn delete_records(
    State(state): State<AppState>,
    Json(request): Json<DeleteRecordsRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let filter = request.into_filter().map_err(error_response)?;

    match state.delete_records.execute(filter).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(error_response(e)),
    }
}
