//! Request handlers for the client API.

use super::dto::BulkInsertBody;
use super::error::ApiError;
use super::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use rolodex::{Client, ClientDraft};
use serde_json::Value;

/// `GET /api/clients`
pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Client>>, ApiError> {
    let clients = state.service.list_clients().await?;
    Ok(Json(clients))
}

/// `POST /api/clients`
pub async fn create_client(
    State(state): State<AppState>,
    Json(draft): Json<ClientDraft>,
) -> Result<(StatusCode, Json<Client>), ApiError> {
    let created = state.service.create_one(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `POST /api/clients/bulk`
///
/// The body is taken as a raw JSON value so that a non-array payload maps
/// to a typed 400 instead of a deserializer rejection.
pub async fn create_clients_bulk(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<BulkInsertBody>), ApiError> {
    let report = state.service.create_bulk(payload).await?;
    Ok((StatusCode::CREATED, Json(report.into())))
}

/// `GET /healthz`
pub async fn health() -> StatusCode {
    StatusCode::OK
}
