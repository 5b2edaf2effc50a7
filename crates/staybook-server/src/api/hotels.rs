//! `GET /hotels` and `GET /hotels/{id}`.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::Value;

use crate::middleware::RequestId;

use super::{load_store, ApiError, AppState};

const HOTEL_LOAD_FAILED: &str = "Failed to load hotel data.";
const HOTELS_LOAD_FAILED: &str = "Failed to load hotels data.";

pub(super) async fn get_hotel(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let store = load_store(&state, &req_id, HOTEL_LOAD_FAILED).await?;

    let hotel = staybook_core::find_by_id(&store, &id).map_err(|e| {
        tracing::debug!(request_id = %req_id.0, error = %e, "hotel lookup missed");
        ApiError::not_found("Hotel not found")
    })?;

    Ok(Json(hotel.clone()))
}

pub(super) async fn list_hotels(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let store = load_store(&state, &req_id, HOTELS_LOAD_FAILED).await?;
    Ok(Json(staybook_core::all_hotels(&store).to_vec()))
}
