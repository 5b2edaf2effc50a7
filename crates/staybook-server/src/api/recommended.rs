use axum::{extract::State, Extension, Json};
use serde_json::Value;

use crate::middleware::RequestId;

use super::{load_store, ApiError, AppState};

const RECOMMENDED_LOAD_FAILED: &str = "Failed to load recommended hotels data.";

pub(super) async fn list_recommended(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let store = load_store(&state, &req_id, RECOMMENDED_LOAD_FAILED).await?;
    Ok(Json(staybook_core::recommended(&store).to_vec()))
}
