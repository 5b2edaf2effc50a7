//! `GET /best_offer`: top ten hotels by best available discount.

use axum::{extract::State, Extension, Json};
use staybook_core::BestOfferSummary;

use crate::middleware::RequestId;

use super::{load_store, ApiError, AppState};

const BEST_OFFERS_LOAD_FAILED: &str = "Failed to load best offers data.";

pub(super) async fn list_best_offers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<Vec<BestOfferSummary>>, ApiError> {
    let store = load_store(&state, &req_id, BEST_OFFERS_LOAD_FAILED).await?;

    let offers = staybook_core::rank_best_offers(&store, state.empty_pricing).map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "best offer ranking failed");
        ApiError::internal(BEST_OFFERS_LOAD_FAILED)
    })?;

    Ok(Json(offers))
}
