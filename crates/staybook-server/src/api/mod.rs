mod hotels;
mod offers;
mod recommended;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use staybook_core::{EmptyPricingPolicy, HotelStore, StoreSource};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub source: StoreSource,
    pub empty_pricing: EmptyPricingPolicy,
}

/// Error response. The body is `{"error": "<message>"}`, which is the shape
/// the booking front-end already reads.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    store: &'static str,
    checked_at: DateTime<Utc>,
}

impl ApiError {
    pub fn not_found(message: &'static str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message,
        }
    }

    pub fn internal(message: &'static str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Load a fresh store for this request, logging the cause on failure.
pub(super) async fn load_store(
    state: &AppState,
    req_id: &RequestId,
    failure_message: &'static str,
) -> Result<HotelStore, ApiError> {
    state.source.load().await.map_err(|e| {
        tracing::error!(
            request_id = %req_id.0,
            store_source = %state.source,
            error = %e,
            "hotel store unavailable"
        );
        ApiError::internal(failure_message)
    })
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
        .expose_headers([HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/hotels", get(hotels::list_hotels))
        .route("/hotels/{id}", get(hotels::get_hotel))
        .route("/recommended_hotels", get(recommended::list_recommended))
        .route("/best_offer", get(offers::list_best_offers))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let checked_at = Utc::now();

    match state.source.load().await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthData {
                status: "ok",
                store: "ok",
                checked_at,
            }),
        ),
        Err(e) => {
            tracing::warn!(
                request_id = %req_id.0,
                error = %e,
                "health check: hotel store unavailable"
            );
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthData {
                    status: "degraded",
                    store: "unavailable",
                    checked_at,
                }),
            )
        }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
