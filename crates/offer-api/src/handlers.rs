//! # Request Handlers
//!
//! Axum request handlers for the offers API.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use offer_core::{NewOffer, Offer};
use tracing::{debug, info, instrument};

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "offers",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Get a usable offer.
///
/// Unknown, cancelled and expired offers all answer 404.
#[instrument(skip(state))]
pub async fn get_offer(
    State(state): State<AppState>,
    Path(offer_code): Path<String>,
) -> Result<Json<Offer>, ApiError> {
    debug!("Getting offer with code [{}]", offer_code);
    let offer = state.offers.get(&offer_code).await?;
    Ok(Json(offer))
}

/// Cancel an offer
#[instrument(skip(state))]
pub async fn cancel_offer(
    State(state): State<AppState>,
    Path(offer_code): Path<String>,
) -> Result<Json<Offer>, ApiError> {
    debug!("Cancelling offer with code [{}]", offer_code);
    let offer = state.offers.cancel(&offer_code).await?;
    info!("Cancelled offer [{}]", offer);
    Ok(Json(offer))
}

/// Create an offer
#[instrument(skip(state, request), fields(offer_code = %request.offer_code))]
pub async fn create_offer(
    State(state): State<AppState>,
    Json(request): Json<NewOffer>,
) -> Result<Json<Offer>, ApiError> {
    debug!("Creating offer [{:?}]", request);
    let offer = state.offers.create(request).await?;
    info!("Created offer [{}]", offer);
    Ok(Json(offer))
}
