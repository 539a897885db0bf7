//! # HTTP Error Mapping
//!
//! Maps offer errors to HTTP statuses. Error responses carry no body; the
//! three ways an offer can be unavailable to `get` all surface as 404.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use offer_core::OfferError;
use thiserror::Error;

/// Error returned by the offer endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Offer(#[from] OfferError),
}

impl ApiError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Offer(err) if err.is_unavailable() => StatusCode::NOT_FOUND,
            ApiError::Offer(OfferError::AlreadyExists { .. }) => StatusCode::CONFLICT,
            ApiError::Offer(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.status_code().into_response()
    }
}
