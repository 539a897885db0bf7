//! # Offer Error Types
//!
//! Typed error handling for the offer lifecycle.
//! All store and handler operations return `Result<T, OfferError>`.

use thiserror::Error;

/// Core error type for all offer operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OfferError {
    /// No offer is stored under the code
    #[error("Offer not found: {offer_code}")]
    NotFound { offer_code: String },

    /// Offer exists but has been cancelled
    #[error("Offer cancelled: {offer_code}")]
    Cancelled { offer_code: String },

    /// Offer exists and is active, but its expiry has passed
    #[error("Offer expired: {offer_code}")]
    Expired { offer_code: String },

    /// Creation attempted with a code already in use
    #[error("Offer already exists: {offer_code}")]
    AlreadyExists { offer_code: String },

    /// Offer code is empty
    #[error("Invalid offer code: must not be empty")]
    InvalidOfferCode,
}

impl OfferError {
    pub fn not_found(offer_code: impl Into<String>) -> Self {
        OfferError::NotFound {
            offer_code: offer_code.into(),
        }
    }

    pub fn cancelled(offer_code: impl Into<String>) -> Self {
        OfferError::Cancelled {
            offer_code: offer_code.into(),
        }
    }

    pub fn expired(offer_code: impl Into<String>) -> Self {
        OfferError::Expired {
            offer_code: offer_code.into(),
        }
    }

    pub fn already_exists(offer_code: impl Into<String>) -> Self {
        OfferError::AlreadyExists {
            offer_code: offer_code.into(),
        }
    }

    /// Returns true if this error is retryable.
    ///
    /// Every kind reflects a mismatch between the request and the stored
    /// state, so none are.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Returns true for the kinds `get` reports when an offer cannot be used
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            OfferError::NotFound { .. } | OfferError::Cancelled { .. } | OfferError::Expired { .. }
        )
    }
}

/// Result type alias for offer operations
pub type OfferResult<T> = Result<T, OfferError>;
