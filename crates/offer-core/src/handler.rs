//! # Offer Handler
//!
//! Enforces the offer lifecycle rules on top of an [`OfferStore`].
//!
//! ```text
//!   create ──► Active ──cancel──► Cancelled
//!                │
//!                └── now > expiry ──► Expired (computed on read)
//! ```

use crate::clock::{SharedClock, SystemClock};
use crate::error::{OfferError, OfferResult};
use crate::offer::{NewOffer, Offer};
use crate::store::SharedOfferStore;
use std::sync::Arc;
use tracing::error;

/// Single entry point for reading, cancelling and creating offers.
#[derive(Clone)]
pub struct OfferHandler {
    store: SharedOfferStore,
    clock: SharedClock,
}

impl OfferHandler {
    /// Create a handler over `store` using local system time
    pub fn new(store: SharedOfferStore) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
        }
    }

    /// Builder: replace the clock used for expiry checks
    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    /// The underlying store
    pub fn store(&self) -> &SharedOfferStore {
        &self.store
    }

    /// Fetch a usable offer.
    ///
    /// Checks run in a fixed order: existence, then active, then expiry.
    /// An offer that is both cancelled and expired reports `Cancelled`.
    pub async fn get(&self, offer_code: &str) -> OfferResult<Offer> {
        let Some(offer) = self.store.find(offer_code).await else {
            error!("No offer found for code [{}]", offer_code);
            return Err(OfferError::not_found(offer_code));
        };

        if !offer.is_active() {
            error!("Offer [{}] is no longer active", offer);
            return Err(OfferError::cancelled(offer_code));
        }

        if offer.is_expired_at(self.clock.now()) {
            error!("Offer [{}] has expired", offer);
            return Err(OfferError::expired(offer_code));
        }

        Ok(offer)
    }

    /// Cancel an offer, whether or not it has expired.
    ///
    /// Cancelling an already-cancelled offer succeeds and returns it.
    pub async fn cancel(&self, offer_code: &str) -> OfferResult<Offer> {
        self.store.deactivate(offer_code).await.ok_or_else(|| {
            error!("No offer found for code [{}]", offer_code);
            OfferError::not_found(offer_code)
        })
    }

    /// Store a new, active offer.
    ///
    /// Description and expiry are not validated; an offer created with a
    /// past expiry is accepted and reports `Expired` on its first read.
    pub async fn create(&self, new_offer: NewOffer) -> OfferResult<Offer> {
        if new_offer.offer_code.is_empty() {
            error!("Refusing to create an offer with an empty code");
            return Err(OfferError::InvalidOfferCode);
        }

        let offer_code = new_offer.offer_code.clone();
        self.store
            .insert_new(new_offer.into_offer())
            .await
            .map_err(|err| {
                error!(
                    "Offer already exists with code [{}], cannot create a new one",
                    offer_code
                );
                err
            })
    }
}
