//! # Offer Types
//!
//! The offer entity and its creation payload.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire and display format of an offer's expiry
pub const EXPIRY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A promotional offer.
///
/// Code, description and expiry are fixed at construction. The only
/// mutation is [`Offer::cancel`], which is one-way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    offer_code: String,
    description: String,
    expiry: NaiveDateTime,
    active: bool,
}

impl Offer {
    /// Create a new, active offer
    pub fn new(
        offer_code: impl Into<String>,
        description: impl Into<String>,
        expiry: NaiveDateTime,
    ) -> Self {
        Self {
            offer_code: offer_code.into(),
            description: description.into(),
            expiry,
            active: true,
        }
    }

    pub fn offer_code(&self) -> &str {
        &self.offer_code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn expiry(&self) -> NaiveDateTime {
        self.expiry
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the offer as cancelled. Cancelling twice is a no-op.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Whether `now` is strictly after the expiry
    pub fn is_expired_at(&self, now: NaiveDateTime) -> bool {
        now > self.expiry
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Offer[offerCode={},description={},expiry={},active={}]",
            self.offer_code,
            self.description,
            self.expiry.format(EXPIRY_FORMAT),
            self.active
        )
    }
}

/// Payload for creating an offer.
///
/// Carries no `active` flag: created offers always start active, and an
/// `active` field sent by a client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOffer {
    /// Unique offer code
    #[serde(alias = "offer_code")]
    pub offer_code: String,

    /// Free-text description
    pub description: String,

    /// Instant after which the offer is no longer valid
    pub expiry: NaiveDateTime,
}

impl NewOffer {
    pub fn new(
        offer_code: impl Into<String>,
        description: impl Into<String>,
        expiry: NaiveDateTime,
    ) -> Self {
        Self {
            offer_code: offer_code.into(),
            description: description.into(),
            expiry,
        }
    }

    /// Build the stored record, always active
    pub fn into_offer(self) -> Offer {
        Offer::new(self.offer_code, self.description, self.expiry)
    }
}
