//! # offer-core
//!
//! Core types for the offers service.
//!
//! This crate provides:
//! - `Offer` and `NewOffer`, the offer entity and its creation payload
//! - `OfferStore` trait with the `InMemoryOfferStore` implementation
//! - `OfferHandler`, which enforces the cancellation and expiry rules
//! - `OfferError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use offer_core::{InMemoryOfferStore, NewOffer, OfferHandler};
//! use std::sync::Arc;
//!
//! let handler = OfferHandler::new(Arc::new(InMemoryOfferStore::new()));
//!
//! handler.create(NewOffer::new("SUMMER", "10% off", expiry)).await?;
//! let offer = handler.get("SUMMER").await?;
//! handler.cancel("SUMMER").await?;
//! ```

pub mod clock;
pub mod error;
pub mod handler;
pub mod offer;
pub mod store;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SharedClock, SystemClock};
pub use error::{OfferError, OfferResult};
pub use handler::OfferHandler;
pub use offer::{NewOffer, Offer, EXPIRY_FORMAT};
pub use store::{InMemoryOfferStore, OfferStore, SharedOfferStore};
