//! # Offer Store
//!
//! Storage abstraction for offers and its in-memory implementation.
//!
//! Each method is one atomic step against a single record, so callers never
//! need to hold a lock across a lookup and the write that depends on it.

use crate::error::{OfferError, OfferResult};
use crate::offer::Offer;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Owner of all offer records, keyed by offer code.
#[async_trait]
pub trait OfferStore: Send + Sync {
    /// Snapshot of the offer stored under `offer_code`
    async fn find(&self, offer_code: &str) -> Option<Offer>;

    /// Insert `offer` unless its code is already taken.
    ///
    /// On conflict the stored record is left untouched and
    /// `OfferError::AlreadyExists` is returned.
    async fn insert_new(&self, offer: Offer) -> OfferResult<Offer>;

    /// Mark the offer as cancelled in place and return the updated record,
    /// or `None` when no offer has that code.
    async fn deactivate(&self, offer_code: &str) -> Option<Offer>;

    /// Number of stored offers
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Type alias for a shared store (dynamic dispatch)
pub type SharedOfferStore = Arc<dyn OfferStore>;

/// A thread-safe in-memory offer store.
///
/// Uses `Arc<RwLock<HashMap<String, Offer>>>` so clones share the same
/// records. Contents live for the lifetime of the process.
#[derive(Debug, Default, Clone)]
pub struct InMemoryOfferStore {
    offers: Arc<RwLock<HashMap<String, Offer>>>,
}

impl InMemoryOfferStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `offers`, keyed by their codes.
    ///
    /// Records are taken as given, including cancelled or expired ones.
    /// A later offer with a repeated code replaces the earlier one.
    pub fn with_offers(offers: impl IntoIterator<Item = Offer>) -> Self {
        let offers = offers
            .into_iter()
            .map(|offer| (offer.offer_code().to_string(), offer))
            .collect();
        Self {
            offers: Arc::new(RwLock::new(offers)),
        }
    }
}

#[async_trait]
impl OfferStore for InMemoryOfferStore {
    async fn find(&self, offer_code: &str) -> Option<Offer> {
        let offers = self.offers.read().await;
        offers.get(offer_code).cloned()
    }

    async fn insert_new(&self, offer: Offer) -> OfferResult<Offer> {
        let mut offers = self.offers.write().await;
        if offers.contains_key(offer.offer_code()) {
            return Err(OfferError::already_exists(offer.offer_code()));
        }
        offers.insert(offer.offer_code().to_string(), offer.clone());
        Ok(offer)
    }

    async fn deactivate(&self, offer_code: &str) -> Option<Offer> {
        let mut offers = self.offers.write().await;
        let offer = offers.get_mut(offer_code)?;
        offer.cancel();
        Some(offer.clone())
    }

    async fn len(&self) -> usize {
        self.offers.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    fn offer(code: &str, description: &str) -> Offer {
        Offer::new(code, description, Local::now().naive_local() + Duration::days(14))
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryOfferStore::new();
        let created = store.insert_new(offer("code", "description")).await.unwrap();

        assert_eq!(store.find("code").await, Some(created));
        assert!(store.find("other").await.is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_insert_does_not_overwrite() {
        let store = InMemoryOfferStore::new();
        let original = store.insert_new(offer("code", "first")).await.unwrap();

        let err = store.insert_new(offer("code", "second")).await.unwrap_err();
        assert_eq!(err, OfferError::already_exists("code"));
        assert_eq!(store.find("code").await, Some(original));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_deactivate_mutates_in_place() {
        let store = InMemoryOfferStore::with_offers([offer("code", "description")]);

        let cancelled = store.deactivate("code").await.unwrap();
        assert!(!cancelled.is_active());
        assert!(!store.find("code").await.unwrap().is_active());

        assert!(store.deactivate("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let store = InMemoryOfferStore::new();
        let clone = store.clone();
        store.insert_new(offer("code", "description")).await.unwrap();

        assert!(clone.find("code").await.is_some());
        assert!(!clone.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_creates_keep_one_record() {
        let store = InMemoryOfferStore::new();

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.insert_new(offer("code", &format!("attempt {i}"))).await
                })
            })
            .collect();

        let mut created = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.len().await, 1);
    }
}
