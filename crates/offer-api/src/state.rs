//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the offer handler and configuration.

use crate::config::AppConfig;
use crate::seed::SeedFile;
use offer_core::{InMemoryOfferStore, OfferHandler, SharedOfferStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Offer lifecycle handler, owning the store
    pub offers: OfferHandler,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Build state over an empty in-memory store and apply the seed file
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        let state = Self::with_store(Arc::new(InMemoryOfferStore::new()), config);

        let seeded = SeedFile::load(state.config.seed_file.as_deref())?
            .apply(&state.offers)
            .await?;
        tracing::info!("Seeded {} offers", seeded);

        Ok(state)
    }

    /// Build state over an existing store
    pub fn with_store(store: SharedOfferStore, config: AppConfig) -> Self {
        Self {
            offers: OfferHandler::new(store),
            config,
        }
    }

    /// Build state over an existing handler
    pub fn with_handler(offers: OfferHandler, config: AppConfig) -> Self {
        Self { offers, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use offer_core::{Offer, OfferStore};
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_new_with_missing_seed_file_fails() {
        let config = AppConfig {
            seed_file: Some(PathBuf::from("does/not/exist.toml")),
            ..AppConfig::default()
        };

        assert!(AppState::new(config).await.is_err());
    }

    #[tokio::test]
    async fn test_with_store_shares_records() {
        let store = InMemoryOfferStore::new();
        let state = AppState::with_store(Arc::new(store.clone()), AppConfig::default());
        assert!(state.offers.store().is_empty().await);

        let expiry = NaiveDate::from_ymd_opt(2019, 4, 30)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        store
            .insert_new(Offer::new("code", "description", expiry))
            .await
            .unwrap();
        assert_eq!(state.offers.store().len().await, 1);
    }
}
