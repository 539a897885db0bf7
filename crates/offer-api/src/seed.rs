//! # Seed Offers
//!
//! Optional TOML file of offers created at startup.
//!
//! ```toml
//! [[offers]]
//! offer_code = "SPRING"
//! description = "Spring sale"
//! expiry = "2030-04-30T18:00:00"
//! ```

use offer_core::{NewOffer, OfferHandler};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Locations searched when no seed file is configured
const DEFAULT_SEED_PATHS: [&str; 2] = ["config/offers.toml", "../config/offers.toml"];

/// Contents of a seed file
#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub offers: Vec<NewOffer>,
}

impl SeedFile {
    /// Parse seed file contents
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read the configured seed file, or the first default location present.
    ///
    /// A configured path that cannot be read is an error; absent defaults
    /// yield an empty seed.
    pub fn load(configured: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = configured {
            return Self::read(path);
        }

        for path in DEFAULT_SEED_PATHS.iter().map(PathBuf::from) {
            if path.exists() {
                return Self::read(&path);
            }
        }

        tracing::warn!("No offers seed file found, starting with an empty store");
        Ok(Self::default())
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let seed = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded {} offers from {}", seed.offers.len(), path.display());
        Ok(seed)
    }

    /// Create every seeded offer through the handler
    pub async fn apply(self, handler: &OfferHandler) -> anyhow::Result<usize> {
        let count = self.offers.len();
        for new_offer in self.offers {
            let code = new_offer.offer_code.clone();
            handler
                .create(new_offer)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to seed offer {}: {}", code, e))?;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offer_core::InMemoryOfferStore;
    use std::sync::Arc;

    const SEED: &str = r#"
[[offers]]
offer_code = "SPRING"
description = "Spring sale"
expiry = "2030-04-30T18:00:00"

[[offers]]
offerCode = "AUTUMN"
description = "Autumn sale"
expiry = "2030-10-31T09:30:00"
"#;

    #[test]
    fn test_parse_seed() {
        let seed = SeedFile::parse(SEED).unwrap();
        assert_eq!(seed.offers.len(), 2);
        assert_eq!(seed.offers[0].offer_code, "SPRING");
        assert_eq!(seed.offers[1].offer_code, "AUTUMN");
    }

    #[test]
    fn test_parse_empty_seed() {
        let seed = SeedFile::parse("").unwrap();
        assert!(seed.offers.is_empty());
    }

    #[test]
    fn test_missing_configured_file_is_an_error() {
        let result = SeedFile::load(Some(Path::new("does/not/exist.toml")));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_apply_creates_offers() {
        let handler = OfferHandler::new(Arc::new(InMemoryOfferStore::new()));
        let count = SeedFile::parse(SEED).unwrap().apply(&handler).await.unwrap();

        assert_eq!(count, 2);
        assert!(handler.get("SPRING").await.unwrap().is_active());
        assert!(handler.get("AUTUMN").await.unwrap().is_active());
    }

    #[tokio::test]
    async fn test_apply_rejects_duplicates() {
        let seed = format!(
            "{SEED}\n[[offers]]\noffer_code = \"SPRING\"\ndescription = \"again\"\nexpiry = \"2031-01-01T00:00:00\"\n"
        );
        let handler = OfferHandler::new(Arc::new(InMemoryOfferStore::new()));

        let result = SeedFile::parse(&seed).unwrap().apply(&handler).await;
        assert!(result.is_err());
    }
}
