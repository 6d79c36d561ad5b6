//! Repository over the key-value storage: load/save per collection.
//!
//! The repository owns the (de)serialization of the two collections, so
//! the store never touches raw keys or JSON. Both collections are always
//! written in full; there is no partial-write concept.

use tracing::debug;

use super::{KeyValueStorage, CATEGORIES_KEY, LINKS_KEY};
use crate::types::errors::StorageError;
use crate::types::link::{AffiliateLink, Category};

/// Repository persisting the link and category collections as JSON arrays
/// under fixed keys.
pub struct LinkRepository {
    storage: Box<dyn KeyValueStorage>,
}

impl LinkRepository {
    /// Creates a repository over the injected storage backend.
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Loads the link collection. `Ok(None)` means the key has never been
    /// written (fresh install — caller seeds).
    pub fn load_links(&self) -> Result<Option<Vec<AffiliateLink>>, StorageError> {
        match self.storage.get(LINKS_KEY)? {
            Some(raw) => {
                let links = serde_json::from_str(&raw)
                    .map_err(|e| StorageError::SerializationError(e.to_string()))?;
                Ok(Some(links))
            }
            None => Ok(None),
        }
    }

    /// Serializes and writes the full link collection.
    pub fn save_links(&mut self, links: &[AffiliateLink]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(links)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        self.storage.set(LINKS_KEY, &raw)?;
        debug!(count = links.len(), "persisted link collection");
        Ok(())
    }

    /// Loads the category collection. `Ok(None)` means the key is absent.
    pub fn load_categories(&self) -> Result<Option<Vec<Category>>, StorageError> {
        match self.storage.get(CATEGORIES_KEY)? {
            Some(raw) => {
                let categories = serde_json::from_str(&raw)
                    .map_err(|e| StorageError::SerializationError(e.to_string()))?;
                Ok(Some(categories))
            }
            None => Ok(None),
        }
    }

    /// Serializes and writes the full category collection.
    pub fn save_categories(&mut self, categories: &[Category]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(categories)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        self.storage.set(CATEGORIES_KEY, &raw)?;
        debug!(count = categories.len(), "persisted category collection");
        Ok(())
    }
}
