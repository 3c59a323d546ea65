// src/infrastructure/repositories/file_repository.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::link::LinkRecord;
use crate::domain::repositories::repository::LinkRepository;
use crate::infrastructure::storage::file_store::{FileKeyValueStore, KeyValueStore};
use std::path::Path;
use tracing::{debug, instrument};

/// Store key holding the whole collection as one JSON array.
pub const ITEMS_KEY: &str = "items";
/// Store key holding the label of the catch-all bucket.
pub const OTHER_LABEL_KEY: &str = "otherLinksTitle";

/// File-backed [`LinkRepository`]: the collection lives as a single JSON
/// blob under [`ITEMS_KEY`], rewritten whole on every save.
#[derive(Debug)]
pub struct FileLinkRepository {
    store: FileKeyValueStore,
}

impl FileLinkRepository {
    pub fn new(store: FileKeyValueStore) -> Self {
        Self { store }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::new(FileKeyValueStore::new(path.as_ref()))
    }
}

impl LinkRepository for FileLinkRepository {
    #[instrument(skip(self), level = "debug")]
    fn load(&self) -> DomainResult<Vec<LinkRecord>> {
        match self.store.get(ITEMS_KEY)? {
            None => Ok(Vec::new()),
            Some(blob) => {
                let records: Vec<LinkRecord> = serde_json::from_str(&blob).map_err(|e| {
                    DomainError::DeserializationError(format!(
                        "Invalid link collection under '{}': {}",
                        ITEMS_KEY, e
                    ))
                })?;
                debug!("Loaded {} links", records.len());
                Ok(records)
            }
        }
    }

    #[instrument(skip(self, records), level = "debug")]
    fn save(&self, records: &[LinkRecord]) -> DomainResult<()> {
        let blob = serde_json::to_string(records)
            .map_err(|e| DomainError::SerializationError(e.to_string()))?;
        self.store.set(ITEMS_KEY, &blob)?;
        debug!("Saved {} links", records.len());
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    fn load_other_label(&self) -> DomainResult<Option<String>> {
        Ok(self.store.get(OTHER_LABEL_KEY)?)
    }

    #[instrument(skip(self), level = "debug")]
    fn save_other_label(&self, label: &str) -> DomainResult<()> {
        Ok(self.store.set(OTHER_LABEL_KEY, label)?)
    }
}
