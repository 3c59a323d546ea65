// src/infrastructure/repositories/memory_repository.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::link::LinkRecord;
use crate::domain::repositories::repository::LinkRepository;
use std::sync::Mutex;

/// In-memory [`LinkRepository`] used by tests and embedders that do not
/// want the file backend.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    records: Mutex<Vec<LinkRecord>>,
    other_label: Mutex<Option<String>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<LinkRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            other_label: Mutex::new(None),
        }
    }
}

impl LinkRepository for InMemoryLinkRepository {
    fn load(&self) -> DomainResult<Vec<LinkRecord>> {
        let records = self
            .records
            .lock()
            .map_err(|e| DomainError::RepositoryError(format!("Lock poisoned: {}", e)))?;
        Ok(records.clone())
    }

    fn save(&self, records: &[LinkRecord]) -> DomainResult<()> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| DomainError::RepositoryError(format!("Lock poisoned: {}", e)))?;
        *guard = records.to_vec();
        Ok(())
    }

    fn load_other_label(&self) -> DomainResult<Option<String>> {
        let label = self
            .other_label
            .lock()
            .map_err(|e| DomainError::RepositoryError(format!("Lock poisoned: {}", e)))?;
        Ok(label.clone())
    }

    fn save_other_label(&self, label: &str) -> DomainResult<()> {
        let mut guard = self
            .other_label
            .lock()
            .map_err(|e| DomainError::RepositoryError(format!("Lock poisoned: {}", e)))?;
        *guard = Some(label.to_string());
        Ok(())
    }
}
