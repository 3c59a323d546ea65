// src/domain/repositories/repository.rs
use crate::domain::error::DomainError;
use crate::domain::link::LinkRecord;

/// Repository trait for link persistence.
///
/// Methods speak in domain terms and hide the storage layout (one blob per
/// key) behind a clean interface, so the file backend can be swapped for an
/// in-memory one in tests without touching domain or application code.
pub trait LinkRepository: std::fmt::Debug + Send + Sync {
    /// Load the full collection. A store that has never been written to
    /// yields an empty collection, not an error.
    fn load(&self) -> Result<Vec<LinkRecord>, DomainError>;

    /// Persist the full collection, replacing whatever was stored before.
    fn save(&self, records: &[LinkRecord]) -> Result<(), DomainError>;

    /// Load the stored label of the catch-all bucket, if one was ever set.
    fn load_other_label(&self) -> Result<Option<String>, DomainError>;

    /// Persist the label of the catch-all bucket.
    fn save_other_label(&self, label: &str) -> Result<(), DomainError>;
}
