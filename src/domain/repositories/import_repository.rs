// src/domain/repositories/import_repository.rs
use crate::domain::category::Category;
use crate::domain::error::DomainResult;
use std::fmt::Debug;

/// One parsed entry of an import file, before ids are assigned.
#[derive(Debug, Clone)]
pub struct LinkImportData {
    /// Id carried by the source file, kept when it does not collide.
    pub id: Option<i64>,
    pub category: Category,
    pub title: String,
    pub url: String,
}

pub trait ImportRepository: Send + Sync + Debug {
    /// Parse a JSON array file of link objects. Entries without a usable
    /// title or url are skipped, not fatal.
    fn import_json_links(&self, path: &str) -> DomainResult<Vec<LinkImportData>>;
}
