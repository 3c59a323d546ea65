// src/domain/link.rs
use crate::domain::category::Category;
use crate::domain::error::{DomainError, DomainResult};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a stored link domain entity.
///
/// The persisted shape is a flat JSON object `{"id", "category", "title",
/// "url"}`; a missing or empty category deserializes into the
/// `uncategorized` sentinel via [`Category`]. The id doubles as the
/// creation timestamp (unix epoch milliseconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub id: i64,
    #[serde(default)]
    pub category: Category,
    pub title: String,
    pub url: String,
}

impl LinkRecord {
    pub fn new<S: AsRef<str>>(id: i64, category: Category, title: S, url: S) -> DomainResult<Self> {
        let title = title.as_ref().trim();
        let url = url.as_ref().trim();

        if title.is_empty() {
            return Err(DomainError::InvalidTitle(
                "Title cannot be empty".to_string(),
            ));
        }
        // URLs are opaque: no scheme or format checks, only presence.
        if url.is_empty() {
            return Err(DomainError::InvalidUrl("URL cannot be empty".to_string()));
        }

        Ok(Self {
            id,
            category,
            title: title.to_string(),
            url: url.to_string(),
        })
    }

    /// Creation time derived from the id.
    pub fn added_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.id).single()
    }
}

impl fmt::Display for LinkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.url, self.category)
    }
}

/// Next id for a new record: the current wall clock in milliseconds, bumped
/// past every existing id so rapid inserts (or a clock that jumped back)
/// still produce unique, strictly increasing ids.
pub fn next_id(existing: &[LinkRecord]) -> i64 {
    next_id_after(Utc::now().timestamp_millis(), existing)
}

pub fn next_id_after(now_millis: i64, existing: &[LinkRecord]) -> i64 {
    let max_existing = existing.iter().map(|record| record.id).max().unwrap_or(0);
    now_millis.max(max_existing + 1)
}
