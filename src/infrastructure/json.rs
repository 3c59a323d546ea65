// src/infrastructure/json.rs

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::link::LinkRecord;
use serde::Serialize;
use std::io::Write;

/// Structure for serializing links to JSON output
#[derive(Serialize)]
pub struct JsonLinkView {
    pub id: i64,
    pub category: String,
    pub title: String,
    pub url: String,
    pub added_at: Option<String>,
}

impl JsonLinkView {
    /// Create from a domain `LinkRecord`
    pub fn from_domain(record: &LinkRecord) -> Self {
        Self {
            id: record.id,
            category: record.category.to_string(),
            title: record.title.to_string(),
            url: record.url.to_string(),
            added_at: record.added_at().map(|dt| dt.to_rfc3339()),
        }
    }

    /// Convert a slice of records into a vector of JSON views
    pub fn from_domain_collection(records: &[LinkRecord]) -> Vec<Self> {
        records.iter().map(Self::from_domain).collect()
    }
}

/// Converts links to JSON and writes to standard output.
/// Standard output is used for pipeable content without colors or formatting
pub fn write_links_as_json(views: &[JsonLinkView]) -> DomainResult<()> {
    let json = serde_json::to_string_pretty(&views).map_err(|e| {
        DomainError::SerializationError(format!("Failed to serialize links to JSON: {}", e))
    })?;

    println!("{}", json);

    // Flush stdout to ensure immediate output
    std::io::stdout()
        .flush()
        .map_err(|e| DomainError::Other(format!("Failed to flush stdout: {}", e)))?;

    Ok(())
}
