// src/infrastructure/repositories/json_import_repository.rs
use crate::domain::category::Category;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::import_repository::{ImportRepository, LinkImportData};
use crossterm::style::Stylize;
use serde::Deserialize;
use std::fs;

#[derive(Deserialize)]
struct JsonLink {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug)]
pub struct JsonImportRepository;

impl Default for JsonImportRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonImportRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ImportRepository for JsonImportRepository {
    fn import_json_links(&self, path: &str) -> DomainResult<Vec<LinkImportData>> {
        let content = fs::read_to_string(path)
            .map_err(|e| DomainError::RepositoryError(format!("Failed to read {}: {}", path, e)))?;

        // Parse as a JSON array
        let entries: Vec<JsonLink> = serde_json::from_str(&content).map_err(|e| {
            DomainError::DeserializationError(format!(
                "Failed to parse {}: {}. Expected a JSON array of link objects.",
                path, e
            ))
        })?;

        let mut imports = Vec::new();
        for (i, entry) in entries.into_iter().enumerate() {
            if entry.title.trim().is_empty() || entry.url.trim().is_empty() {
                // Log warning but continue
                eprintln!(
                    "{} Entry {} skipped: missing title or url",
                    "Warning".yellow(),
                    i + 1
                );
                continue;
            }

            imports.push(LinkImportData {
                id: entry.id,
                category: Category::new(&entry.category),
                title: entry.title.trim().to_string(),
                url: entry.url.trim().to_string(),
            });
        }

        Ok(imports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fixture(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn given_valid_json_array_when_import_then_returns_all_entries() {
        let file = write_fixture(
            r#"[
                {"id": 1, "category": "dev", "title": "Rust", "url": "https://rust-lang.org"},
                {"category": "news", "title": "HN", "url": "https://news.ycombinator.com"}
            ]"#,
        );
        let repository = JsonImportRepository::new();

        let imports = repository
            .import_json_links(file.path().to_str().unwrap())
            .unwrap();

        assert_eq!(imports.len(), 2);
        assert_eq!(imports[0].id, Some(1));
        assert_eq!(imports[0].category.as_str(), "dev");
        assert_eq!(imports[1].id, None);
        assert_eq!(imports[1].title, "HN");
    }

    #[test]
    fn given_entries_without_title_or_url_when_import_then_skipped() {
        let file = write_fixture(
            r#"[
                {"title": "", "url": "https://a.example"},
                {"title": "no url"},
                {"title": "ok", "url": "https://ok.example"}
            ]"#,
        );
        let repository = JsonImportRepository::new();

        let imports = repository
            .import_json_links(file.path().to_str().unwrap())
            .unwrap();

        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].title, "ok");
    }

    #[test]
    fn given_missing_category_when_import_then_sentinel_applied() {
        let file = write_fixture(r#"[{"title": "a", "url": "https://a.example"}]"#);
        let repository = JsonImportRepository::new();

        let imports = repository
            .import_json_links(file.path().to_str().unwrap())
            .unwrap();

        assert!(imports[0].category.is_uncategorized());
    }

    #[test]
    fn given_non_array_document_when_import_then_error() {
        let file = write_fixture(r#"{"title": "a", "url": "https://a.example"}"#);
        let repository = JsonImportRepository::new();

        let result = repository.import_json_links(file.path().to_str().unwrap());
        assert!(matches!(result, Err(DomainError::DeserializationError(_))));
    }

    #[test]
    fn given_missing_file_when_import_then_error() {
        let repository = JsonImportRepository::new();
        let result = repository.import_json_links("/nonexistent/links.json");
        assert!(matches!(result, Err(DomainError::RepositoryError(_))));
    }
}
