// src/application/services/link_service_impl.rs
use std::collections::HashSet;
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::link_service::{DeleteOutcome, LinkService};
use crate::domain::category::Category;
use crate::domain::grouping::{GroupedLinks, DEFAULT_OTHER_LABEL};
use crate::domain::link::{next_id, LinkRecord};
use crate::domain::repositories::import_repository::ImportRepository;
use crate::domain::repositories::repository::LinkRepository;
use crate::domain::services::confirmation::ConfirmationProvider;
use tracing::{debug, instrument};

#[derive(Debug)]
pub struct LinkServiceImpl<R: LinkRepository> {
    repository: Arc<R>,
    import_repository: Arc<dyn ImportRepository>,
}

impl<R: LinkRepository> LinkServiceImpl<R> {
    pub fn new(repository: Arc<R>, import_repository: Arc<dyn ImportRepository>) -> Self {
        Self {
            repository,
            import_repository,
        }
    }
}

impl<R: LinkRepository> LinkService for LinkServiceImpl<R> {
    #[instrument(skip(self), level = "debug", fields(title = %title, url = %url))]
    fn add_link(
        &self,
        category: Option<&str>,
        title: &str,
        url: &str,
    ) -> ApplicationResult<LinkRecord> {
        // Reject before touching the store.
        if title.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "Title cannot be empty".to_string(),
            ));
        }
        if url.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "URL cannot be empty".to_string(),
            ));
        }

        let mut records = self.repository.load()?;
        let record = LinkRecord::new(next_id(&records), Category::parse(category), title, url)?;
        records.push(record.clone());
        self.repository.save(&records)?;

        debug!("Added link {} ({})", record.id, record.title);
        Ok(record)
    }

    #[instrument(skip(self, confirmation), level = "debug")]
    fn delete_link(
        &self,
        id: i64,
        confirmation: &dyn ConfirmationProvider,
    ) -> ApplicationResult<DeleteOutcome> {
        let records = self.repository.load()?;

        // Look up first so unknown ids never reach the prompt.
        let record = match records.iter().find(|record| record.id == id) {
            Some(record) => record.clone(),
            None => {
                debug!("Link {} not found, nothing to delete", id);
                return Ok(DeleteOutcome::NotFound);
            }
        };

        if !confirmation.confirm_delete(&record) {
            debug!("Deletion of link {} declined", id);
            return Ok(DeleteOutcome::Declined(record));
        }

        let remaining: Vec<LinkRecord> = records
            .into_iter()
            .filter(|record| record.id != id)
            .collect();
        self.repository.save(&remaining)?;

        debug!("Deleted link {}", id);
        Ok(DeleteOutcome::Deleted(record))
    }

    #[instrument(skip(self), level = "debug")]
    fn rename_category(&self, old: &str, new: &str) -> ApplicationResult<usize> {
        let old = old.trim();
        let new = new.trim();
        if old.is_empty() || new.is_empty() || old == new {
            debug!("Rename from '{}' to '{}' is a no-op", old, new);
            return Ok(0);
        }

        let old_category = Category::new(old);
        let new_category = Category::new(new);

        let mut records = self.repository.load()?;
        let mut renamed = 0;
        for record in records.iter_mut() {
            if record.category == old_category {
                record.category = new_category.clone();
                renamed += 1;
            }
        }

        // Nothing matched: skip the save, the store stays byte-identical.
        if renamed == 0 {
            debug!("No links in category '{}'", old_category);
            return Ok(0);
        }

        self.repository.save(&records)?;
        debug!(
            "Renamed {} links from '{}' to '{}'",
            renamed, old_category, new_category
        );
        Ok(renamed)
    }

    #[instrument(skip(self), level = "debug")]
    fn rename_other_label(&self, label: &str) -> ApplicationResult<String> {
        let label = label.trim();
        if label.is_empty() {
            let current = self
                .repository
                .load_other_label()?
                .unwrap_or_else(|| DEFAULT_OTHER_LABEL.to_string());
            debug!("Empty label, keeping '{}'", current);
            return Ok(current);
        }

        self.repository.save_other_label(label)?;
        Ok(label.to_string())
    }

    #[instrument(skip(self), level = "debug")]
    fn get_link(&self, id: i64) -> ApplicationResult<Option<LinkRecord>> {
        let records = self.repository.load()?;
        Ok(records.into_iter().find(|record| record.id == id))
    }

    #[instrument(skip(self), level = "debug")]
    fn get_all_links(&self) -> ApplicationResult<Vec<LinkRecord>> {
        Ok(self.repository.load()?)
    }

    #[instrument(skip(self), level = "debug")]
    fn grouped_links(&self) -> ApplicationResult<GroupedLinks> {
        let records = self.repository.load()?;
        Ok(GroupedLinks::from_records(&records))
    }

    #[instrument(skip(self), level = "debug")]
    fn other_label(&self) -> ApplicationResult<String> {
        Ok(self
            .repository
            .load_other_label()?
            .unwrap_or_else(|| DEFAULT_OTHER_LABEL.to_string()))
    }

    #[instrument(skip(self), level = "debug")]
    fn import_links(&self, path: &str, dry_run: bool) -> ApplicationResult<usize> {
        let imports = self
            .import_repository
            .import_json_links(path)
            .map_err(|e| ApplicationError::Other(format!("Failed to import data: {}", e)))?;

        if dry_run {
            return Ok(imports.len());
        }

        let mut records = self.repository.load()?;
        let mut seen: HashSet<i64> = records.iter().map(|record| record.id).collect();
        let mut added = 0;

        for import in imports {
            // Keep the source id unless it collides.
            let id = match import.id {
                Some(id) if !seen.contains(&id) => id,
                _ => next_id(&records),
            };
            let record = LinkRecord::new(id, import.category, &import.title, &import.url)?;
            seen.insert(record.id);
            records.push(record);
            added += 1;
        }

        if added > 0 {
            self.repository.save(&records)?;
        }
        Ok(added)
    }
}
