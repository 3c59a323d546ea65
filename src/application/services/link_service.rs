// src/application/services/link_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::grouping::GroupedLinks;
use crate::domain::link::LinkRecord;
use crate::domain::services::confirmation::ConfirmationProvider;
use std::fmt::Debug;

/// What became of a delete request.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The record existed, the user confirmed, it is gone.
    Deleted(LinkRecord),
    /// The record existed but the user declined; nothing changed.
    Declined(LinkRecord),
    /// No record with that id; nothing to prompt about.
    NotFound,
}

/// Service interface for link-related operations
pub trait LinkService: Send + Sync + Debug {
    /// Add a new link. Title and url must be non-empty after trimming; a
    /// missing category falls back to the sentinel.
    fn add_link(
        &self,
        category: Option<&str>,
        title: &str,
        url: &str,
    ) -> ApplicationResult<LinkRecord>;

    /// Delete a link by id, asking `confirmation` first. The lookup happens
    /// before the prompt, so unknown ids never bother the user.
    fn delete_link(
        &self,
        id: i64,
        confirmation: &dyn ConfirmationProvider,
    ) -> ApplicationResult<DeleteOutcome>;

    /// Move every link from category `old` to `new`; returns how many
    /// records were touched. Empty names, `old == new` and zero matches are
    /// no-ops that leave the store untouched.
    fn rename_category(&self, old: &str, new: &str) -> ApplicationResult<usize>;

    /// Set the label of the catch-all bucket and return the label now in
    /// effect. An empty (post-trim) input changes nothing and reports the
    /// stored label, or the default if none was ever stored.
    fn rename_other_label(&self, label: &str) -> ApplicationResult<String>;

    /// Get a link by id
    fn get_link(&self, id: i64) -> ApplicationResult<Option<LinkRecord>>;

    /// Get all links in insertion order
    fn get_all_links(&self) -> ApplicationResult<Vec<LinkRecord>>;

    /// The grouped view: major categories by descending size, leftovers in
    /// the catch-all bucket.
    fn grouped_links(&self) -> ApplicationResult<GroupedLinks>;

    /// Label of the catch-all bucket (stored value or default).
    fn other_label(&self) -> ApplicationResult<String>;

    /// Import links from a JSON array file; returns how many records were
    /// added. With `dry_run` nothing is persisted.
    fn import_links(&self, path: &str, dry_run: bool) -> ApplicationResult<usize>;
}
