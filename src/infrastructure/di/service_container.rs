// src/infrastructure/di/service_container.rs
use crate::application::error::ApplicationResult;
use crate::application::services::link_service::LinkService;
use crate::application::templates::page::PageRenderer;
use crate::application::LinkServiceImpl;
use crate::config::Settings;
use crate::infrastructure::repositories::file_repository::FileLinkRepository;
use crate::infrastructure::repositories::json_import_repository::JsonImportRepository;
use std::sync::Arc;

/// Production service container - single source of truth for service creation
pub struct ServiceContainer {
    pub link_repository: Arc<FileLinkRepository>,
    pub link_service: Arc<dyn LinkService>,
    pub page_renderer: Arc<PageRenderer>,
}

impl ServiceContainer {
    /// Create all services with explicit dependency injection
    pub fn new(config: &Settings) -> ApplicationResult<Self> {
        // A store that does not exist yet simply reads as empty, so unlike
        // a database there is nothing to check up front.
        let link_repository = Arc::new(FileLinkRepository::from_path(&config.store_path));
        let page_renderer = Arc::new(PageRenderer::new()?);

        let link_service = Arc::new(LinkServiceImpl::new(
            link_repository.clone(),
            Arc::new(JsonImportRepository::new()),
        ));

        Ok(Self {
            link_repository,
            link_service,
            page_renderer,
        })
    }
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContainer")
            .field("link_repository", &"Arc<FileLinkRepository>")
            .field("link_service", &"Arc<dyn LinkService>")
            .field("page_renderer", &"Arc<PageRenderer>")
            .finish()
    }
}
