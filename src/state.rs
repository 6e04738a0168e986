use std::sync::Arc;

use crate::application::services::MappingService;
use crate::domain::repositories::UrlRecordRepository;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService<dyn UrlRecordRepository>>,
}

impl AppState {
    pub fn new(repository: Arc<dyn UrlRecordRepository>, base_url: impl Into<String>) -> Self {
        Self {
            mapping_service: Arc::new(MappingService::new(repository, base_url)),
        }
    }
}
