use resort_core::ContentService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentService>,
}

impl AppState {
    pub fn new(content: ContentService) -> Self {
        Self { content: Arc::new(content) }
    }
}
