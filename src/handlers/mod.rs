pub mod common;
pub mod tags;

use crate::db::DbPool;
use crate::repositories::tags::TagRepository;
use crate::services::tags::TagService;
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub tags: Arc<TagService>,
}

impl AppServices {
    /// Wire repositories and services from a shared connection pool.
    /// Composition is explicit constructor calls at startup; no injector.
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        let tag_repository = Arc::new(TagRepository::new(db_pool));
        let tags = Arc::new(TagService::new(tag_repository));

        Self { tags }
    }
}
