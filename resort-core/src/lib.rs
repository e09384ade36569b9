pub mod repository;
pub mod memory;
pub mod service;

pub use repository::{ContentRepository, RepositoryError, RepositoryResult};
pub use memory::InMemoryContentRepository;
pub use service::{ContentService, ListingLimits};
