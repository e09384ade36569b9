use async_trait::async_trait;
use resort_content::{Event, Hero, Interaction, SpecialOffer};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Record not found: {0}")]
    NotFound(Uuid),

    #[error("Failed to decode record: {0}")]
    Decode(String),

    #[error("Storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read access to schedulable content plus the hero counters.
///
/// List methods return every candidate row of a kind; visibility is
/// decided by the caller, not the store.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn list_heroes(&self) -> RepositoryResult<Vec<Hero>>;

    async fn list_offers(&self) -> RepositoryResult<Vec<SpecialOffer>>;

    async fn list_events(&self) -> RepositoryResult<Vec<Event>>;

    /// Atomically add one to the counter for `interaction`.
    async fn increment_hero_counter(&self, id: Uuid, interaction: Interaction) -> RepositoryResult<()>;
}
