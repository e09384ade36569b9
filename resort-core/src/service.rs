use crate::repository::{ContentRepository, RepositoryResult};
use chrono::{DateTime, Utc};
use resort_content::{visible, Event, Hero, Interaction, Schedulable, SpecialOffer};
use serde::Deserialize;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

/// Maximum number of items returned per listing
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ListingLimits {
    #[serde(default = "default_hero_limit")]
    pub heroes: usize,
    #[serde(default = "default_offer_limit")]
    pub offers: usize,
    #[serde(default = "default_event_limit")]
    pub events: usize,
}

fn default_hero_limit() -> usize { 5 }
fn default_offer_limit() -> usize { 12 }
fn default_event_limit() -> usize { 12 }

impl Default for ListingLimits {
    fn default() -> Self {
        Self {
            heroes: default_hero_limit(),
            offers: default_offer_limit(),
            events: default_event_limit(),
        }
    }
}

/// Fetches candidate content and runs it through the visibility engine.
///
/// Listing never fails: a storage error is logged and yields an empty list,
/// since these feed public pages.
#[derive(Clone)]
pub struct ContentService {
    repo: Arc<dyn ContentRepository>,
    limits: ListingLimits,
}

impl ContentService {
    pub fn new(repo: Arc<dyn ContentRepository>, limits: ListingLimits) -> Self {
        Self { repo, limits }
    }

    pub async fn heroes(&self, now: DateTime<Utc>, page: Option<&str>) -> Vec<Hero> {
        let candidates = self.repo.list_heroes().await;
        select("heroes", candidates, now, page, self.limits.heroes)
    }

    pub async fn offers(&self, now: DateTime<Utc>) -> Vec<SpecialOffer> {
        let candidates = self.repo.list_offers().await;
        select("offers", candidates, now, None, self.limits.offers)
    }

    pub async fn events(&self, now: DateTime<Utc>) -> Vec<Event> {
        let candidates = self.repo.list_events().await;
        select("events", candidates, now, None, self.limits.events)
    }

    /// Bump a hero counter in the background.
    ///
    /// Failures are logged and dropped. The handle may be ignored.
    pub fn record_interaction(&self, id: Uuid, interaction: Interaction) -> JoinHandle<()> {
        let repo = self.repo.clone();
        tokio::spawn(async move {
            match repo.increment_hero_counter(id, interaction).await {
                Ok(()) => debug!(hero_id = %id, ?interaction, "hero counter incremented"),
                Err(e) => warn!(hero_id = %id, ?interaction, error = %e, "failed to increment hero counter"),
            }
        })
    }
}

fn select<T: Schedulable>(
    kind: &str,
    candidates: RepositoryResult<Vec<T>>,
    now: DateTime<Utc>,
    page: Option<&str>,
    limit: usize,
) -> Vec<T> {
    let items = match candidates {
        Ok(items) => items,
        Err(e) => {
            warn!(kind, error = %e, "failed to load content, serving empty list");
            return Vec::new();
        }
    };

    let total = items.len();
    let mut shown = visible(items, now, page);
    shown.truncate(limit);
    debug!(kind, total, shown = shown.len(), ?page, "content selected");
    shown
}
