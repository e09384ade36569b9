use crate::repository::{ContentRepository, RepositoryError, RepositoryResult};
use async_trait::async_trait;
use resort_content::{Event, Hero, Interaction, SpecialOffer};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

#[derive(Debug, Default)]
struct HeroCounters {
    views: AtomicI64,
    clicks: AtomicI64,
}

impl HeroCounters {
    fn seeded(hero: &Hero) -> Self {
        Self {
            views: AtomicI64::new(hero.view_count),
            clicks: AtomicI64::new(hero.click_count),
        }
    }

    fn get(&self, interaction: Interaction) -> &AtomicI64 {
        match interaction {
            Interaction::View => &self.views,
            Interaction::Click => &self.clicks,
        }
    }
}

/// Process-local content snapshot for development and tests.
///
/// Hero counters live beside the records, so listing never waits on an
/// increment.
#[derive(Debug, Default)]
pub struct InMemoryContentRepository {
    heroes: Vec<Hero>,
    offers: Vec<SpecialOffer>,
    events: Vec<Event>,
    counters: HashMap<Uuid, HeroCounters>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(heroes: Vec<Hero>, offers: Vec<SpecialOffer>, events: Vec<Event>) -> Self {
        let counters = heroes
            .iter()
            .map(|hero| (hero.id, HeroCounters::seeded(hero)))
            .collect();

        Self { heroes, offers, events, counters }
    }

    pub async fn hero(&self, id: Uuid) -> Option<Hero> {
        self.heroes.iter().find(|h| h.id == id).map(|h| self.with_counts(h))
    }

    fn with_counts(&self, hero: &Hero) -> Hero {
        let mut hero = hero.clone();
        if let Some(counters) = self.counters.get(&hero.id) {
            hero.view_count = counters.views.load(Ordering::Relaxed);
            hero.click_count = counters.clicks.load(Ordering::Relaxed);
        }
        hero
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn list_heroes(&self) -> RepositoryResult<Vec<Hero>> {
        Ok(self.heroes.iter().map(|h| self.with_counts(h)).collect())
    }

    async fn list_offers(&self) -> RepositoryResult<Vec<SpecialOffer>> {
        Ok(self.offers.clone())
    }

    async fn list_events(&self) -> RepositoryResult<Vec<Event>> {
        Ok(self.events.clone())
    }

    async fn increment_hero_counter(&self, id: Uuid, interaction: Interaction) -> RepositoryResult<()> {
        let counters = self.counters.get(&id).ok_or(RepositoryError::NotFound(id))?;
        counters.get(interaction).fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
