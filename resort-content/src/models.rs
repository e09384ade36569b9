use crate::schedule::{ContentKind, PageScope, Schedulable, Window};
use crate::ContentError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Special offer lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferStatus {
    Draft,
    Active,
    Paused,
    Expired,
}

impl fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OfferStatus::Draft => "DRAFT",
            OfferStatus::Active => "ACTIVE",
            OfferStatus::Paused => "PAUSED",
            OfferStatus::Expired => "EXPIRED",
        };
        f.write_str(s)
    }
}

impl FromStr for OfferStatus {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(OfferStatus::Draft),
            "ACTIVE" => Ok(OfferStatus::Active),
            "PAUSED" => Ok(OfferStatus::Paused),
            "EXPIRED" => Ok(OfferStatus::Expired),
            other => Err(ContentError::UnknownStatus {
                kind: "offer",
                value: other.to_string(),
            }),
        }
    }
}

/// Event lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Draft,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn is_live(self) -> bool {
        matches!(self, EventStatus::Confirmed | EventStatus::InProgress)
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventStatus::Draft => "DRAFT",
            EventStatus::Confirmed => "CONFIRMED",
            EventStatus::InProgress => "IN_PROGRESS",
            EventStatus::Completed => "COMPLETED",
            EventStatus::Cancelled => "CANCELLED",
        };
        f.write_str(s)
    }
}

impl FromStr for EventStatus {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(EventStatus::Draft),
            "CONFIRMED" => Ok(EventStatus::Confirmed),
            "IN_PROGRESS" => Ok(EventStatus::InProgress),
            "COMPLETED" => Ok(EventStatus::Completed),
            "CANCELLED" => Ok(EventStatus::Cancelled),
            other => Err(ContentError::UnknownStatus {
                kind: "event",
                value: other.to_string(),
            }),
        }
    }
}

/// Hero counters bumped by the public site
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Interaction {
    View,
    Click,
}

impl Interaction {
    /// Column holding the counter for this interaction.
    pub fn counter_column(self) -> &'static str {
        match self {
            Interaction::View => "view_count",
            Interaction::Click => "click_count",
        }
    }
}

impl FromStr for Interaction {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "views" => Ok(Interaction::View),
            "clicks" => Ok(Interaction::Click),
            other => Err(ContentError::UnknownInteraction(other.to_string())),
        }
    }
}

/// A hero slide shown at the top of a page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hero {
    pub id: Uuid,
    pub property_id: Option<Uuid>,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_label: Option<String>,
    pub cta_href: Option<String>,
    pub target_pages: PageScope,
    pub is_active: bool,
    pub is_featured: bool,
    pub sort_order: i32,
    pub show_from: Option<DateTime<Utc>>,
    pub show_until: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hero {
    /// Create an active hero shown on every page, with no display window
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            property_id: None,
            title: title.into(),
            subtitle: None,
            image_url: None,
            cta_label: None,
            cta_href: None,
            target_pages: PageScope::All,
            is_active: true,
            is_featured: false,
            sort_order: 0,
            show_from: None,
            show_until: None,
            view_count: 0,
            click_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Schedulable for Hero {
    const KIND: ContentKind = ContentKind::Hero;

    fn is_live(&self) -> bool {
        self.is_active
    }

    fn is_featured(&self) -> bool {
        self.is_featured
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn window(&self) -> Window {
        Window::new(self.show_from, self.show_until)
    }

    fn page_scope(&self) -> Option<&PageScope> {
        Some(&self.target_pages)
    }

    // Newest first
    fn tie_break(&self, other: &Self) -> Ordering {
        other.created_at.cmp(&self.created_at)
    }
}

/// A promotional offer attached to a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecialOffer {
    pub id: Uuid,
    pub property_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub discount_percentage: Option<f64>,
    pub promo_code: Option<String>,
    pub status: OfferStatus,
    pub is_published: bool,
    pub is_pinned: bool,
    pub is_featured: bool,
    pub sort_order: i32,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_to: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SpecialOffer {
    /// Create a published, active offer with no validity window
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            property_id: None,
            title: title.into(),
            description: None,
            image_url: None,
            discount_percentage: None,
            promo_code: None,
            status: OfferStatus::Active,
            is_published: true,
            is_pinned: false,
            is_featured: false,
            sort_order: 0,
            valid_from: None,
            valid_to: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Schedulable for SpecialOffer {
    const KIND: ContentKind = ContentKind::SpecialOffer;

    fn is_live(&self) -> bool {
        self.is_published && self.status == OfferStatus::Active
    }

    fn is_pinned(&self) -> bool {
        self.is_pinned
    }

    fn is_featured(&self) -> bool {
        self.is_featured
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn window(&self) -> Window {
        Window::new(self.valid_from, self.valid_to)
    }

    fn tie_break(&self, other: &Self) -> Ordering {
        other.created_at.cmp(&self.created_at)
    }
}

/// A scheduled happening at a property (concert, tasting, class)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: Uuid,
    pub property_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub venue: Option<String>,
    pub image_url: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: EventStatus,
    pub is_published: bool,
    pub is_pinned: bool,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Create a published, confirmed event starting at `start_date`
    pub fn new(title: impl Into<String>, start_date: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            property_id: None,
            title: title.into(),
            description: None,
            venue: None,
            image_url: None,
            start_date,
            end_date: None,
            status: EventStatus::Confirmed,
            is_published: true,
            is_pinned: false,
            is_featured: false,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Schedulable for Event {
    const KIND: ContentKind = ContentKind::Event;

    fn is_live(&self) -> bool {
        self.is_published && self.status.is_live()
    }

    fn is_pinned(&self) -> bool {
        self.is_pinned
    }

    fn is_featured(&self) -> bool {
        self.is_featured
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn window(&self) -> Window {
        Window::new(Some(self.start_date), self.end_date)
    }

    // Soonest first
    fn tie_break(&self, other: &Self) -> Ordering {
        self.start_date.cmp(&other.start_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_status_strings() {
        assert_eq!("IN_PROGRESS".parse::<EventStatus>(), Ok(EventStatus::InProgress));
        assert_eq!(EventStatus::InProgress.to_string(), "IN_PROGRESS");
        assert_eq!(OfferStatus::Active.to_string(), "ACTIVE");
        assert_eq!(
            "active".parse::<OfferStatus>(),
            Err(ContentError::UnknownStatus { kind: "offer", value: "active".to_string() })
        );
    }

    #[test]
    fn test_status_serde_matches_display() {
        let json = serde_json::to_value(EventStatus::InProgress).unwrap();
        assert_eq!(json, serde_json::json!(EventStatus::InProgress.to_string()));
    }

    #[test]
    fn test_live_gates() {
        let mut offer = SpecialOffer::new("Spa Weekend");
        assert!(offer.is_live());
        offer.status = OfferStatus::Paused;
        assert!(!offer.is_live());

        let mut event = Event::new("Jazz Night", Utc::now() + Duration::days(3));
        assert!(event.is_live());
        event.status = EventStatus::Draft;
        assert!(!event.is_live());
        event.status = EventStatus::InProgress;
        event.is_published = false;
        assert!(!event.is_live());
    }

    #[test]
    fn test_interaction_route_segments() {
        assert_eq!("views".parse::<Interaction>(), Ok(Interaction::View));
        assert_eq!("clicks".parse::<Interaction>(), Ok(Interaction::Click));
        assert!("hover".parse::<Interaction>().is_err());
        // Only the plural route segments are accepted.
        assert!("view".parse::<Interaction>().is_err());
        assert!("click".parse::<Interaction>().is_err());
    }

    #[test]
    fn test_hero_serializes_target_pages_as_list() {
        let mut hero = Hero::new("Dining");
        hero.target_pages = PageScope::pages(["restaurants"]);
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(json["target_pages"], serde_json::json!(["restaurants"]));
    }
}
