pub mod schedule;
pub mod models;
pub mod visibility;
pub mod ranking;

pub use schedule::{ContentKind, KindProfile, PageScope, Schedulable, TimePolicy, Window, ALL_PAGES};
pub use models::{Event, EventStatus, Hero, Interaction, OfferStatus, SpecialOffer};
pub use visibility::{is_eligible, select_eligible};
pub use ranking::{compare, rank, rank_in_place};

use chrono::{DateTime, Utc};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("Unknown {kind} status: {value}")]
    UnknownStatus { kind: &'static str, value: String },

    #[error("Unknown interaction: {0}")]
    UnknownInteraction(String),
}

/// Filter a batch against one reference instant, then rank what remains.
pub fn visible<T, I>(items: I, now: DateTime<Utc>, page: Option<&str>) -> Vec<T>
where
    T: Schedulable,
    I: IntoIterator<Item = T>,
{
    rank(select_eligible(items, now, page))
}
