use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Stored target value meaning "every page".
pub const ALL_PAGES: &str = "all";

/// The schedulable entity kinds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentKind {
    Hero,
    SpecialOffer,
    Event,
}

/// How an item's dates gate its visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePolicy {
    /// Either bound may be absent; a present bound is inclusive.
    OpenClosedWindow,
    /// Only items starting at or after `now` are shown. The end date is ignored.
    ForwardOnly,
}

/// Capabilities that differ between entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindProfile {
    pub has_pinning: bool,
    pub time_policy: TimePolicy,
    pub has_page_targeting: bool,
}

impl ContentKind {
    pub const fn profile(self) -> KindProfile {
        match self {
            ContentKind::Hero => KindProfile {
                has_pinning: false,
                time_policy: TimePolicy::OpenClosedWindow,
                has_page_targeting: true,
            },
            ContentKind::SpecialOffer => KindProfile {
                has_pinning: true,
                time_policy: TimePolicy::OpenClosedWindow,
                has_page_targeting: false,
            },
            ContentKind::Event => KindProfile {
                has_pinning: true,
                time_policy: TimePolicy::ForwardOnly,
                has_page_targeting: false,
            },
        }
    }
}

/// Display window with optional inclusive bounds
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Window {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl Window {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// An inverted window (`start > end`) never contains anything.
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        match (self.start, self.end) {
            (None, None) => true,
            (Some(start), Some(end)) => start <= now && now <= end,
            (Some(start), None) => start <= now,
            (None, Some(end)) => now <= end,
        }
    }
}

/// Pages a hero may appear on.
///
/// Stored as a plain list of page keys where the literal `"all"` is the
/// wildcard; it (de)serializes in that form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum PageScope {
    #[default]
    All,
    Pages(BTreeSet<String>),
}

impl PageScope {
    pub fn pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        pages.into_iter().map(Into::<String>::into).collect()
    }

    /// Without a page context only `All` matches.
    pub fn admits(&self, page: Option<&str>) -> bool {
        match self {
            PageScope::All => true,
            PageScope::Pages(pages) => page.is_some_and(|p| pages.contains(p)),
        }
    }
}

impl FromIterator<String> for PageScope {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut pages = BTreeSet::new();
        for page in iter {
            if page == ALL_PAGES {
                return PageScope::All;
            }
            pages.insert(page);
        }
        PageScope::Pages(pages)
    }
}

impl From<Vec<String>> for PageScope {
    fn from(targets: Vec<String>) -> Self {
        targets.into_iter().collect()
    }
}

impl From<PageScope> for Vec<String> {
    fn from(scope: PageScope) -> Self {
        match scope {
            PageScope::All => vec![ALL_PAGES.to_string()],
            PageScope::Pages(pages) => pages.into_iter().collect(),
        }
    }
}

/// Shared surface the engine filters and ranks on.
pub trait Schedulable {
    const KIND: ContentKind;

    /// Publication gate, including any status requirement of the kind.
    fn is_live(&self) -> bool;

    fn is_pinned(&self) -> bool {
        false
    }

    fn is_featured(&self) -> bool;

    fn sort_order(&self) -> i32;

    fn window(&self) -> Window;

    fn page_scope(&self) -> Option<&PageScope> {
        None
    }

    /// Final ordering key once pin, featured and sort order tie.
    fn tie_break(&self, other: &Self) -> Ordering;
}
