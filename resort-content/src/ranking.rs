use crate::schedule::Schedulable;
use std::cmp::Ordering;

/// Display order: pinned, then featured, then `sort_order` ascending, then
/// the kind's own tie-break. Pinning is ignored for kinds without it.
pub fn compare<T: Schedulable>(a: &T, b: &T) -> Ordering {
    let pinned = if T::KIND.profile().has_pinning {
        b.is_pinned().cmp(&a.is_pinned())
    } else {
        Ordering::Equal
    };

    pinned
        .then_with(|| b.is_featured().cmp(&a.is_featured()))
        .then_with(|| a.sort_order().cmp(&b.sort_order()))
        .then_with(|| a.tie_break(b))
}

/// Stable sort; items equal on every key keep their input order.
pub fn rank_in_place<T: Schedulable>(items: &mut [T]) {
    items.sort_by(compare);
}

pub fn rank<T: Schedulable>(mut items: Vec<T>) -> Vec<T> {
    rank_in_place(&mut items);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Event, Hero, SpecialOffer};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn offer(pinned: bool, featured: bool, sort_order: i32) -> SpecialOffer {
        let mut offer = SpecialOffer::new(format!("{pinned}-{featured}-{sort_order}"));
        offer.is_pinned = pinned;
        offer.is_featured = featured;
        offer.sort_order = sort_order;
        offer.created_at = at(2024, 1, 1);
        offer
    }

    fn keys(offers: &[SpecialOffer]) -> Vec<(bool, bool, i32)> {
        offers.iter().map(|o| (o.is_pinned, o.is_featured, o.sort_order)).collect()
    }

    #[test]
    fn test_pinned_then_featured_by_sort_order() {
        let ranked = rank(vec![offer(false, true, 2), offer(true, false, 5), offer(false, true, 1)]);
        assert_eq!(keys(&ranked), vec![(true, false, 5), (false, true, 1), (false, true, 2)]);
    }

    #[test]
    fn test_offer_tie_break_newest_first() {
        let mut older = offer(false, false, 0);
        older.created_at = at(2024, 1, 1);
        let mut newer = offer(false, false, 0);
        newer.created_at = at(2024, 2, 1);

        let ranked = rank(vec![older.clone(), newer.clone()]);
        assert_eq!(ranked, vec![newer, older]);
    }

    #[test]
    fn test_hero_ignores_missing_pin_and_sorts_newest_first() {
        let mut first = Hero::new("First");
        first.created_at = at(2024, 1, 1);
        let mut second = Hero::new("Second");
        second.created_at = at(2024, 3, 1);
        let mut featured = Hero::new("Featured");
        featured.is_featured = true;
        featured.sort_order = 9;
        featured.created_at = at(2023, 1, 1);

        let ranked = rank(vec![first, second, featured]);
        let titles: Vec<_> = ranked.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["Featured", "Second", "First"]);
    }

    #[test]
    fn test_event_tie_break_soonest_first() {
        let base = at(2024, 6, 1);
        let later = Event::new("Later", base + Duration::days(10));
        let sooner = Event::new("Sooner", base + Duration::days(2));
        let mut pinned_latest = Event::new("Pinned", base + Duration::days(30));
        pinned_latest.is_pinned = true;

        let ranked = rank(vec![later, sooner, pinned_latest]);
        let titles: Vec<_> = ranked.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Pinned", "Sooner", "Later"]);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let items: Vec<_> = (0..6).map(|_| offer(false, true, 3)).collect();
        let ids: Vec<_> = items.iter().map(|o| o.id).collect();
        let ranked = rank(items);
        assert_eq!(ranked.iter().map(|o| o.id).collect::<Vec<_>>(), ids);
    }

    fn arb_offers() -> impl Strategy<Value = Vec<SpecialOffer>> {
        prop::collection::vec((any::<bool>(), any::<bool>(), -3i32..3, 0i64..4), 0..24).prop_map(|rows| {
            rows.into_iter()
                .map(|(pinned, featured, sort_order, day)| {
                    let mut o = offer(pinned, featured, sort_order);
                    o.created_at = at(2024, 1, 1) + Duration::days(day);
                    o
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn rank_is_idempotent(offers in arb_offers()) {
            let once = rank(offers);
            let twice = rank(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn pinned_always_lead(offers in arb_offers()) {
            let ranked = rank(offers);
            let first_unpinned = ranked.iter().position(|o| !o.is_pinned).unwrap_or(ranked.len());
            prop_assert!(ranked[first_unpinned..].iter().all(|o| !o.is_pinned));
        }

        #[test]
        fn rank_keeps_input_order_among_equals(offers in arb_offers()) {
            let positions: std::collections::HashMap<_, _> =
                offers.iter().enumerate().map(|(i, o)| (o.id, i)).collect();
            let ranked = rank(offers);
            for pair in ranked.windows(2) {
                if compare(&pair[0], &pair[1]) == Ordering::Equal {
                    prop_assert!(positions[&pair[0].id] < positions[&pair[1].id]);
                }
            }
        }
    }
}
