use crate::schedule::{Schedulable, TimePolicy};
use chrono::{DateTime, Utc};

/// Whether a single item may be shown at `now` on `page`.
pub fn is_eligible<T: Schedulable>(item: &T, now: DateTime<Utc>, page: Option<&str>) -> bool {
    let profile = T::KIND.profile();

    if !item.is_live() {
        return false;
    }

    if profile.has_page_targeting && !item.page_scope().is_some_and(|scope| scope.admits(page)) {
        return false;
    }

    let window = item.window();
    match profile.time_policy {
        TimePolicy::OpenClosedWindow => window.contains(now),
        TimePolicy::ForwardOnly => window.start.is_some_and(|start| start >= now),
    }
}

/// Keep the items eligible at `now`, in their input order.
///
/// `page` only matters for kinds with page targeting. When it is `None`,
/// only items scoped to every page survive.
pub fn select_eligible<T, I>(items: I, now: DateTime<Utc>, page: Option<&str>) -> Vec<T>
where
    T: Schedulable,
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .filter(|item| is_eligible(item, now, page))
        .collect()
}
