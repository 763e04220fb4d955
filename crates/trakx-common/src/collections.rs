//! Collection helpers.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

/// Items present in every one of `sets`. Empty when `sets` is empty.
pub fn intersect_many<T, I>(sets: impl IntoIterator<Item = I>) -> HashSet<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut sets = sets.into_iter();
    let Some(first) = sets.next() else {
        return HashSet::new();
    };
    sets.fold(first.into_iter().collect(), |mut intersection, set| {
        let set: HashSet<T> = set.into_iter().collect();
        intersection.retain(|item| set.contains(item));
        intersection
    })
}

/// Renders items lowercased, space-trimmed and deduplicated, joined by commas.
///
/// With `spacing`, entries are separated by `", "` instead of `","`.
pub fn to_csv_distinct_list<T: Display>(items: impl IntoIterator<Item = T>, spacing: bool) -> String {
    let separator = if spacing { ", " } else { "," };
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|item| item.to_string().to_lowercase().trim_matches(' ').to_string())
        .filter(|item| seen.insert(item.clone()))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Keeps the first item for each distinct key, in input order.
pub fn distinct_by<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}
