//! Grouping and join operations over keyed data
//!
//! The aggregation stages are built from a handful of explicit relational
//! operations instead of column-name conventions:
//!
//! - [`group_by`]: bucket items by a key, in key order
//! - [`inner_join`]: keep keys present on both sides
//! - [`outer_join`]: keep keys present on either side, tagging which sides matched
//! - [`left_join`]: keep every left item, attaching the matching right value if any
//!
//! Joined values never share a namespace: they are returned as tuples or
//! [`Joined`] variants, so the caller decides where each side ends up.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use olympiad_analysis::join::{Joined, outer_join};
//!
//! let white = BTreeMap::from([("Alice", 1.0), ("Carol", 0.0)]);
//! let black = BTreeMap::from([("Alice", 0.5), ("Dan", 1.0)]);
//! let joined = outer_join(white, black);
//!
//! assert_eq!(joined["Alice"], Joined::Both(1.0, 0.5));
//! assert_eq!(joined["Carol"], Joined::Left(0.0));
//! assert_eq!(joined["Dan"], Joined::Right(1.0));
//! ```

use std::collections::BTreeMap;

/// Result of an outer join for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joined<L, R> {
    Both(L, R),
    Left(L),
    Right(R),
}

impl<L, R> Joined<L, R> {
    pub fn into_parts(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Both(left, right) => (Some(left), Some(right)),
            Self::Left(left) => (Some(left), None),
            Self::Right(right) => (None, Some(right)),
        }
    }
}

/// Groups items by key, preserving input order within each group.
pub fn group_by<'a, T, K, F>(items: impl IntoIterator<Item = &'a T>, mut key: F) -> BTreeMap<K, Vec<&'a T>>
where
    T: 'a,
    K: Ord,
    F: FnMut(&'a T) -> K,
{
    let mut groups = BTreeMap::<K, Vec<&'a T>>::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item);
    }
    groups
}

/// Pairs the values of keys present in both maps.
pub fn inner_join<K, L, R>(left: BTreeMap<K, L>, mut right: BTreeMap<K, R>) -> BTreeMap<K, (L, R)>
where
    K: Ord,
{
    left.into_iter()
        .filter_map(|(key, l)| {
            let r = right.remove(&key)?;
            Some((key, (l, r)))
        })
        .collect()
}

/// Combines every key of either map.
pub fn outer_join<K, L, R>(left: BTreeMap<K, L>, mut right: BTreeMap<K, R>) -> BTreeMap<K, Joined<L, R>>
where
    K: Ord,
{
    let mut joined = left
        .into_iter()
        .map(|(key, l)| {
            let value = match right.remove(&key) {
                Some(r) => Joined::Both(l, r),
                None => Joined::Left(l),
            };
            (key, value)
        })
        .collect::<BTreeMap<_, _>>();
    joined.extend(right.into_iter().map(|(key, r)| (key, Joined::Right(r))));
    joined
}

/// Attaches to each item the right value under its key, if any.
///
/// Every item is kept, in input order.
pub fn left_join<'a, T, K, V, F>(
    items: impl IntoIterator<Item = &'a T>,
    right: &'a BTreeMap<K, V>,
    mut key: F,
) -> Vec<(&'a T, Option<&'a V>)>
where
    T: 'a,
    K: Ord,
    F: FnMut(&'a T) -> K,
{
    items
        .into_iter()
        .map(|item| (item, right.get(&key(item))))
        .collect()
}
