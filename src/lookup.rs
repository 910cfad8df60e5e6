//! Binary-search lookups over sorted key/payload pairs.
//!
//! [`lookup`] and [`lookup_index`] work on any pair of slices produced by the
//! paired sorts. [`ArrayMap`] owns such a pair and offers a small map API on
//! top of it: build once with a parallel sort, then answer lookups in
//! O(log n) comparisons.

use crate::config::ParallelSort;
use crate::core::Paired;
use crate::error::{Error, Result};
use std::borrow::Borrow;

/// Returns the index of an entry equal to `key` in the sorted `keys`.
///
/// With duplicate keys any one of the matching indices may be returned.
/// Returns [`Error::LookupMiss`] if no entry matches.
///
/// `keys` must be sorted in non-decreasing order; otherwise the result is
/// unspecified (but memory safe).
pub fn lookup_index<K, Q>(keys: &[K], key: &Q) -> Result<usize>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    keys.binary_search_by(|probe| <K as Borrow<Q>>::borrow(probe).cmp(key))
        .map_err(|_| Error::LookupMiss)
}

/// Returns the payload paired with `key`.
///
/// # Examples
///
/// ```
/// use pairsort::{Error, lookup, sort_parallel_paired};
///
/// let mut keys = vec!["d", "b", "a", "c"];
/// let mut payload = vec![4, 2, 1, 3];
/// sort_parallel_paired(&mut keys, &mut payload).unwrap();
///
/// assert_eq!(lookup(&keys, &payload, "c"), Ok(&3));
/// assert_eq!(lookup(&keys, &payload, "e"), Err(Error::LookupMiss));
/// ```
pub fn lookup<'p, K, Q, P>(keys: &[K], payload: &'p [P], key: &Q) -> Result<&'p P>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    if keys.len() != payload.len() {
        return Err(Error::LengthMismatch {
            keys: keys.len(),
            payload: payload.len(),
        });
    }
    lookup_index(keys, key).map(|index| &payload[index])
}

/// An associative container backed by two sorted, index-aligned vectors.
///
/// Duplicate keys are kept as given; a lookup returns one of their values.
///
/// # Examples
///
/// ```
/// use pairsort::ArrayMap;
///
/// let map: ArrayMap<String, i32> = [("pear", 3), ("apple", 1), ("fig", 2)]
///     .into_iter()
///     .map(|(k, v)| (k.to_string(), v))
///     .collect();
///
/// assert_eq!(map.get("fig"), Some(&2));
/// assert_eq!(map.get("plum"), None);
/// assert_eq!(map.keys(), ["apple", "fig", "pear"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayMap<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K: Ord + Send, V: Send> ArrayMap<K, V> {
    /// Sorts `keys` and `values` as a pair with the default [`ParallelSort`].
    pub fn from_parts(keys: Vec<K>, values: Vec<V>) -> Result<Self> {
        Self::from_parts_with(keys, values, &ParallelSort::default())
    }

    /// Sorts `keys` and `values` as a pair with `sorter`.
    pub fn from_parts_with(
        mut keys: Vec<K>,
        mut values: Vec<V>,
        sorter: &ParallelSort,
    ) -> Result<Self> {
        sorter.sort_paired(&mut keys, &mut values)?;
        Ok(Self { keys, values })
    }
}

impl<K, V> ArrayMap<K, V> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Returns the value paired with `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.lookup(key).ok()
    }

    /// Like [`ArrayMap::get`], but reports a miss as [`Error::LookupMiss`].
    pub fn lookup<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        lookup_index(&self.keys, key).map(|index| &self.values[index])
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        lookup_index(&self.keys, key).is_ok()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in non-decreasing order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Values, aligned with [`ArrayMap::keys`].
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.keys.iter().zip(self.values.iter())
    }

    /// Consumes the map, returning the sorted key and value vectors.
    pub fn into_parts(self) -> (Vec<K>, Vec<V>) {
        (self.keys, self.values)
    }
}

impl<K, V> Default for ArrayMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Send, V: Send> FromIterator<(K, V)> for ArrayMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let (mut keys, mut values): (Vec<K>, Vec<V>) = iter.into_iter().unzip();
        ParallelSort::default().sort_lanes(Paired::from_equal_len(&mut keys, &mut values));
        Self { keys, values }
    }
}
