//! Core sorting algorithms (midpoint-pivot quicksort, sequential and fork-join).
//!
//! This module implements:
//! - **Partition**: single-pivot, one-pass (Lomuto) partition around the midpoint element.
//! - **Sequential quicksort**: recursive divide-and-conquer, recursing into the
//!   shorter side so stack depth stays logarithmic.
//! - **Parallel quicksort**: the same recursion, forking both halves through
//!   [`rayon::join`] while both are above the sequential threshold.
//!
//! Every algorithm exists in a single-array form (keys only) and a dual-array
//! form (keys plus payload). Both forms run the same code over
//! `SortLanes`; the dual-array form routes every swap through
//! [`Paired::swap`].
//!
//! None of the sorts are stable. Pivot choice is fixed at the midpoint, so
//! inputs that keep landing the pivot at a range edge (e.g. many equal keys)
//! degrade to O(n²) comparisons.

use crate::config::ParallelSort;
use crate::core::{Paired, SortLanes};
use crate::error::{Error, Result};
use log::{debug, trace};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

type Outcome<E> = std::result::Result<(), E>;

/// Sorts `keys` in place on the calling thread.
///
/// # Examples
///
/// ```
/// use pairsort::sort_sequential;
///
/// let mut data = vec!["d", "b", "a", "c"];
/// sort_sequential(&mut data);
///
/// assert_eq!(data, ["a", "b", "c", "d"]);
/// ```
pub fn sort_sequential<K: Ord>(keys: &mut [K]) {
    let Ok(()) = quicksort_sequential(keys, &total_order::<K>);
}

/// Sorts `keys` in place on the calling thread, applying the same permutation to `payload`.
///
/// Returns [`Error::LengthMismatch`] without touching either slice if the
/// lengths differ.
///
/// # Examples
///
/// ```
/// use pairsort::sort_sequential_paired;
///
/// let mut keys = vec!["d", "b", "a", "c"];
/// let mut payload = vec![4, 2, 1, 3];
/// sort_sequential_paired(&mut keys, &mut payload).unwrap();
///
/// assert_eq!(keys, ["a", "b", "c", "d"]);
/// assert_eq!(payload, [1, 2, 3, 4]);
/// ```
pub fn sort_sequential_paired<K: Ord, P>(keys: &mut [K], payload: &mut [P]) -> Result<()> {
    let lanes = Paired::new(keys, payload)?;
    let Ok(()) = quicksort_sequential(lanes, &total_order::<K>);
    Ok(())
}

/// Sorts `keys` with a comparator that may fail to order two keys.
///
/// The sort stops at the first `None` and returns [`Error::Uncomparable`];
/// `keys` is then left as some permutation of its input.
///
/// ```
/// use pairsort::{Error, try_sort_sequential_by};
///
/// let mut data = [2.5, f64::NAN, 1.0];
/// assert_eq!(try_sort_sequential_by(&mut data, f64::partial_cmp), Err(Error::Uncomparable));
/// ```
pub fn try_sort_sequential_by<K, F>(keys: &mut [K], compare: F) -> Result<()>
where
    F: Fn(&K, &K) -> Option<Ordering>,
{
    quicksort_sequential(keys, &|a: &K, b: &K| {
        compare(a, b).ok_or(Error::Uncomparable)
    })
}

/// Dual-array form of [`try_sort_sequential_by`].
pub fn try_sort_sequential_paired_by<K, P, F>(
    keys: &mut [K],
    payload: &mut [P],
    compare: F,
) -> Result<()>
where
    F: Fn(&K, &K) -> Option<Ordering>,
{
    let lanes = Paired::new(keys, payload)?;
    quicksort_sequential(lanes, &|a: &K, b: &K| {
        compare(a, b).ok_or(Error::Uncomparable)
    })
}

/// Sorts `keys` in place using fork-join parallelism and the default [`ParallelSort`].
///
/// # Examples
///
/// ```
/// use pairsort::sort_parallel;
///
/// let mut data: Vec<u32> = (0..10_000).rev().collect();
/// sort_parallel(&mut data);
///
/// assert!(data.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub fn sort_parallel<K: Ord + Send>(keys: &mut [K]) {
    ParallelSort::default().sort(keys);
}

/// Dual-array form of [`sort_parallel`].
///
/// Returns [`Error::LengthMismatch`] without touching either slice if the
/// lengths differ.
pub fn sort_parallel_paired<K: Ord + Send, P: Send>(
    keys: &mut [K],
    payload: &mut [P],
) -> Result<()> {
    ParallelSort::default().sort_paired(keys, payload)
}

/// Fallible-comparator form of [`sort_parallel`].
pub fn try_sort_parallel_by<K, F>(keys: &mut [K], compare: F) -> Result<()>
where
    K: Send,
    F: Fn(&K, &K) -> Option<Ordering> + Sync,
{
    ParallelSort::default().try_sort_by(keys, compare)
}

/// Fallible-comparator form of [`sort_parallel_paired`].
pub fn try_sort_parallel_paired_by<K, P, F>(
    keys: &mut [K],
    payload: &mut [P],
    compare: F,
) -> Result<()>
where
    K: Send,
    P: Send,
    F: Fn(&K, &K) -> Option<Ordering> + Sync,
{
    ParallelSort::default().try_sort_paired_by(keys, payload, compare)
}

impl ParallelSort {
    /// Sorts `keys` in place.
    pub fn sort<K: Ord + Send>(&self, keys: &mut [K]) {
        let Ok(()) = self.run(keys, total_order::<K>);
    }

    /// Sorts `keys` in place, applying the same permutation to `payload`.
    ///
    /// Returns [`Error::LengthMismatch`] without touching either slice if the
    /// lengths differ.
    pub fn sort_paired<K: Ord + Send, P: Send>(
        &self,
        keys: &mut [K],
        payload: &mut [P],
    ) -> Result<()> {
        let lanes = Paired::new(keys, payload)?;
        self.sort_lanes(lanes);
        Ok(())
    }

    /// Sorts `keys` with a comparator that may fail to order two keys.
    ///
    /// When a comparison fails, branches that have not started their next
    /// partition stop; work already in progress runs to completion. The
    /// result is then [`Error::Uncomparable`] and `keys` is some permutation
    /// of its input.
    pub fn try_sort_by<K, F>(&self, keys: &mut [K], compare: F) -> Result<()>
    where
        K: Send,
        F: Fn(&K, &K) -> Option<Ordering> + Sync,
    {
        self.run(keys, move |a: &K, b: &K| {
            compare(a, b).ok_or(Error::Uncomparable)
        })
    }

    /// Dual-array form of [`ParallelSort::try_sort_by`].
    pub fn try_sort_paired_by<K, P, F>(
        &self,
        keys: &mut [K],
        payload: &mut [P],
        compare: F,
    ) -> Result<()>
    where
        K: Send,
        P: Send,
        F: Fn(&K, &K) -> Option<Ordering> + Sync,
    {
        let lanes = Paired::new(keys, payload)?;
        self.run(lanes, move |a: &K, b: &K| {
            compare(a, b).ok_or(Error::Uncomparable)
        })
    }

    pub(crate) fn sort_lanes<L>(&self, lanes: L)
    where
        L: SortLanes + Send,
        L::Key: Ord,
    {
        let Ok(()) = self.run(lanes, total_order::<L::Key>);
    }

    fn run<L, F, E>(&self, lanes: L, compare: F) -> Outcome<E>
    where
        L: SortLanes + Send,
        F: Fn(&L::Key, &L::Key) -> std::result::Result<Ordering, E> + Sync,
        E: Send,
    {
        debug!(
            "parallel sort: {} elements, paired: {}, threshold: {}",
            lanes.len(),
            L::PAIRED,
            self.threshold
        );

        let fork = Fork {
            compare,
            threshold: self.threshold,
            aborted: AtomicBool::new(false),
        };
        self.install(|| quicksort_parallel(lanes, &fork))
    }
}

fn total_order<K: Ord>(a: &K, b: &K) -> std::result::Result<Ordering, Infallible> {
    Ok(a.cmp(b))
}

/// Partitions `lanes` around its midpoint element and returns the pivot's final index.
///
/// 1. Moves the midpoint element (and its payload) to index 0.
/// 2. Scans indices `1..len`, swapping every element that is less than the
///    pivot into the growing prefix that starts at index 1.
/// 3. Swaps the pivot to the end of that prefix.
///
/// Afterwards everything before the returned index is less than the pivot and
/// everything after it is not. Callers guarantee `len >= 2`.
fn partition<L, F, E>(lanes: &mut L, compare: &F) -> std::result::Result<usize, E>
where
    L: SortLanes,
    F: Fn(&L::Key, &L::Key) -> std::result::Result<Ordering, E>,
{
    let len = lanes.len();
    debug_assert!(len >= 2);

    lanes.swap(0, (len - 1) / 2);

    // The pivot stays at 0 for the whole scan: swaps only touch 1..len.
    let mut boundary = 0;
    for i in 1..len {
        if compare(lanes.key(i), lanes.key(0))? == Ordering::Less {
            boundary += 1;
            lanes.swap(i, boundary);
        }
    }

    lanes.swap(0, boundary);
    Ok(boundary)
}

/// Sequential quicksort.
///
/// Recurses into the smaller side of each partition and continues with the
/// larger side in the same frame, so stack depth stays O(log n) even when
/// the pivot keeps landing at a range edge.
fn quicksort_sequential<L, F, E>(mut lanes: L, compare: &F) -> Outcome<E>
where
    L: SortLanes,
    F: Fn(&L::Key, &L::Key) -> std::result::Result<Ordering, E>,
{
    while lanes.len() > 1 {
        let pivot = partition(&mut lanes, compare)?;
        let (smaller, larger) = smaller_first(lanes.split_around(pivot));
        quicksort_sequential(smaller, compare)?;
        lanes = larger;
    }
    Ok(())
}

/// Orders the two sides of a partition by length, shorter first.
fn smaller_first<L: SortLanes>((left, right): (L, L)) -> (L, L) {
    if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    }
}

/// State shared by every task of one parallel sort.
struct Fork<F> {
    compare: F,
    threshold: usize,
    aborted: AtomicBool,
}

impl<F> Fork<F> {
    fn abort(&self) {
        if !self.aborted.swap(true, AtomicOrdering::Relaxed) {
            debug!("comparison failed, abandoning remaining partitions");
        }
    }

    fn is_aborted(&self) -> bool {
        self.aborted.load(AtomicOrdering::Relaxed)
    }
}

/// Fork-join quicksort.
///
/// Ranges with `right - left < threshold` go to [`quicksort_sequential`].
/// Larger ranges are partitioned once. When both sides are still above the
/// threshold they are sorted as two [`rayon::join`] tasks and this call
/// returns only after both have finished; a failure in either child is
/// returned even if the sibling succeeded. Otherwise the short side is
/// finished sequentially here and the loop continues with the long side, so
/// lopsided partitions (e.g. all-equal keys) do not nest joins.
fn quicksort_parallel<L, F, E>(mut lanes: L, fork: &Fork<F>) -> Outcome<E>
where
    L: SortLanes + Send,
    F: Fn(&L::Key, &L::Key) -> std::result::Result<Ordering, E> + Sync,
    E: Send,
{
    loop {
        let len = lanes.len();
        if len <= 1 || fork.is_aborted() {
            return Ok(());
        }

        if len - 1 < fork.threshold {
            return quicksort_sequential(lanes, &fork.compare).inspect_err(|_| fork.abort());
        }

        let pivot = partition(&mut lanes, &fork.compare).inspect_err(|_| fork.abort())?;
        let (smaller, larger) = smaller_first(lanes.split_around(pivot));

        if smaller.len() <= fork.threshold.max(1) {
            quicksort_sequential(smaller, &fork.compare).inspect_err(|_| fork.abort())?;
            lanes = larger;
            continue;
        }

        trace!("fork: {len} elements split at {pivot}");
        let (first, second) = rayon::join(
            || quicksort_parallel(smaller, fork),
            || quicksort_parallel(larger, fork),
        );
        return first.and(second);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn partition_keys(keys: &mut [i32]) -> usize {
        let mut lanes: &mut [i32] = keys;
        let Ok(pivot) = partition(&mut lanes, &total_order::<i32>);
        pivot
    }

    #[test]
    fn test_partition_uses_midpoint_pivot() {
        // Midpoint of 0..=4 is index 2, value 1: nothing is smaller.
        let mut keys = [5, 9, 1, 7, 3];
        let pivot = partition_keys(&mut keys);
        assert_eq!(pivot, 0);
        assert_eq!(keys[0], 1);

        // Midpoint of 0..=3 is index 1, value 8.
        let mut keys = [4, 8, 9, 2];
        let pivot = partition_keys(&mut keys);
        assert_eq!(pivot, 2);
        assert_eq!(keys[2], 8);
    }

    #[test]
    fn test_partition_postcondition() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let len = rng.random_range(2..200);
            let mut keys: Vec<i32> = (0..len).map(|_| rng.random_range(-20..20)).collect();
            let pivot_value = keys[(len - 1) / 2];
            let mut expected = keys.clone();

            let pivot = partition_keys(&mut keys);

            assert_eq!(keys[pivot], pivot_value);
            assert!(keys[..pivot].iter().all(|&k| k < pivot_value));
            assert!(keys[pivot + 1..].iter().all(|&k| k >= pivot_value));

            let mut actual = keys.clone();
            actual.sort();
            expected.sort();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_partition_moves_payload_with_key() {
        let mut keys = [30, 10, 50, 20, 40];
        let mut payload = ["thirty", "ten", "fifty", "twenty", "forty"];

        let mut lanes = Paired::new(&mut keys, &mut payload).unwrap();
        let Ok(pivot) = partition(&mut lanes, &total_order::<i32>);

        assert_eq!(pivot, 4);
        assert_eq!(keys[4], 50);
        let names = ["ten", "twenty", "thirty", "forty", "fifty"];
        for (key, name) in keys.iter().zip(payload.iter()) {
            assert_eq!(names[(*key / 10 - 1) as usize], *name);
        }
    }

    #[test]
    fn test_partition_failure_keeps_permutation() {
        let mut keys = [3.0, f64::NAN, 1.0, 2.0];
        let mut lanes: &mut [f64] = &mut keys;
        let result = partition(&mut lanes, &|a: &f64, b: &f64| {
            a.partial_cmp(b).ok_or(Error::Uncomparable)
        });

        assert_eq!(result, Err(Error::Uncomparable));
        assert_eq!(keys.iter().filter(|k| k.is_nan()).count(), 1);
        let mut rest: Vec<f64> = keys.iter().copied().filter(|k| !k.is_nan()).collect();
        rest.sort_by(f64::total_cmp);
        assert_eq!(rest, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sequential_all_equal_keys() {
        // Every partition leaves the left side empty.
        let mut keys = vec![7u8; 10_000];
        let mut payload: Vec<usize> = (0..keys.len()).collect();
        sort_sequential_paired(&mut keys, &mut payload).unwrap();

        assert!(keys.iter().all(|&k| k == 7));
        let mut seen = payload.clone();
        seen.sort();
        assert!(seen.iter().enumerate().all(|(i, &p)| i == p));
    }
}
