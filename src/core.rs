//! Core traits and types for pairsort.
//!
//! This module defines:
//! - [`Paired`]: a key slice and a payload slice that are always permuted together.
//! - SortLanes: internal view over the range a single recursive call owns.

use crate::error::{Error, Result};

/// Range length at or below which the parallel sorter stops forking.
///
/// Expressed on the closed range `[left, right]`: a range forks only when
/// `right - left >= SEQUENTIAL_THRESHOLD`.
pub const SEQUENTIAL_THRESHOLD: usize = 2048;

/// A key slice bound to a payload slice of the same length.
///
/// The payload at index `i` belongs to the key at index `i`. Every mutation
/// goes through [`Paired::swap`], which moves both sides in one step, so the
/// pairing cannot drift apart.
///
/// # Examples
///
/// ```
/// use pairsort::Paired;
///
/// let mut keys = ["b", "a"];
/// let mut ids = [2, 1];
///
/// let mut pair = Paired::new(&mut keys, &mut ids).unwrap();
/// pair.swap(0, 1);
///
/// assert_eq!(keys, ["a", "b"]);
/// assert_eq!(ids, [1, 2]);
/// ```
#[derive(Debug)]
pub struct Paired<'a, K, P> {
    keys: &'a mut [K],
    payload: &'a mut [P],
}

impl<'a, K, P> Paired<'a, K, P> {
    /// Binds `keys` to `payload`.
    ///
    /// Returns [`Error::LengthMismatch`] if the slices differ in length.
    pub fn new(keys: &'a mut [K], payload: &'a mut [P]) -> Result<Self> {
        if keys.len() != payload.len() {
            return Err(Error::LengthMismatch {
                keys: keys.len(),
                payload: payload.len(),
            });
        }
        Ok(Self { keys, payload })
    }

    /// Binds two slices already known to have the same length.
    pub(crate) fn from_equal_len(keys: &'a mut [K], payload: &'a mut [P]) -> Self {
        debug_assert_eq!(keys.len(), payload.len());
        Self { keys, payload }
    }

    /// Exchanges entries `a` and `b` in both slices.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline(always)]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.keys.swap(a, b);
        self.payload.swap(a, b);
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The key slice.
    pub fn keys(&self) -> &[K] {
        &*self.keys
    }

    /// The payload slice, aligned with [`Paired::keys`].
    pub fn payload(&self) -> &[P] {
        &*self.payload
    }
}

/// Exclusive view of the range one recursive sort call works on.
///
/// Implemented for a plain key slice and for [`Paired`]. The partitioner and
/// both sorters are written once against this trait, so the single-array and
/// dual-array forms share their control flow and differ only in `swap`.
pub(crate) trait SortLanes: Sized {
    type Key;

    /// Whether a payload slice travels with the keys.
    const PAIRED: bool;

    fn len(&self) -> usize;

    fn key(&self, index: usize) -> &Self::Key;

    fn swap(&mut self, a: usize, b: usize);

    /// Splits into `[0, pivot)` and `(pivot, len)`, dropping the pivot slot.
    ///
    /// The two halves borrow disjoint memory and may be sorted concurrently.
    fn split_around(self, pivot: usize) -> (Self, Self);
}

impl<K> SortLanes for &mut [K] {
    type Key = K;
    const PAIRED: bool = false;

    #[inline(always)]
    fn len(&self) -> usize {
        <[K]>::len(self)
    }

    #[inline(always)]
    fn key(&self, index: usize) -> &K {
        &self[index]
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        <[K]>::swap(self, a, b);
    }

    fn split_around(self, pivot: usize) -> (Self, Self) {
        let (left, right) = self.split_at_mut(pivot);
        (left, &mut right[1..])
    }
}

impl<K, P> SortLanes for Paired<'_, K, P> {
    type Key = K;
    const PAIRED: bool = true;

    #[inline(always)]
    fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline(always)]
    fn key(&self, index: usize) -> &K {
        &self.keys[index]
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        Paired::swap(self, a, b);
    }

    fn split_around(self, pivot: usize) -> (Self, Self) {
        let (left_keys, right_keys) = self.keys.split_at_mut(pivot);
        let (left_payload, right_payload) = self.payload.split_at_mut(pivot);
        (
            Paired {
                keys: left_keys,
                payload: left_payload,
            },
            Paired {
                keys: &mut right_keys[1..],
                payload: &mut right_payload[1..],
            },
        )
    }
}
