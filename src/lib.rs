//! # pairsort
//!
//! `pairsort` sorts a key slice in place, optionally carrying a second
//! "payload" slice along so that the payload at index `i` always stays with
//! the key at index `i`. The sorted pair then serves as a compact,
//! array-backed associative container that answers lookups by binary search.
//!
//! ## Key Features
//!
//! - **Paired Sorting**: Every swap of two keys swaps the matching payload
//!   entries in the same step (see [`Paired`]), so keys and values cannot
//!   drift apart.
//! - **Fork-Join Parallelism**: [`sort_parallel`] partitions once, then sorts
//!   both halves as two [`rayon`] tasks until ranges fall under the
//!   sequential threshold ([`SEQUENTIAL_THRESHOLD`], tunable through
//!   [`ParallelSort`]).
//! - **Fallible Comparators**: the `try_sort_*` functions accept comparators
//!   shaped like [`PartialOrd::partial_cmp`] and stop with
//!   [`Error::Uncomparable`] instead of producing garbage.
//! - **Lookup**: [`lookup`] and [`ArrayMap`] search the sorted result in
//!   O(log n) comparisons.
//!
//! ## Usage
//!
//! ```rust
//! use pairsort::{lookup, sort_parallel_paired};
//!
//! let mut keys = vec!["d", "b", "a", "c"];
//! let mut payload = vec![4, 2, 1, 3];
//! sort_parallel_paired(&mut keys, &mut payload).unwrap();
//!
//! assert_eq!(keys, ["a", "b", "c", "d"]);
//! assert_eq!(payload, [1, 2, 3, 4]);
//! assert_eq!(lookup(&keys, &payload, "b"), Ok(&2));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Typical**: O(n log n) comparisons, spread over the rayon pool once the
//!   input exceeds the sequential threshold.
//! - **Worst Case**: O(n²). The pivot is always the midpoint element, so inputs
//!   with many equal keys or adversarial layouts degrade.
//! - **Memory Overhead**: None beyond the recursion; all work is in place.
//!
//! Neither sort is stable.

pub mod algo;
pub mod config;
pub mod core;
pub mod error;
pub mod lookup;

pub use crate::algo::{
    sort_parallel, sort_parallel_paired, sort_sequential, sort_sequential_paired,
    try_sort_parallel_by, try_sort_parallel_paired_by, try_sort_sequential_by,
    try_sort_sequential_paired_by,
};
pub use crate::config::ParallelSort;
pub use crate::core::{Paired, SEQUENTIAL_THRESHOLD};
pub use crate::error::{Error, Result};
pub use crate::lookup::{ArrayMap, lookup, lookup_index};

pub mod prelude {
    pub use crate::algo::{
        sort_parallel, sort_parallel_paired, sort_sequential, sort_sequential_paired,
        try_sort_parallel_by, try_sort_parallel_paired_by, try_sort_sequential_by,
        try_sort_sequential_paired_by,
    };
    pub use crate::config::ParallelSort;
    pub use crate::error::Error;
    pub use crate::lookup::{ArrayMap, lookup, lookup_index};
}
