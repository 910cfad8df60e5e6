//! Error type shared by the sort entry points and the lookup helpers.

use thiserror::Error;

/// Errors reported by `pairsort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The key and payload slices of a paired operation differ in length.
    ///
    /// Always reported before either slice is touched.
    #[error("length mismatch: {keys} keys but {payload} payload entries")]
    LengthMismatch {
        /// Number of keys supplied.
        keys: usize,
        /// Number of payload entries supplied.
        payload: usize,
    },

    /// The comparator could not order two keys (e.g. a `NaN` float).
    ///
    /// The sort stops where it was; both slices still hold a permutation of
    /// their original contents.
    #[error("keys could not be compared")]
    Uncomparable,

    /// A binary search did not find the requested key.
    #[error("key not found")]
    LookupMiss,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
