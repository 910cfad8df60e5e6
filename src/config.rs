//! Configuration for the parallel sorter.

use crate::core::SEQUENTIAL_THRESHOLD;
use rayon::ThreadPool;
use std::fmt;
use std::sync::Arc;

/// Parallel quicksort configuration.
///
/// The sort methods live in [`crate::algo`]; this type only carries the
/// crossover threshold and the pool the fork-join tasks run on.
///
/// # Examples
///
/// ```
/// use pairsort::ParallelSort;
///
/// let sorter = ParallelSort::new().with_sequential_threshold(512);
///
/// let mut keys = vec![3, 1, 2];
/// let mut values = vec!["c", "a", "b"];
/// sorter.sort_paired(&mut keys, &mut values).unwrap();
///
/// assert_eq!(keys, [1, 2, 3]);
/// assert_eq!(values, ["a", "b", "c"]);
/// ```
#[derive(Clone)]
pub struct ParallelSort {
    pub(crate) threshold: usize,
    pub(crate) thread_pool: Option<Arc<ThreadPool>>,
}

impl ParallelSort {
    /// Default threshold, global rayon pool.
    pub fn new() -> Self {
        Self {
            threshold: SEQUENTIAL_THRESHOLD,
            thread_pool: None,
        }
    }

    /// Sets the crossover bound.
    ///
    /// A range `[left, right]` is handed to the sequential sorter when
    /// `right - left < threshold`. Above it, a partition forks only when both
    /// of its sides are longer than the threshold; a shorter side is sorted
    /// sequentially in the current task. A threshold of `0` forks whenever
    /// both sides hold at least two elements.
    pub fn with_sequential_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Runs the fork-join tasks on `thread_pool` instead of the global pool.
    pub fn with_thread_pool(mut self, thread_pool: Arc<ThreadPool>) -> Self {
        self.thread_pool = Some(thread_pool);
        self
    }

    /// The crossover bound set by [`ParallelSort::with_sequential_threshold`].
    pub fn sequential_threshold(&self) -> usize {
        self.threshold
    }

    /// Runs `op` inside the configured pool, or directly when none is set.
    pub(crate) fn install<R, OP>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.thread_pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

impl Default for ParallelSort {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParallelSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParallelSort")
            .field("threshold", &self.threshold)
            .field(
                "thread_pool",
                &self.thread_pool.as_ref().map(|p| p.current_num_threads()),
            )
            .finish()
    }
}

impl From<Arc<ThreadPool>> for ParallelSort {
    fn from(thread_pool: Arc<ThreadPool>) -> Self {
        Self::new().with_thread_pool(thread_pool)
    }
}
