use pairsort::SEQUENTIAL_THRESHOLD;
use pairsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::ThreadPoolBuilder;
use std::sync::Arc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_keys(rng: &mut StdRng, count: usize) -> Vec<i64> {
    (0..count).map(|_| rng.random_range(-10_000..10_000)).collect()
}

fn check_len(sorter: &ParallelSort, rng: &mut StdRng, count: usize) {
    let original = random_keys(rng, count);

    let mut keys = original.clone();
    let mut origins: Vec<usize> = (0..count).collect();
    sorter.sort_paired(&mut keys, &mut origins).unwrap();

    let mut expected = original.clone();
    expected.sort();
    assert_eq!(keys, expected, "length {}", count);
    for (key, &origin) in keys.iter().zip(origins.iter()) {
        assert_eq!(*key, original[origin], "length {}", count);
    }

    let mut single = original.clone();
    sorter.sort(&mut single);
    assert_eq!(single, expected, "length {}", count);
}

#[test]
fn test_default_threshold_boundary() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(2048);
    let sorter = ParallelSort::default();
    assert_eq!(sorter.sequential_threshold(), SEQUENTIAL_THRESHOLD);
    assert_eq!(SEQUENTIAL_THRESHOLD, 2048);

    // `right - left` is one less than the length: T and T + 1 elements sit on
    // either side of the crossover.
    for count in [
        SEQUENTIAL_THRESHOLD - 1,
        SEQUENTIAL_THRESHOLD,
        SEQUENTIAL_THRESHOLD + 1,
        SEQUENTIAL_THRESHOLD + 2,
    ] {
        check_len(&sorter, &mut rng, count);
    }
}

#[test]
fn test_custom_thresholds() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(7);

    for threshold in [0, 1, 2, 3, 17, 100, 4096] {
        let sorter = ParallelSort::new().with_sequential_threshold(threshold);
        assert_eq!(sorter.sequential_threshold(), threshold);

        for count in [0, 1, 2, 3, threshold.saturating_sub(1), threshold, threshold + 1, 5_000] {
            check_len(&sorter, &mut rng, count);
        }
    }
}

#[test]
fn test_custom_thread_pool() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(99);

    for threads in [1, 2, 4] {
        let pool = ThreadPoolBuilder::new().num_threads(threads).build().unwrap();
        let sorter = ParallelSort::new()
            .with_sequential_threshold(64)
            .with_thread_pool(Arc::new(pool));

        check_len(&sorter, &mut rng, 50_000);
    }

    let pool = Arc::new(ThreadPoolBuilder::new().num_threads(2).build().unwrap());
    let sorter = ParallelSort::from(pool);
    assert_eq!(sorter.sequential_threshold(), SEQUENTIAL_THRESHOLD);
    check_len(&sorter, &mut rng, 10_000);
}

#[test]
fn test_sort_from_inside_pool() {
    // Nested use: the caller is already a rayon worker.
    let pool = ThreadPoolBuilder::new().num_threads(3).build().unwrap();
    let mut rng = StdRng::seed_from_u64(4);
    let original = random_keys(&mut rng, 30_000);

    let sorted = pool.install(|| {
        let mut keys = original.clone();
        sort_parallel(&mut keys);
        keys
    });

    let mut expected = original;
    expected.sort();
    assert_eq!(sorted, expected);
}
