//! Unit tests for the seeded random source.

use rand::RngCore;

use super::SeededRng;

#[test]
fn test_same_seed_same_sequence() {
    let mut a = SeededRng::new("alice");
    let mut b = SeededRng::new("alice");
    for _ in 0..1000 {
        assert_eq!(a.next_f64(), b.next_f64());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = SeededRng::new("alice");
    let mut b = SeededRng::new("bob");
    let diverged = (0..100).any(|_| a.next_f64() != b.next_f64());
    assert!(diverged);
}

#[test]
fn test_seed_hash_known_values() {
    // hash folds as 31 * h + c over UTF-16 code units
    assert_eq!(SeededRng::new("a").state(), 97);
    assert_eq!(SeededRng::new("ab").state(), 31 * 97 + 98);
    assert_eq!(SeededRng::new("bob").state(), (31 * 98 + 111) * 31 + 98);
}

#[test]
fn test_zero_state_substitution() {
    // The empty string hashes to zero; the accumulator must never be zero.
    assert_eq!(SeededRng::new("").state(), 1);
    assert_eq!(SeededRng::from_state(0).state(), 1);
}

#[test]
fn test_state_never_zero_for_varied_seeds() {
    for seed in ["alice", "bob", "x", "0", "a much longer seed string than usual", "日本語"] {
        assert_ne!(SeededRng::new(seed).state(), 0, "seed {seed:?}");
    }
}

#[test]
fn test_next_f64_in_unit_interval() {
    let mut rng = SeededRng::new("range-check");
    for _ in 0..10_000 {
        let value = rng.next_f64();
        assert!((0.0..1.0).contains(&value), "out of range: {value}");
    }
}

#[test]
fn test_next_f64_roughly_uniform() {
    let mut rng = SeededRng::new("uniformity");
    let n = 10_000;
    let mean: f64 = (0..n).map(|_| rng.next_f64()).sum::<f64>() / n as f64;
    assert!((0.45..0.55).contains(&mean), "mean {mean} far from 0.5");
}

#[test]
fn test_next_int_bounds_inclusive() {
    let mut rng = SeededRng::new("bounds");
    let mut seen = [false; 4];
    for _ in 0..1000 {
        let value = rng.next_int(0, 3);
        assert!((0..=3).contains(&value));
        seen[value as usize] = true;
    }
    assert!(seen.iter().all(|&hit| hit), "not all endpoints drawn: {seen:?}");
}

#[test]
fn test_next_int_degenerate_range() {
    let mut rng = SeededRng::new("degenerate");
    for _ in 0..10 {
        assert_eq!(rng.next_int(42, 42), 42);
    }
}

#[test]
fn test_next_int_wide_range() {
    let mut rng = SeededRng::new("wide");
    for _ in 0..10_000 {
        let value = rng.next_int(10, 900);
        assert!((10..=900).contains(&value));
    }
}

#[test]
fn test_shuffled_preserves_elements() {
    let mut rng = SeededRng::new("shuffle");
    let original: Vec<i32> = (0..120).collect();
    let shuffled = rng.shuffled(original.clone());
    assert_ne!(shuffled, original, "120 elements staying in place is absurd");

    let mut sorted = shuffled;
    sorted.sort_unstable();
    assert_eq!(sorted, original);
}

#[test]
fn test_shuffled_deterministic() {
    let items: Vec<i32> = (0..50).collect();
    let a = SeededRng::new("alice").shuffled(items.clone());
    let b = SeededRng::new("alice").shuffled(items);
    assert_eq!(a, b);
}

#[test]
fn test_shuffled_trivial_inputs() {
    let mut rng = SeededRng::new("trivial");
    assert_eq!(rng.shuffled(Vec::<i32>::new()), Vec::<i32>::new());
    assert_eq!(rng.shuffled(vec![7]), vec![7]);
}

#[test]
fn test_rng_core_next_u64_composes_two_draws() {
    let mut words = SeededRng::new("core");
    let lo = u64::from(words.next_u32());
    let hi = u64::from(words.next_u32());

    let mut paired = SeededRng::new("core");
    assert_eq!(paired.next_u64(), (hi << 32) | lo);
}

#[test]
fn test_rng_core_fill_bytes_partial_chunk() {
    let mut rng = SeededRng::new("bytes");
    let mut buffer = [0u8; 7];
    rng.fill_bytes(&mut buffer);

    let mut twin = SeededRng::new("bytes");
    let first = twin.next_u32().to_le_bytes();
    let second = twin.next_u32().to_le_bytes();
    assert_eq!(&buffer[..4], &first);
    assert_eq!(&buffer[4..], &second[..3]);
}
