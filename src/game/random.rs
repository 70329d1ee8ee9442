//! Random coin lines for benchmarks and randomized tests.

use rand::Rng;

/// Generate `len` coins with values drawn uniformly from `1..=max_value`.
/// A `max_value` of zero is treated as one.
pub fn random_line<R: Rng + ?Sized>(rng: &mut R, len: usize, max_value: u32) -> Vec<u32> {
    let max_value = max_value.max(1);
    (0..len).map(|_| rng.gen_range(1..=max_value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let line = random_line(&mut rng, 64, 9);
        assert_eq!(line.len(), 64);
        assert!(line.iter().all(|&c| (1..=9).contains(&c)));
    }

    #[test]
    fn zero_max_yields_ones() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_line(&mut rng, 3, 0), vec![1, 1, 1]);
    }

    #[test]
    fn same_seed_same_line() {
        let a = random_line(&mut StdRng::seed_from_u64(42), 10, 100);
        let b = random_line(&mut StdRng::seed_from_u64(42), 10, 100);
        assert_eq!(a, b);
    }
}
