//! Shannon entropy over frequency distributions.

use std::hash::Hash;

use super::freq::FreqDist;

/// Shannon entropy (in bits) of the maximum-likelihood distribution.
///
/// H = -Σ p(x) log2 p(x) over the observed samples. An empty distribution
/// has zero entropy.
pub fn entropy<T: Eq + Hash>(dist: &FreqDist<T>) -> f64 {
    if dist.is_empty() {
        return 0.0;
    }
    let total = dist.total() as f64;
    -dist
        .iter()
        .map(|(_, count)| {
            let p = count as f64 / total;
            p * p.log2()
        })
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_distribution_entropy() {
        // Four equiprobable samples: H = log2(4) = 2 bits.
        let dist: FreqDist<char> = "abcd".chars().collect();
        assert!((entropy(&dist) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_has_zero_entropy() {
        let dist: FreqDist<char> = "aaaa".chars().collect();
        assert!(entropy(&dist).abs() < 1e-12);
    }

    #[test]
    fn test_empty_distribution_has_zero_entropy() {
        let dist: FreqDist<char> = FreqDist::new();
        assert_eq!(entropy(&dist), 0.0);
    }

    #[test]
    fn test_biased_coin_entropy() {
        // p = 0.75 / 0.25: H = -(0.75 log2 0.75 + 0.25 log2 0.25) ≈ 0.8113.
        let dist: FreqDist<char> = "aaab".chars().collect();
        assert!((entropy(&dist) - 0.8112781244591328).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_bounded_by_log_types() {
        let dist: FreqDist<char> = "aabbbbccccdddddddd".chars().collect();
        let h = entropy(&dist);
        assert!(h > 0.0);
        assert!(h <= (dist.distinct() as f64).log2() + 1e-12);
    }
}
