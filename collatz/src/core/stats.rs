//! Sequence-length statistics over integer intervals.

use serde::Serialize;

use crate::core::sequence::sequence_len;

/// Summary of the sequence lengths for every integer in `[low, high]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthStats {
    pub low: u64,
    pub high: u64,
    pub count: u64,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub stddev: f64,
}

impl LengthStats {
    /// One-pass mean and standard deviation over the given lengths.
    ///
    /// `stddev = sqrt(max(0, E[x^2] - E[x]^2))`; the clamp guards against a
    /// tiny negative variance from floating-point rounding.
    pub fn from_lengths(low: u64, high: u64, lens: impl IntoIterator<Item = u64>) -> Self {
        let mut count = 0u64;
        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        let mut min = u64::MAX;
        let mut max = 0u64;
        for len in lens {
            count += 1;
            let x = len as f64;
            sum += x;
            sum_sq += x * x;
            min = min.min(len);
            max = max.max(len);
        }
        assert!(count > 0, "empty interval");
        let mean = sum / count as f64;
        let mean_sq = sum_sq / count as f64;
        let stddev = (mean_sq - mean * mean).max(0.0).sqrt();
        Self {
            low,
            high,
            count,
            min,
            max,
            mean,
            stddev,
        }
    }
}

/// Yield `(n, sequence_len(n))` for each `n` in `[low, high]`, in order.
pub fn lengths(low: u64, high: u64) -> impl Iterator<Item = (u64, u64)> {
    assert!(low > 0 && low <= high, "interval must satisfy 1 <= low <= high");
    (low..=high).map(|n| (n, sequence_len(n)))
}

/// Compute [`LengthStats`] for `[low, high]`.
pub fn length_stats(low: u64, high: u64) -> LengthStats {
    LengthStats::from_lengths(low, high, lengths(low, high).map(|(_, len)| len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_interval_has_zero_spread() {
        let stats = length_stats(1, 1);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.stddev, 0.0);
    }

    #[test]
    fn lengths_enumerate_interval_in_order() {
        let rows: Vec<(u64, u64)> = lengths(1, 3).collect();
        assert_eq!(rows, vec![(1, 0), (2, 1), (3, 7)]);
    }

    #[test]
    fn stats_over_one_to_three() {
        let stats = length_stats(1, 3);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 7);
        // lengths are 0, 1, 7
        let mean = 8.0 / 3.0;
        let var = 50.0 / 3.0 - mean * mean;
        assert!((stats.mean - mean).abs() < 1e-12);
        assert!((stats.stddev - var.sqrt()).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "interval must satisfy")]
    fn lengths_reject_inverted_interval() {
        let _ = lengths(5, 4);
    }
}
