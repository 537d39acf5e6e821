use std::collections::{HashMap, HashSet};

use anyhow::{Result, bail};

/// Suggested minimum total-attempts floor for presenting buckets: the 10th
/// percentile of total attempts across every bucket present in either map.
///
/// The two maps may be independently keyed; a bucket missing from one counts
/// as zero attempts of that kind. Dropping buckets below the floor is the
/// caller's job. Fails when both maps are empty.
pub fn attempt_floor(passing: &HashMap<i32, u32>, rushing: &HashMap<i32, u32>) -> Result<f64> {
    let keys: HashSet<i32> = passing.keys().chain(rushing.keys()).copied().collect();
    if keys.is_empty() {
        bail!("attempt floor needs at least one bucket");
    }

    let totals: Vec<f64> = keys
        .into_iter()
        .map(|key| {
            let pass = passing.get(&key).copied().unwrap_or(0);
            let rush = rushing.get(&key).copied().unwrap_or(0);
            (pass + rush) as f64
        })
        .collect();
    Ok(percentile(&totals, 10.0))
}

/// Percentile with linear interpolation between closest ranks (the R-7
/// definition: fractional rank `p / 100 * (n - 1)` over the sorted values).
///
/// `values` must be non-empty and `p` within `[0, 100]`; callers in this
/// crate guard the empty case.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    debug_assert!(!values.is_empty());
    debug_assert!((0.0..=100.0).contains(&p));

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = rank - lower as f64;
    sorted[lower] + weight * (sorted[upper] - sorted[lower])
}

#[cfg(test)]
mod tests {
    use super::percentile;

    #[test]
    fn tenth_percentile_interpolates_between_ranks() {
        let totals = [10.0, 40.0, 50.0];
        assert!((percentile(&totals, 10.0) - 16.0).abs() < 1e-9);
    }

    #[test]
    fn single_value_is_its_own_percentile() {
        assert_eq!(percentile(&[37.0], 10.0), 37.0);
        assert_eq!(percentile(&[37.0], 90.0), 37.0);
    }

    #[test]
    fn endpoints_are_min_and_max() {
        let values = [5.0, 1.0, 9.0];
        assert_eq!(percentile(&values, 0.0), 1.0);
        assert_eq!(percentile(&values, 100.0), 9.0);
    }

    #[test]
    fn median_of_even_collection_is_midpoint() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert!((percentile(&values, 50.0) - 2.5).abs() < 1e-9);
    }
}
