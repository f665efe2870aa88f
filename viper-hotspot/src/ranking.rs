//! Density percentiles relative to the whole profile.

use viper_core::DensityWindow;

///
/// Sorted view of a profile's densities for rank lookups.
///
/// The percentile of a density `d` is `100 * |{w : w.density < d}| / n`.
/// The comparison is strict, so tied densities always share one percentile.
/// The top density ranks at `100 * (n - k) / n` where `k` windows are tied at
/// the maximum; no window ever reaches 100.
///
#[derive(Debug, Clone)]
pub struct PercentileRanker {
    sorted: Vec<f64>,
}

impl PercentileRanker {
    pub fn new(windows: &[DensityWindow]) -> Self {
        let mut sorted: Vec<f64> = windows.iter().map(|w| w.density).collect();
        sorted.sort_by(f64::total_cmp);
        PercentileRanker { sorted }
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Ascending densities of the profile.
    pub fn sorted_densities(&self) -> &[f64] {
        &self.sorted
    }

    /// Number of windows whose density is strictly lower than `density`.
    pub fn count_below(&self, density: f64) -> usize {
        self.sorted.partition_point(|&d| d < density)
    }

    pub fn percentile_of(&self, density: f64) -> f64 {
        if self.sorted.is_empty() {
            return 0.0;
        }
        100.0 * self.count_below(density) as f64 / self.sorted.len() as f64
    }
}

///
/// Return a copy of `windows` with `density_percentile` filled in.
///
/// Must be given the full profile: percentiles computed over a filtered
/// subset are relative to that subset only.
///
pub fn annotate(windows: &[DensityWindow]) -> Vec<DensityWindow> {
    let ranker = PercentileRanker::new(windows);
    windows
        .iter()
        .map(|w| w.clone().with_percentile(ranker.percentile_of(w.density)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn profile(counts: &[u64]) -> Vec<DensityWindow> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| DensityWindow::new(i as u32, 1, c))
            .collect()
    }

    fn percentiles(windows: &[DensityWindow]) -> Vec<f64> {
        windows.iter().map(|w| w.density_percentile.unwrap()).collect()
    }

    #[rstest]
    fn test_strict_rank() {
        let annotated = annotate(&profile(&[0, 0, 0, 1]));
        assert_eq!(percentiles(&annotated), vec![0.0, 0.0, 0.0, 75.0]);
    }

    #[rstest]
    fn test_ties_at_maximum_share_percentile() {
        let annotated = annotate(&profile(&[3, 1, 3, 2]));
        assert_eq!(percentiles(&annotated), vec![50.0, 0.0, 50.0, 25.0]);
    }

    #[rstest]
    fn test_single_window_is_zero() {
        let annotated = annotate(&profile(&[7]));
        assert_eq!(percentiles(&annotated), vec![0.0]);
    }

    #[rstest]
    fn test_annotate_preserves_order_and_input() {
        let windows = profile(&[5, 1, 4, 2, 3]);
        let annotated = annotate(&windows);

        assert!(windows.iter().all(|w| w.density_percentile.is_none()));
        let starts: Vec<u32> = annotated.iter().map(|w| w.start).collect();
        assert_eq!(starts, vec![0, 1, 2, 3, 4]);
        assert_eq!(percentiles(&annotated), vec![80.0, 0.0, 60.0, 20.0, 40.0]);
    }

    #[rstest]
    fn test_empty_profile() {
        assert!(annotate(&[]).is_empty());
        assert_eq!(PercentileRanker::new(&[]).percentile_of(1.0), 0.0);
    }

    #[rstest]
    fn test_monotonic() {
        let annotated = annotate(&profile(&[9, 0, 4, 4, 7, 1, 0, 8, 2]));
        for a in &annotated {
            for b in &annotated {
                if a.density < b.density {
                    assert!(a.density_percentile <= b.density_percentile);
                }
            }
        }
    }

    #[rstest]
    fn test_agrees_with_quadratic_rank() {
        let windows = profile(&[2, 6, 6, 0, 3, 9, 2, 2, 5]);
        let annotated = annotate(&windows);
        for w in &annotated {
            let below = windows.iter().filter(|o| o.density < w.density).count();
            let expected = 100.0 * below as f64 / windows.len() as f64;
            assert_eq!(w.density_percentile, Some(expected));
        }
    }
}
