//! Cutoff resolution and hotspot filtering.

use log::debug;

use viper_core::{DensityWindow, HotspotError, Result};

use crate::ranking::PercentileRanker;

pub const DEFAULT_PERCENTILE: f64 = 95.0;

///
/// How the density cutoff of a run is chosen.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CutoffPolicy {
    /// Use this density directly.
    Threshold(f64),
    /// Use this percentile (0-100) of the profile's density distribution.
    Percentile(f64),
}

impl CutoffPolicy {
    ///
    /// An explicit threshold always wins over the percentile.
    ///
    pub fn new(density_threshold: Option<f64>, percentile: f64) -> Self {
        match density_threshold {
            Some(threshold) => CutoffPolicy::Threshold(threshold),
            None => CutoffPolicy::Percentile(percentile),
        }
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            CutoffPolicy::Threshold(threshold) if threshold.is_nan() => {
                Err(HotspotError::InvalidThreshold(threshold))
            }
            CutoffPolicy::Percentile(percentile) if !(0.0..=100.0).contains(&percentile) => {
                Err(HotspotError::InvalidPercentile(percentile))
            }
            _ => Ok(()),
        }
    }

    ///
    /// Turn the policy into a concrete density cutoff for `windows`.
    ///
    pub fn resolve(&self, windows: &[DensityWindow]) -> Result<f64> {
        self.validate()?;
        match *self {
            CutoffPolicy::Threshold(threshold) => Ok(threshold),
            CutoffPolicy::Percentile(percentile) => {
                let ranker = PercentileRanker::new(windows);
                let cutoff = interpolated_percentile(ranker.sorted_densities(), percentile)
                    .ok_or(HotspotError::EmptyProfile)?;
                debug!("{}th density percentile resolved to {}", percentile, cutoff);
                Ok(cutoff)
            }
        }
    }
}

///
/// Linear interpolation between closest ranks over ascending `sorted` values.
///
/// With `h = (n - 1) * percentile / 100` the result is
/// `sorted[floor(h)] + (h - floor(h)) * (sorted[floor(h) + 1] - sorted[floor(h)])`,
/// the default method of NumPy and R (Hyndman and Fan type 7).
///
/// Returns `None` when `sorted` is empty.
pub fn interpolated_percentile(sorted: &[f64], percentile: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let h = last as f64 * percentile / 100.0;
    let lo = (h.floor() as usize).min(last);
    let hi = (lo + 1).min(last);
    let fraction = h - lo as f64;

    Some(sorted[lo] + fraction * (sorted[hi] - sorted[lo]))
}

///
/// Windows with `density >= cutoff`, copied out in their original order.
///
pub fn filter_at_or_above(windows: &[DensityWindow], cutoff: f64) -> Vec<DensityWindow> {
    windows
        .iter()
        .filter(|w| w.density >= cutoff)
        .cloned()
        .collect()
}

///
/// Resolve the cutoff for `windows`: `density_threshold` if given, otherwise
/// the `percentile`-th percentile of their densities.
///
pub fn resolve_cutoff(
    windows: &[DensityWindow],
    density_threshold: Option<f64>,
    percentile: f64,
) -> Result<f64> {
    CutoffPolicy::new(density_threshold, percentile).resolve(windows)
}

///
/// Select the hotspot windows of a profile.
///
/// The percentile cutoff is always computed over the `windows` passed in, so
/// give it the full profile. Percentile annotations, if present, are carried
/// over unchanged.
///
/// # Arguments
/// - windows: the density profile, optionally percentile-annotated
/// - density_threshold: explicit density cutoff; overrides `percentile`
/// - percentile: percentile of the density distribution used as cutoff
pub fn select(
    windows: &[DensityWindow],
    density_threshold: Option<f64>,
    percentile: f64,
) -> Result<Vec<DensityWindow>> {
    let cutoff = resolve_cutoff(windows, density_threshold, percentile)?;
    Ok(filter_at_or_above(windows, cutoff))
}
