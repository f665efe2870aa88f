//! Mutation hotspot detection over a single genome.
//!
//! The pipeline has three stages, run in this order:
//!
//! - [`scanner`]: aggregate sparse per-position mutation counts into a dense
//!   profile of fixed-size, possibly overlapping windows
//! - [`ranking`]: annotate every window with the share of windows of strictly
//!   lower density
//! - [`selection`]: resolve a density cutoff and keep the windows at or above it
//!
//! # Example
//!
//! ```no_run
//! use viper_core::MutationRecord;
//! use viper_hotspot::{HotspotConfig, detect_hotspots};
//!
//! let mutations = vec![MutationRecord::new(1, 1), MutationRecord::new(5, 2)];
//! let config = HotspotConfig {
//!     window_size: 4,
//!     step_size: 2,
//!     ..HotspotConfig::default()
//! };
//!
//! let report = detect_hotspots(&mutations, 10, &config).unwrap();
//! println!("{} hotspots above {}", report.hotspots.len(), report.cutoff);
//! ```

pub mod config;
pub mod ranking;
pub mod scanner;
pub mod selection;

use log::info;

use viper_core::{DensityWindow, MutationRecord, Result};

// re-exports
pub use config::{HotspotConfig, HotspotConfigError};
pub use ranking::{PercentileRanker, annotate};
pub use scanner::{WindowScanner, scan};
pub use selection::{CutoffPolicy, resolve_cutoff, select};

/// Everything a hotspot run produces.
#[derive(Debug, Clone)]
pub struct HotspotReport {
    /// Full, percentile-annotated density profile.
    pub profile: Vec<DensityWindow>,
    /// Windows whose density meets the cutoff, in profile order.
    pub hotspots: Vec<DensityWindow>,
    /// Density cutoff that was applied.
    pub cutoff: f64,
}

///
/// Run scan, percentile annotation and hotspot selection with one config.
///
/// Ranking happens on the complete profile before any filtering, so the
/// percentiles carried by the hotspots are relative to the whole genome.
///
pub fn detect_hotspots(
    mutations: &[MutationRecord],
    genome_length: u32,
    config: &HotspotConfig,
) -> Result<HotspotReport> {
    let scanner = config.scanner()?;
    let windows = scanner.scan(mutations, genome_length)?;
    let profile = annotate(&windows);

    let policy = config.cutoff_policy();
    let cutoff = policy.resolve(&profile)?;
    let hotspots = selection::filter_at_or_above(&profile, cutoff);

    info!(
        "{} of {} windows at or above density cutoff {}",
        hotspots.len(),
        profile.len(),
        cutoff
    );

    Ok(HotspotReport {
        profile,
        hotspots,
        cutoff,
    })
}
