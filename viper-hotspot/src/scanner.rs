//! Sliding-window aggregation of sparse mutation counts.

use log::{debug, warn};

use viper_core::{DensityWindow, HotspotError, MutationRecord, Result};

///
/// Fixed window geometry for scanning a genome.
///
/// Windows start at `0, step_size, 2 * step_size, ...` for as long as a full
/// window fits; no window is ever truncated at the genome end.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowScanner {
    window_size: u32,
    step_size: u32,
}

impl WindowScanner {
    pub fn new(window_size: u32, step_size: u32) -> Result<Self> {
        if window_size == 0 {
            return Err(HotspotError::ZeroWindowSize);
        }
        if step_size == 0 {
            return Err(HotspotError::ZeroStepSize);
        }
        Ok(WindowScanner {
            window_size,
            step_size,
        })
    }

    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    pub fn step_size(&self) -> u32 {
        self.step_size
    }

    ///
    /// Number of full windows that fit in `genome_length`.
    ///
    pub fn window_count(&self, genome_length: u32) -> Result<usize> {
        self.check_genome(genome_length)?;
        Ok(((genome_length - self.window_size) / self.step_size) as usize + 1)
    }

    ///
    /// Start coordinates of every window, ascending.
    ///
    pub fn window_starts(&self, genome_length: u32) -> Result<impl Iterator<Item = u32>> {
        self.check_genome(genome_length)?;
        Ok((0..=genome_length - self.window_size).step_by(self.step_size as usize))
    }

    ///
    /// Aggregate `mutations` into a density profile over `[0, genome_length)`.
    ///
    /// Each window sums the counts of the records whose position lies in its
    /// half-open span, so overlapping windows share mutations. Input order does
    /// not matter. Positions at or past `genome_length` fall in no window.
    ///
    /// # Arguments
    /// - mutations: sparse per-position counts, must not be empty
    /// - genome_length: total coordinate span of the genome
    pub fn scan(&self, mutations: &[MutationRecord], genome_length: u32) -> Result<Vec<DensityWindow>> {
        if mutations.is_empty() {
            return Err(HotspotError::EmptyInput);
        }
        self.check_genome(genome_length)?;

        let mut positions: Vec<(u32, u64)> = mutations
            .iter()
            .filter(|record| record.position < genome_length)
            .map(|record| (record.position, record.count))
            .collect();
        let outside = mutations.len() - positions.len();
        if outside > 0 {
            warn!(
                "{} mutation position(s) lie outside the genome (length {}) and were ignored",
                outside, genome_length
            );
        }
        positions.sort_unstable_by_key(|&(position, _)| position);

        // prefix[i] holds the summed counts of the first i sorted records
        let mut prefix = Vec::with_capacity(positions.len() + 1);
        prefix.push(0u64);
        let mut total = 0u64;
        for &(_, count) in &positions {
            total += count;
            prefix.push(total);
        }
        let records_below = |bound: u32| positions.partition_point(|&(position, _)| position < bound);

        let windows: Vec<DensityWindow> = self
            .window_starts(genome_length)?
            .map(|start| {
                let end = start + self.window_size;
                let mutation_count = prefix[records_below(end)] - prefix[records_below(start)];
                DensityWindow::new(start, self.window_size, mutation_count)
            })
            .collect();

        debug!(
            "Scanned {} windows (size {}, step {}) over {} bp",
            windows.len(),
            self.window_size,
            self.step_size,
            genome_length
        );

        Ok(windows)
    }

    fn check_genome(&self, genome_length: u32) -> Result<()> {
        if self.window_size > genome_length {
            return Err(HotspotError::WindowExceedsGenome {
                window_size: self.window_size,
                genome_length,
            });
        }
        Ok(())
    }
}

///
/// Convenience wrapper around [`WindowScanner::scan`].
///
pub fn scan(
    mutations: &[MutationRecord],
    genome_length: u32,
    window_size: u32,
    step_size: u32,
) -> Result<Vec<DensityWindow>> {
    WindowScanner::new(window_size, step_size)?.scan(mutations, genome_length)
}
