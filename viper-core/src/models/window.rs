use std::fmt::{self, Display};

///
/// One fixed-width, half-open window `[start, end)` of a density profile.
///
/// `density_percentile` stays `None` until the profile has been ranked.
///
#[derive(PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DensityWindow {
    pub start: u32,
    pub end: u32,
    #[cfg_attr(feature = "serde", serde(rename = "window_midpoint"))]
    pub midpoint: u32,
    pub mutation_count: u64,
    pub density: f64,
    pub density_percentile: Option<f64>,
}

impl DensityWindow {
    ///
    /// Build an unranked window of `width` bases starting at `start`.
    ///
    pub fn new(start: u32, width: u32, mutation_count: u64) -> Self {
        let end = start + width;
        DensityWindow {
            start,
            end,
            midpoint: start + (end - start) / 2,
            mutation_count,
            density: mutation_count as f64 / width as f64,
            density_percentile: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    /// Half-open membership: `end` itself belongs to the next window.
    pub fn contains(&self, position: u32) -> bool {
        self.start <= position && position < self.end
    }

    pub fn with_percentile(mut self, percentile: f64) -> Self {
        self.density_percentile = Some(percentile);
        self
    }
}

impl Display for DensityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.start, self.end, self.midpoint, self.mutation_count, self.density
        )?;
        if let Some(percentile) = self.density_percentile {
            write!(f, "\t{}", percentile)?;
        }
        Ok(())
    }
}
