use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HotspotError {
    #[error("No mutations to analyze: the mutation collection is empty")]
    EmptyInput,

    #[error("window_size ({window_size}) cannot exceed genome_length ({genome_length})")]
    WindowExceedsGenome { window_size: u32, genome_length: u32 },

    #[error("window_size must be greater than zero")]
    ZeroWindowSize,

    #[error("step_size must be greater than zero")]
    ZeroStepSize,

    #[error("percentile ({0}) must lie within [0, 100]")]
    InvalidPercentile(f64),

    #[error("density_threshold ({0}) is not a number")]
    InvalidThreshold(f64),

    #[error("Cannot compute a percentile cutoff over an empty density profile")]
    EmptyProfile,
}

impl HotspotError {
    /// True for every error raised because window_size, step_size and
    /// genome_length do not describe at least one full window.
    pub fn is_window_configuration(&self) -> bool {
        matches!(
            self,
            HotspotError::WindowExceedsGenome { .. }
                | HotspotError::ZeroWindowSize
                | HotspotError::ZeroStepSize
        )
    }
}

pub type Result<T> = std::result::Result<T, HotspotError>;
