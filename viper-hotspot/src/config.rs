use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use viper_core::Result;

use crate::scanner::WindowScanner;
use crate::selection::{CutoffPolicy, DEFAULT_PERCENTILE};

pub const DEFAULT_WINDOW_SIZE: u32 = 100;
pub const DEFAULT_STEP_SIZE: u32 = 25;
pub const DEFAULT_MIN_QUAL: f64 = 20.0;

///
/// Parameters of one hotspot run. Every key is optional in the TOML file.
///
/// ```toml
/// window_size = 200
/// step_size = 50
/// percentile = 99
/// min_qual = 30
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HotspotConfig {
    pub window_size: u32,
    pub step_size: u32,
    pub percentile: f64,
    pub density_threshold: Option<f64>,
    pub min_qual: f64,
}

impl Default for HotspotConfig {
    fn default() -> Self {
        HotspotConfig {
            window_size: DEFAULT_WINDOW_SIZE,
            step_size: DEFAULT_STEP_SIZE,
            percentile: DEFAULT_PERCENTILE,
            density_threshold: None,
            min_qual: DEFAULT_MIN_QUAL,
        }
    }
}

#[derive(Error, Debug)]
pub enum HotspotConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl HotspotConfig {
    pub fn scanner(&self) -> Result<WindowScanner> {
        WindowScanner::new(self.window_size, self.step_size)
    }

    pub fn cutoff_policy(&self) -> CutoffPolicy {
        CutoffPolicy::new(self.density_threshold, self.percentile)
    }

    ///
    /// Check everything that can be checked without a genome length.
    ///
    pub fn validate(&self) -> Result<()> {
        self.scanner()?;
        self.cutoff_policy().validate()
    }
}

impl TryFrom<&Path> for HotspotConfig {
    type Error = HotspotConfigError;

    fn try_from(path: &Path) -> std::result::Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}
