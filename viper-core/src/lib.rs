//! # Core data model for viper.
//!
//! This crate holds the types shared by every other viper crate: the sparse
//! per-position mutation records that come out of a variant file, the dense
//! sliding-window profile computed from them, and the error taxonomy of the
//! hotspot pipeline.
//!
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::{HotspotError, Result};
pub use models::{DensityWindow, MutationRecord};
