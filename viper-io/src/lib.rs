//! # Input/Output for viper.
//!
//! Readers for the inputs of a hotspot run (variant calls in VCF, the
//! reference genome in FASTA, or a multi-sequence alignment to derive variants
//! from) and the tabular writer/reader for density and hotspot tables.
//!
pub mod alignment;
pub mod error;
pub mod fasta;
pub mod table;
pub mod vcf;

// re-expose core functions
pub use alignment::*;
pub use error::*;
pub use fasta::*;
pub use table::*;
pub use vcf::*;
