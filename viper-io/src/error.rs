use std::io;
use thiserror::Error;

/// Error type for viper-io operations.
#[derive(Error, Debug)]
pub enum ViperIoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A file could not be opened for reading.
    #[error(transparent)]
    Open(#[from] anyhow::Error),

    /// A VCF data line could not be interpreted.
    #[error("Malformed VCF line {line}: {reason}")]
    MalformedVcfLine { line: usize, reason: String },

    /// The FASTA file holds no record.
    #[error("No sequence record found in FASTA file: {0}")]
    EmptyFasta(String),

    /// A FASTA record could not be parsed.
    #[error("Error reading FASTA file: {0}")]
    FastaParse(String),

    /// A sequence is longer than the supported coordinate range.
    #[error("Sequence {id} is {length} bp long, longer than the supported {max} bp")]
    SequenceTooLong { id: String, length: usize, max: u32 },

    /// An aligned sequence does not share the reference coordinates.
    #[error("Aligned sequence {id} has length {found}, expected reference length {expected}")]
    AlignmentLengthMismatch {
        id: String,
        expected: usize,
        found: usize,
    },

    /// Reading or writing a CSV table failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for viper-io operations.
pub type Result<T> = std::result::Result<T, ViperIoError>;
