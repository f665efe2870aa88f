//! Reference sequences from FASTA files.

use std::path::Path;

use bio::io::fasta;
use log::info;

use viper_core::utils::get_dynamic_reader;

use crate::error::{Result, ViperIoError};

/// One FASTA record with its sequence upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

impl FastaRecord {
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

impl From<fasta::Record> for FastaRecord {
    fn from(record: fasta::Record) -> Self {
        FastaRecord {
            id: record.id().to_string(),
            seq: record.seq().to_ascii_uppercase(),
        }
    }
}

fn open_fasta(path: &Path) -> Result<fasta::Reader<std::io::BufReader<impl std::io::Read>>> {
    let reader = get_dynamic_reader(path)?;
    Ok(fasta::Reader::new(reader))
}

///
/// Read every record of a FASTA (or gzip'd FASTA) file.
///
pub fn read_fasta_records<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>> {
    open_fasta(path.as_ref())?
        .records()
        .map(|record| {
            record
                .map(FastaRecord::from)
                .map_err(|e| ViperIoError::FastaParse(e.to_string()))
        })
        .collect()
}

///
/// Read only the first record of a FASTA file.
///
pub fn read_first_fasta_record<P: AsRef<Path>>(path: P) -> Result<FastaRecord> {
    let path = path.as_ref();
    match open_fasta(path)?.records().next() {
        Some(Ok(record)) => Ok(FastaRecord::from(record)),
        Some(Err(e)) => Err(ViperIoError::FastaParse(e.to_string())),
        None => Err(ViperIoError::EmptyFasta(path.display().to_string())),
    }
}

///
/// Convert a sequence length into the `u32` coordinate space.
///
pub fn coordinate_length(record: &FastaRecord) -> Result<u32> {
    u32::try_from(record.len()).map_err(|_| ViperIoError::SequenceTooLong {
        id: record.id.clone(),
        length: record.len(),
        max: u32::MAX,
    })
}

///
/// Genome length of the first sequence in a FASTA file.
///
pub fn genome_length_from_fasta<P: AsRef<Path>>(path: P) -> Result<u32> {
    let path = path.as_ref();
    let record = read_first_fasta_record(path)?;
    let length = coordinate_length(&record)?;

    info!("Reference {} is {} bp long", record.id, length);

    Ok(length)
}
