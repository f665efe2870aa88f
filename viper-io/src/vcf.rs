//! Mutation counts from a VCF file.

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use log::{debug, info};

use viper_core::MutationRecord;
use viper_core::utils::get_dynamic_reader;

use crate::error::{Result, ViperIoError};

/// Minimum number of tab-separated columns of a VCF data line.
const VCF_FIXED_COLUMNS: usize = 8;

///
/// Load per-position mutation counts from a VCF (or gzip'd VCF) file.
///
/// Every record surviving the QUAL filter counts as one mutation at its
/// position. POS is converted from 1-based to 0-based. Records with unknown
/// QUAL (`.`) are always kept.
///
/// # Arguments
/// - path: path to the `.vcf` or `.vcf.gz` file
/// - min_qual: records with a QUAL below this value are skipped
pub fn read_mutations_from_vcf<P: AsRef<Path>>(path: P, min_qual: f64) -> Result<Vec<MutationRecord>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;
    let mutations = parse_mutations(reader, min_qual)?;

    info!(
        "Loaded {} mutated positions from {}",
        mutations.len(),
        path.display()
    );

    Ok(mutations)
}

///
/// Parse VCF text from any buffered reader. Output is sorted by position.
///
pub fn parse_mutations<R: BufRead>(reader: R, min_qual: f64) -> Result<Vec<MutationRecord>> {
    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    let mut low_quality = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = idx + 1;

        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < VCF_FIXED_COLUMNS {
            return Err(ViperIoError::MalformedVcfLine {
                line: line_num,
                reason: format!(
                    "expected at least {} columns, found {}",
                    VCF_FIXED_COLUMNS,
                    fields.len()
                ),
            });
        }

        let pos: u32 = fields[1].parse().map_err(|_| ViperIoError::MalformedVcfLine {
            line: line_num,
            reason: format!("invalid POS '{}'", fields[1]),
        })?;
        if pos == 0 {
            return Err(ViperIoError::MalformedVcfLine {
                line: line_num,
                reason: "POS must be 1-based".to_string(),
            });
        }

        let qual = match fields[5] {
            "." => None,
            q => Some(q.parse::<f64>().map_err(|_| ViperIoError::MalformedVcfLine {
                line: line_num,
                reason: format!("invalid QUAL '{}'", q),
            })?),
        };
        if let Some(q) = qual {
            if q < min_qual {
                low_quality += 1;
                continue;
            }
        }

        *counts.entry(pos - 1).or_insert(0) += 1;
    }

    if low_quality > 0 {
        debug!("Skipped {} records with QUAL below {}", low_quality, min_qual);
    }

    Ok(counts
        .into_iter()
        .map(|(position, count)| MutationRecord::new(position, count))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data")
            .join(file_name)
    }

    #[rstest]
    #[case("mutations.vcf")]
    #[case("mutations.vcf.gz")]
    fn test_read_mutations_from_vcf(#[case] file_name: &str) {
        let mutations = read_mutations_from_vcf(get_test_path(file_name), 20.0).unwrap();
        assert_eq!(
            mutations,
            vec![
                MutationRecord::new(0, 1),
                MutationRecord::new(4, 2),
                MutationRecord::new(9, 1),
                MutationRecord::new(11, 1),
            ]
        );
    }

    #[rstest]
    fn test_min_qual_zero_keeps_everything() {
        let mutations = read_mutations_from_vcf(get_test_path("mutations.vcf"), 0.0).unwrap();
        let total: u64 = mutations.iter().map(|m| m.count).sum();
        assert_eq!(total, 6);
    }

    #[rstest]
    fn test_header_only_file_is_empty() {
        let vcf = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n";
        let mutations = parse_mutations(Cursor::new(vcf), 20.0).unwrap();
        assert!(mutations.is_empty());
    }

    #[rstest]
    #[case("chr\t12\t.\tA\n", 1)]
    #[case("chr\tabc\t.\tA\tT\t.\tPASS\t.\n", 1)]
    #[case("chr\t0\t.\tA\tT\t.\tPASS\t.\n", 1)]
    #[case("#header\nchr\t3\t.\tA\tT\thigh\tPASS\t.\n", 2)]
    fn test_malformed_lines(#[case] vcf: &str, #[case] expected_line: usize) {
        let result = parse_mutations(Cursor::new(vcf), 20.0);
        match result {
            Err(ViperIoError::MalformedVcfLine { line, .. }) => assert_eq!(line, expected_line),
            other => panic!("expected a malformed line error, got {:?}", other),
        }
    }

    #[rstest]
    fn test_missing_file() {
        let result = read_mutations_from_vcf(get_test_path("missing.vcf"), 20.0);
        assert!(matches!(result, Err(ViperIoError::Open(_))));
    }
}
