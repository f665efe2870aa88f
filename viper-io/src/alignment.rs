//! SNP calling from sequences aligned to a reference, with VCF output.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use indicatif::ProgressBar;
use log::{info, warn};

use viper_core::MutationRecord;
use viper_core::utils::ensure_parent_dir;

use crate::error::{Result, ViperIoError};
use crate::fasta::{FastaRecord, coordinate_length, read_fasta_records, read_first_fasta_record};

pub const VCF_SOURCE: &str = "VIPER_vcf_generator";

fn is_nucleotide(base: u8) -> bool {
    matches!(base, b'A' | b'C' | b'G' | b'T')
}

///
/// A reference position where at least one aligned sample carries a
/// different nucleotide.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnpSite {
    /// 0-based reference position
    pub position: u32,
    pub reference: u8,
    pub alternate: u8,
    /// one entry per aligned sample, `true` for the ALT allele
    pub genotypes: Vec<bool>,
}

impl SnpSite {
    pub fn alt_samples(&self) -> usize {
        self.genotypes.iter().filter(|&&g| g).count()
    }

    ///
    /// VCF data line for this site.
    ///
    pub fn as_vcf_line(&self, chrom: &str) -> String {
        let genotypes: Vec<&str> = self
            .genotypes
            .iter()
            .map(|&g| if g { "1" } else { "0" })
            .collect();
        format!(
            "{}\t{}\t.\t{}\t{}\t.\tPASS\tNS={}\tGT\t{}",
            chrom,
            self.position + 1,
            self.reference as char,
            self.alternate as char,
            self.genotypes.len(),
            genotypes.join("\t")
        )
    }
}

impl From<&SnpSite> for MutationRecord {
    /// One event per site, the same count a VCF round trip would give.
    fn from(site: &SnpSite) -> Self {
        MutationRecord::new(site.position, 1)
    }
}

///
/// Call SNP sites from sequences aligned to `reference`.
///
/// Reference positions that are not `A`, `C`, `G` or `T` are skipped. A
/// sample carries the ALT allele when its base is a nucleotide different
/// from the reference; gaps and ambiguity codes count as reference. When
/// several ALT bases occur at one position the alphabetically first wins.
///
/// All sequences are expected upper-case, as returned by the FASTA readers.
pub fn call_snps(reference: &FastaRecord, aligned: &[FastaRecord]) -> Result<Vec<SnpSite>> {
    for record in aligned {
        if record.len() != reference.len() {
            return Err(ViperIoError::AlignmentLengthMismatch {
                id: record.id.clone(),
                expected: reference.len(),
                found: record.len(),
            });
        }
    }
    coordinate_length(reference)?;

    let bar = ProgressBar::new(reference.len() as u64);
    let mut sites = Vec::new();

    for (pos, &ref_base) in reference.seq.iter().enumerate() {
        bar.inc(1);
        if !is_nucleotide(ref_base) {
            continue;
        }

        let mut alternates = BTreeSet::new();
        let genotypes: Vec<bool> = aligned
            .iter()
            .map(|record| {
                let base = record.seq[pos];
                let is_alt = is_nucleotide(base) && base != ref_base;
                if is_alt {
                    alternates.insert(base);
                }
                is_alt
            })
            .collect();

        let Some(&alternate) = alternates.first() else {
            continue;
        };
        if alternates.len() > 1 {
            warn!(
                "Multi-allelic position {} ({}); reporting only ALT {}",
                pos + 1,
                alternates.iter().map(|&b| b as char).collect::<String>(),
                alternate as char
            );
        }

        sites.push(SnpSite {
            position: pos as u32,
            reference: ref_base,
            alternate,
            genotypes,
        });
    }
    bar.finish_and_clear();

    Ok(sites)
}

///
/// Write SNP sites as a VCF 4.2 file body, header included.
///
/// # Arguments
/// - writer: destination
/// - reference_id: used for `##reference` and the CHROM column
/// - samples: sample column names, in genotype order
/// - sites: the sites to write
pub fn write_vcf<W: Write>(
    writer: &mut W,
    reference_id: &str,
    samples: &[&str],
    sites: &[SnpSite],
) -> std::io::Result<()> {
    writeln!(writer, "##fileformat=VCFv4.2")?;
    writeln!(writer, "##fileDate={}", chrono::Local::now().format("%Y%m%d"))?;
    writeln!(writer, "##source={}", VCF_SOURCE)?;
    writeln!(writer, "##reference={}", reference_id)?;
    writeln!(
        writer,
        "##INFO=<ID=NS,Number=1,Type=Integer,Description=\"Number of Samples With Data\">"
    )?;
    writeln!(
        writer,
        "##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">"
    )?;
    writeln!(
        writer,
        "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\t{}",
        samples.join("\t")
    )?;

    for site in sites {
        writeln!(writer, "{}", site.as_vcf_line(reference_id))?;
    }

    Ok(())
}

///
/// Build a VCF of SNPs from a reference FASTA and a multi-FASTA alignment.
///
/// Returns the number of sites written.
pub fn vcf_from_alignment<P: AsRef<Path>, Q: AsRef<Path>, R: AsRef<Path>>(
    reference_path: P,
    aligned_path: Q,
    output_path: R,
) -> Result<usize> {
    let reference = read_first_fasta_record(reference_path)?;
    let aligned = read_fasta_records(aligned_path)?;
    let sites = call_snps(&reference, &aligned)?;

    let output_path = output_path.as_ref();
    ensure_parent_dir(output_path)?;
    let mut writer = BufWriter::new(File::create(output_path)?);

    let samples: Vec<&str> = aligned.iter().map(|r| r.id.as_str()).collect();
    write_vcf(&mut writer, &reference.id, &samples, &sites)?;
    writer.flush()?;

    info!(
        "Wrote {} SNP sites across {} samples to {}",
        sites.len(),
        samples.len(),
        output_path.display()
    );

    Ok(sites.len())
}
