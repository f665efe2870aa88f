use anyhow::{Context, Result};
use clap::ArgMatches;

use viper_io::vcf_from_alignment;

pub fn run_vcf(matches: &ArgMatches) -> Result<()> {
    let reference = matches
        .get_one::<String>("reference")
        .expect("Reference path is required");
    let alignment = matches
        .get_one::<String>("alignment")
        .expect("Alignment path is required");
    let output = matches
        .get_one::<String>("output")
        .expect("Output path is required");

    vcf_from_alignment(reference, alignment, output)
        .with_context(|| format!("Failed to build VCF from alignment: {}", alignment))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;
    use tempfile::tempdir;

    use crate::vcf::cli::create_vcf_cli;

    #[rstest]
    fn test_run_vcf() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("snps.vcf");
        let output = output.to_string_lossy().into_owned();

        let matches = create_vcf_cli()
            .try_get_matches_from([
                "vcf",
                "--reference",
                "../tests/data/reference.fa",
                "--alignment",
                "../tests/data/aligned.fa",
                "--output",
                output.as_str(),
            ])
            .unwrap();
        run_vcf(&matches).unwrap();

        let mutations = viper_io::read_mutations_from_vcf(&output, 0.0).unwrap();
        assert!(!mutations.is_empty());
    }

    #[rstest]
    fn test_missing_alignment_is_an_error() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("snps.vcf");
        let output = output.to_string_lossy().into_owned();

        let matches = create_vcf_cli()
            .try_get_matches_from([
                "vcf",
                "--reference",
                "../tests/data/reference.fa",
                "--alignment",
                "../tests/data/missing.fa",
                "--output",
                output.as_str(),
            ])
            .unwrap();
        assert!(run_vcf(&matches).is_err());
    }
}
