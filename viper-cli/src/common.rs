use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, arg, value_parser};
use log::info;

use viper_core::{DensityWindow, MutationRecord};
use viper_hotspot::HotspotConfig;
use viper_io::{genome_length_from_fasta, read_mutations_from_vcf, write_windows, write_windows_to};

///
/// Inputs and window geometry shared by every command that scans a genome.
///
pub fn with_scan_args(cmd: Command) -> Command {
    cmd.arg(
        arg!(--vcf <VCF>)
            .required(true)
            .help("Path to input VCF/VCF.gz file with variant calls"),
    )
    .arg(
        arg!(--fasta <FASTA>)
            .required(true)
            .help("Path to reference FASTA; the first record sets the genome length"),
    )
    .arg(
        Arg::new("window-size")
            .long("window-size")
            .required(false)
            .value_parser(value_parser!(u32))
            .help("Sliding window width in bases [default: 100]"),
    )
    .arg(
        Arg::new("step-size")
            .long("step-size")
            .required(false)
            .value_parser(value_parser!(u32))
            .help("Distance between consecutive window starts [default: 25]"),
    )
    .arg(
        Arg::new("min-qual")
            .long("min-qual")
            .required(false)
            .value_parser(value_parser!(f64))
            .help("Skip VCF records whose QUAL is below this value [default: 20]"),
    )
    .arg(
        arg!(--config <CONFIG>)
            .required(false)
            .help("TOML file with run parameters; command line flags take precedence"),
    )
}

fn flag<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Option<T> {
    matches.try_get_one::<T>(id).ok().flatten().cloned()
}

///
/// Build the run configuration: flag > `--config` file > built-in default.
///
pub fn resolve_config(matches: &ArgMatches) -> Result<HotspotConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => HotspotConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => HotspotConfig::default(),
    };

    if let Some(window_size) = flag::<u32>(matches, "window-size") {
        config.window_size = window_size;
    }
    if let Some(step_size) = flag::<u32>(matches, "step-size") {
        config.step_size = step_size;
    }
    if let Some(min_qual) = flag::<f64>(matches, "min-qual") {
        config.min_qual = min_qual;
    }
    if let Some(percentile) = flag::<f64>(matches, "percentile") {
        config.percentile = percentile;
    }
    if let Some(threshold) = flag::<f64>(matches, "threshold") {
        config.density_threshold = Some(threshold);
    }

    config.validate().context("Invalid hotspot parameters")?;
    Ok(config)
}

///
/// Load mutation counts and genome length named by `--vcf` and `--fasta`.
///
pub fn load_inputs(matches: &ArgMatches, config: &HotspotConfig) -> Result<(Vec<MutationRecord>, u32)> {
    let vcf_path = matches.get_one::<String>("vcf").expect("--vcf is required");
    let fasta_path = matches
        .get_one::<String>("fasta")
        .expect("--fasta is required");

    let mutations = read_mutations_from_vcf(vcf_path, config.min_qual)
        .with_context(|| format!("Failed to load VCF file: {}", vcf_path))?;
    let genome_length = genome_length_from_fasta(fasta_path)
        .with_context(|| format!("Failed to load FASTA file: {}", fasta_path))?;

    info!(
        "{} mutated positions on a {} bp genome",
        mutations.len(),
        genome_length
    );

    Ok((mutations, genome_length))
}

///
/// Write a window table to `output`, or to stdout when no path is given.
///
pub fn write_table(windows: &[DensityWindow], output: Option<&String>) -> Result<()> {
    match output {
        Some(path) => write_windows(path, windows)
            .with_context(|| format!("Failed to write table: {}", path)),
        None => write_windows_to(io::stdout().lock(), windows)
            .context("Failed to write table to stdout"),
    }
}
