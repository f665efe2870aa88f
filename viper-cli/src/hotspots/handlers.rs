use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;
use serde::Serialize;

use viper_core::DensityWindow;
use viper_core::utils::ensure_parent_dir;
use viper_hotspot::{HotspotConfig, HotspotReport, detect_hotspots};
use viper_io::write_windows;
use viper_plot::{PlotOptions, plot_mutation_density};

use crate::common::{load_inputs, resolve_config, write_table};

#[derive(Serialize, Debug)]
pub struct RunSummary<'a> {
    pub genome_length: u32,
    pub windows: usize,
    pub hotspots: usize,
    pub cutoff: f64,
    pub max_density: f64,
    pub parameters: &'a HotspotConfig,
}

impl<'a> RunSummary<'a> {
    pub fn new(report: &HotspotReport, genome_length: u32, parameters: &'a HotspotConfig) -> Self {
        RunSummary {
            genome_length,
            windows: report.profile.len(),
            hotspots: report.hotspots.len(),
            cutoff: report.cutoff,
            max_density: max_density(&report.profile),
            parameters,
        }
    }
}

fn max_density(windows: &[DensityWindow]) -> f64 {
    windows.iter().map(|w| w.density).fold(0.0, f64::max)
}

fn write_summary(summary: &RunSummary, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, summary)?;
    info!("Run summary saved at {}", path.display());
    Ok(())
}

pub fn run_hotspots(matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;
    let (mutations, genome_length) = load_inputs(matches, &config)?;

    let report = detect_hotspots(&mutations, genome_length, &config)
        .context("Hotspot detection failed")?;

    write_table(&report.hotspots, matches.get_one::<String>("output"))?;

    if let Some(path) = matches.get_one::<String>("density-output") {
        write_windows(path, &report.profile)
            .with_context(|| format!("Failed to write density profile: {}", path))?;
    }

    if let Some(path) = matches.get_one::<String>("plot") {
        let options = PlotOptions {
            genome_length: Some(genome_length),
            ..PlotOptions::default()
        };
        plot_mutation_density(&report.profile, &report.hotspots, &options, path)
            .with_context(|| format!("Failed to save plot: {}", path))?;
    }

    if let Some(path) = matches.get_one::<String>("summary") {
        let summary = RunSummary::new(&report, genome_length, &config);
        write_summary(&summary, Path::new(path))
            .with_context(|| format!("Failed to write summary: {}", path))?;
    }

    Ok(())
}
