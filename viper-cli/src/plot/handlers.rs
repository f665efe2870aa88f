use anyhow::{Context, Result};
use clap::ArgMatches;

use viper_io::read_windows;
use viper_plot::{DEFAULT_TITLE, PlotOptions, plot_mutation_density};

pub fn run_plot(matches: &ArgMatches) -> Result<()> {
    let density_path = matches
        .get_one::<String>("density")
        .expect("Density table path is required");
    let output = matches
        .get_one::<String>("output")
        .expect("Output path is required");

    let density = read_windows(density_path)
        .with_context(|| format!("Failed to read density table: {}", density_path))?;
    let hotspots = match matches.get_one::<String>("hotspots") {
        Some(path) => read_windows(path)
            .with_context(|| format!("Failed to read hotspot table: {}", path))?,
        None => Vec::new(),
    };

    let options = PlotOptions {
        title: matches
            .get_one::<String>("title")
            .cloned()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        genome_length: matches.get_one::<u32>("genome-length").copied(),
        ..PlotOptions::default()
    };

    plot_mutation_density(&density, &hotspots, &options, output)
        .with_context(|| format!("Failed to save plot: {}", output))?;

    Ok(())
}
