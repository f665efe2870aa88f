use anyhow::{Context, Result};
use clap::ArgMatches;

use viper_hotspot::{annotate, scan};

use crate::common::{load_inputs, resolve_config, write_table};

pub fn run_scan(matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;
    let (mutations, genome_length) = load_inputs(matches, &config)?;

    let windows = scan(
        &mutations,
        genome_length,
        config.window_size,
        config.step_size,
    )
    .context("Failed to compute density profile")?;
    let profile = annotate(&windows);

    write_table(&profile, matches.get_one::<String>("output"))
}
