use clap::{Arg, Command, arg, value_parser};

use crate::common::with_scan_args;

pub const HOTSPOTS_CMD: &str = "hotspots";

pub fn create_hotspots_cli() -> Command {
    with_scan_args(
        Command::new(HOTSPOTS_CMD)
            .author("Viper")
            .about("Find windows whose mutation density is unusually high.")
            .long_about(
                "Find windows whose mutation density is unusually high. \
                 An explicit --threshold takes precedence over --percentile.",
            ),
    )
    .arg(
        Arg::new("percentile")
            .long("percentile")
            .required(false)
            .value_parser(value_parser!(f64))
            .help("Percentile of window densities used as cutoff, 0-100 [default: 95]"),
    )
    .arg(
        Arg::new("threshold")
            .long("threshold")
            .required(false)
            .value_parser(value_parser!(f64))
            .help("Explicit density cutoff; windows at or above it are hotspots"),
    )
    .arg(
        arg!(--output <OUTPUT>)
            .required(false)
            .help("Path to output CSV of hotspot windows. Written to stdout when omitted."),
    )
    .arg(
        Arg::new("density-output")
            .long("density-output")
            .required(false)
            .help("Also write the full density profile to this CSV"),
    )
    .arg(
        arg!(--plot <SVG>)
            .required(false)
            .help("Save a density plot with hotspots highlighted to this SVG file"),
    )
    .arg(
        arg!(--summary <JSON>)
            .required(false)
            .help("Write a JSON summary of the run to this file"),
    )
}
