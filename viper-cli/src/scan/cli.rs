use clap::{Command, arg};

use crate::common::with_scan_args;

pub const SCAN_CMD: &str = "scan";

pub fn create_scan_cli() -> Command {
    with_scan_args(
        Command::new(SCAN_CMD)
            .author("Viper")
            .about("Compute the sliding-window mutation density profile of a genome."),
    )
    .arg(arg!(--output <OUTPUT>).required(false).help(
        "Path to output CSV with one row per window. Written to stdout when omitted.",
    ))
}
