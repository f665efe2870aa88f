mod common;
mod hotspots;
mod plot;
mod scan;
mod vcf;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "viper";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Detect mutation hotspots along a viral genome from variant calls or aligned sequences.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug messages (RUST_LOG takes precedence)"),
        )
        .subcommand(scan::cli::create_scan_cli())
        .subcommand(hotspots::cli::create_hotspots_cli())
        .subcommand(vcf::cli::create_vcf_cli())
        .subcommand(plot::cli::create_plot_cli())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        //
        // DENSITY PROFILE
        //
        Some((scan::cli::SCAN_CMD, matches)) => {
            scan::handlers::run_scan(matches)?;
        }

        //
        // HOTSPOT DETECTION
        //
        Some((hotspots::cli::HOTSPOTS_CMD, matches)) => {
            hotspots::handlers::run_hotspots(matches)?;
        }

        //
        // ALIGNMENT TO VCF
        //
        Some((vcf::cli::VCF_CMD, matches)) => {
            vcf::handlers::run_vcf(matches)?;
        }

        //
        // PLOTTING
        //
        Some((plot::cli::PLOT_CMD, matches)) => {
            plot::handlers::run_plot(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
