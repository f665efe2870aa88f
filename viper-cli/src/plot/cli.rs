use clap::{Arg, Command, arg, value_parser};

pub const PLOT_CMD: &str = "plot";

pub fn create_plot_cli() -> Command {
    Command::new(PLOT_CMD)
        .author("Viper")
        .about("Plot a density profile CSV, optionally highlighting hotspot windows.")
        .arg(
            arg!(--density <DENSITY>)
                .required(true)
                .help("Density profile CSV written by `scan` or `hotspots --density-output`"),
        )
        .arg(
            arg!(--hotspots <HOTSPOTS>)
                .required(false)
                .help("Hotspot CSV written by `hotspots`"),
        )
        .arg(
            Arg::new("genome-length")
                .long("genome-length")
                .required(false)
                .value_parser(value_parser!(u32))
                .help("Upper bound of the x axis; the last window midpoint when omitted"),
        )
        .arg(arg!(--title <TITLE>).required(false).help("Plot title"))
        .arg(
            arg!(--output <OUTPUT>)
                .required(true)
                .help("Path to output SVG file"),
        )
}
