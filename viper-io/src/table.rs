//! Delimited density and hotspot tables.
//!
//! Columns: `start,end,window_midpoint,mutation_count,density,density_percentile`.
//! One row per window in sequence order; `density_percentile` is left empty
//! for windows that were never ranked.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use viper_core::DensityWindow;
use viper_core::utils::{ensure_parent_dir, get_dynamic_reader};

use crate::error::Result;

pub const TABLE_COLUMNS: [&str; 6] = [
    "start",
    "end",
    "window_midpoint",
    "mutation_count",
    "density",
    "density_percentile",
];

///
/// Write windows as CSV, header included, to any writer.
///
pub fn write_windows_to<W: Write>(writer: W, windows: &[DensityWindow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if windows.is_empty() {
        csv_writer.write_record(TABLE_COLUMNS)?;
    }
    for window in windows {
        csv_writer.serialize(window)?;
    }
    csv_writer.flush()?;
    Ok(())
}

///
/// Write windows as a CSV file, creating parent directories as needed.
///
pub fn write_windows<P: AsRef<Path>>(path: P, windows: &[DensityWindow]) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    let file = File::create(path)?;
    write_windows_to(BufWriter::new(file), windows)?;

    info!("Wrote {} windows to {}", windows.len(), path.display());
    Ok(())
}

///
/// Read a table written by [`write_windows`] (plain or gzip'd).
///
pub fn read_windows<P: AsRef<Path>>(path: P) -> Result<Vec<DensityWindow>> {
    let reader = get_dynamic_reader(path.as_ref())?;
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut windows = Vec::new();
    for row in csv_reader.deserialize() {
        windows.push(row?);
    }
    Ok(windows)
}
