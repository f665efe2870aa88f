//! Density profile plots.
//!
//! Draws the mutation density of every window against its midpoint, marks the
//! hotspot windows and shades their spans. Output is SVG.

use std::path::Path;

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use viper_core::DensityWindow;

pub const DEFAULT_TITLE: &str = "Viral Mutation Hotspot Detection";

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Nothing to plot: the density profile is empty")]
    EmptyProfile,
    #[error("Plotting failed: {0}")]
    Drawing(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// x axis upper bound; the largest window midpoint when absent
    pub genome_length: Option<u32>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            title: DEFAULT_TITLE.to_string(),
            width: 1200,
            height: 400,
            genome_length: None,
        }
    }
}

fn axis_limits(density: &[DensityWindow], options: &PlotOptions) -> (u32, f64) {
    let x_max = options
        .genome_length
        .unwrap_or_else(|| density.iter().map(|w| w.midpoint).max().unwrap_or(0))
        .max(1);
    let y_max = density.iter().map(|w| w.density).fold(1.0, f64::max) * 1.1;
    (x_max, y_max)
}

fn draw(
    root: DrawingArea<SVGBackend, Shift>,
    density: &[DensityWindow],
    hotspots: &[DensityWindow],
    options: &PlotOptions,
) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    root.fill(&WHITE)?;
    let (x_max, y_max) = axis_limits(density, options);

    let mut chart = ChartBuilder::on(&root)
        .caption(&options.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0u32..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Genome Position")
        .y_desc("Mutation Density")
        .draw()?;

    // shaded hotspot spans sit underneath the profile
    chart.draw_series(hotspots.iter().map(|w| {
        Rectangle::new([(w.start, 0.0), (w.end, y_max)], RED.mix(0.2).filled())
    }))?;

    chart
        .draw_series(LineSeries::new(
            density.iter().map(|w| (w.midpoint, w.density)),
            BLUE.stroke_width(2),
        ))?
        .label("Mutation Density")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    if !hotspots.is_empty() {
        chart
            .draw_series(
                hotspots
                    .iter()
                    .map(|w| Circle::new((w.midpoint, w.density), 4, RED.filled())),
            )?
            .label("Hotspots")
            .legend(|(x, y)| Circle::new((x + 10, y), 4, RED.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

///
/// Render the plot into an SVG document held in memory.
///
pub fn render_svg(
    density: &[DensityWindow],
    hotspots: &[DensityWindow],
    options: &PlotOptions,
) -> Result<String> {
    if density.is_empty() {
        return Err(PlotError::EmptyProfile);
    }

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height))
            .into_drawing_area();
        draw(root, density, hotspots, options).map_err(|e| PlotError::Drawing(e.to_string()))?;
    }
    Ok(svg)
}

///
/// Plot the density profile with hotspots highlighted and save it as SVG.
///
/// # Arguments
/// - density: full density profile
/// - hotspots: selected windows, may be empty
/// - options: title, size and x axis extent
/// - path: output `.svg` file
pub fn plot_mutation_density<P: AsRef<Path>>(
    density: &[DensityWindow],
    hotspots: &[DensityWindow],
    options: &PlotOptions,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let svg = render_svg(density, hotspots, options)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, svg)?;

    info!("Hotspot plot saved at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn density() -> Vec<DensityWindow> {
        [1, 0, 3, 6, 2, 0]
            .iter()
            .enumerate()
            .map(|(i, &c)| DensityWindow::new(i as u32 * 5, 10, c))
            .collect()
    }

    #[rstest]
    fn test_axis_limits(density: Vec<DensityWindow>) {
        let (x_max, y_max) = axis_limits(&density, &PlotOptions::default());
        assert_eq!(x_max, 30);
        assert!((y_max - 1.1).abs() < 1e-12);

        let options = PlotOptions {
            genome_length: Some(40),
            ..PlotOptions::default()
        };
        assert_eq!(axis_limits(&density, &options).0, 40);

        let dense = vec![DensityWindow::new(0, 2, 4)];
        assert!((axis_limits(&dense, &options).1 - 2.2).abs() < 1e-12);
    }

    #[rstest]
    fn test_render_svg(density: Vec<DensityWindow>) {
        let hotspots = vec![density[3].clone()];
        let svg = render_svg(&density, &hotspots, &PlotOptions::default()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(DEFAULT_TITLE));
    }

    #[rstest]
    fn test_empty_profile() {
        let result = render_svg(&[], &[], &PlotOptions::default());
        assert!(matches!(result, Err(PlotError::EmptyProfile)));
    }

    #[rstest]
    fn test_plot_to_file(density: Vec<DensityWindow>) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("plots/hotspots.svg");

        plot_mutation_density(&density, &[], &PlotOptions::default(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
        assert!(written.contains("Mutation Density"));
    }
}
