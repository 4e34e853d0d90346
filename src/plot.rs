//! Rendering of the regression fit
//!
//! Draws the data generating function as a line, the noisy observations and
//! the predictions as points, and writes the chart as an SVG file.

use crate::core::{KrrError, Result};
use log::info;
use plotters::prelude::*;
use std::path::Path;

/// Chart settings
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x_label: String,
    pub y_label: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Kernel Ridge Regression with Polynomial Kernel".to_string(),
            width: 800,
            height: 600,
            x_label: "input".to_string(),
            y_label: "output".to_string(),
        }
    }
}

/// Series shown on the chart; all slices share the length of `inputs`
#[derive(Debug, Clone, Copy)]
pub struct FitSeries<'a> {
    pub inputs: &'a [f64],
    pub true_targets: &'a [f64],
    pub observations: &'a [f64],
    pub predictions: &'a [f64],
}

impl FitSeries<'_> {
    fn validate(&self) -> Result<()> {
        let n = self.inputs.len();
        if n == 0 {
            return Err(KrrError::EmptyDataset);
        }
        for len in [
            self.true_targets.len(),
            self.observations.len(),
            self.predictions.len(),
        ] {
            if len != n {
                return Err(KrrError::DimensionMismatch {
                    expected: n,
                    actual: len,
                });
            }
        }
        Ok(())
    }

    /// Padded (min, max) over every y value
    fn y_range(&self) -> (f64, f64) {
        let (lo, hi) = self
            .true_targets
            .iter()
            .chain(self.observations)
            .chain(self.predictions)
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        pad_range(lo, hi)
    }

    fn x_range(&self) -> (f64, f64) {
        let (lo, hi) = self
            .inputs
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        pad_range(lo, hi)
    }
}

fn pad_range(lo: f64, hi: f64) -> (f64, f64) {
    if !(lo.is_finite() && hi.is_finite()) {
        return (-1.0, 1.0);
    }
    let pad = ((hi - lo) * 0.05).max(1e-3);
    (lo - pad, hi + pad)
}

fn plot_err<E: std::fmt::Display>(e: E) -> KrrError {
    KrrError::PlotError(e.to_string())
}

/// Render the fit to an SVG file at `path`
pub fn render_fit<P: AsRef<Path>>(path: P, series: &FitSeries<'_>, config: &PlotConfig) -> Result<()> {
    series.validate()?;
    let path = path.as_ref();

    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let (x_lo, x_hi) = series.x_range();
    let (y_lo, y_hi) = series.y_range();

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            series
                .inputs
                .iter()
                .copied()
                .zip(series.true_targets.iter().copied()),
            &RED,
        ))
        .map_err(plot_err)?
        .label("data generating function")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(
            series
                .inputs
                .iter()
                .zip(series.observations)
                .map(|(&x, &t)| Circle::new((x, t), 3, BLUE.filled())),
        )
        .map_err(plot_err)?
        .label("training observations")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLUE.filled()));

    chart
        .draw_series(
            series
                .inputs
                .iter()
                .zip(series.predictions)
                .map(|(&x, &y)| Circle::new((x, y), 3, CYAN.filled())),
        )
        .map_err(plot_err)?
        .label("predictions")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, CYAN.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    info!("Plot written to {}", path.display());
    Ok(())
}
