//! Scatter chart of two columns with fixed axis bounds, rendered to SVG.

use crate::error::{LifesatError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Axis ranges `[x_min, x_max, y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 4]", into = "[f64; 4]")]
pub struct AxisBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisBounds {
    /// # Errors
    ///
    /// [`LifesatError::Config`] unless every bound is finite and each minimum is below
    /// its maximum.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        let all_finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());
        if !all_finite || x_min >= x_max || y_min >= y_max {
            return Err(LifesatError::Config(format!(
                "invalid axis bounds [{x_min}, {x_max}, {y_min}, {y_max}]"
            )));
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Inclusive containment test.
    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

impl TryFrom<[f64; 4]> for AxisBounds {
    type Error = LifesatError;

    fn try_from([x_min, x_max, y_min, y_max]: [f64; 4]) -> Result<Self> {
        Self::new(x_min, x_max, y_min, y_max)
    }
}

impl From<AxisBounds> for [f64; 4] {
    fn from(b: AxisBounds) -> Self {
        [b.x_min, b.x_max, b.y_min, b.y_max]
    }
}

/// Scatter chart settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    pub x_label: String,
    pub y_label: String,
    pub bounds: AxisBounds,
    pub grid: bool,
    pub size: (u32, u32),
}

impl ScatterPlot {
    pub fn new(x_label: impl Into<String>, y_label: impl Into<String>, bounds: AxisBounds) -> Self {
        Self {
            x_label: x_label.into(),
            y_label: y_label.into(),
            bounds,
            grid: true,
            size: (800, 600),
        }
    }

    /// Writes the chart to an SVG file and returns how many points fell inside the bounds.
    pub fn render_svg<P: AsRef<Path>>(&self, path: P, points: &[(f64, f64)]) -> Result<usize> {
        let root = SVGBackend::new(path.as_ref(), self.size).into_drawing_area();
        self.draw(&root, points)
    }

    /// Renders the chart into an in-memory SVG document.
    pub fn render_svg_string(&self, points: &[(f64, f64)]) -> Result<String> {
        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, self.size).into_drawing_area();
            self.draw(&root, points)?;
        }
        Ok(buffer)
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        points: &[(f64, f64)],
    ) -> Result<usize> {
        root.fill(&WHITE).map_err(plot_error)?;

        let b = self.bounds;
        let mut chart = ChartBuilder::on(root)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(b.x_min..b.x_max, b.y_min..b.y_max)
            .map_err(plot_error)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str());
        if !self.grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(plot_error)?;

        // Points outside the axis window are clipped.
        let visible: Vec<(f64, f64)> = points
            .iter()
            .copied()
            .filter(|&p| b.contains(p))
            .collect();
        chart
            .draw_series(
                visible
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
            )
            .map_err(plot_error)?;

        root.present().map_err(plot_error)?;
        Ok(visible.len())
    }
}

fn plot_error<E: std::fmt::Display>(err: E) -> LifesatError {
    LifesatError::Plot(err.to_string())
}
