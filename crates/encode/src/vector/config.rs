use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigurationError;

/// The largest accepted [RenderConfig::tick_intervals].
pub const MAX_TICK_INTERVALS: u32 = 1000;

/// What to do when every plotted point has the same coordinate along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegenerateRangePolicy {
    /// Fail the export with a [crate::error::DegenerateRangeError].
    #[default]
    Reject,
    /// Widen the axis around the constant so the data draws as a centered line.
    Expand,
}

/// Layout and style of the vector rendering.
///
/// Every field has a default, so partial configurations deserialize:
///
/// ```
/// # use plotsave_encode::RenderConfig;
/// let config = RenderConfig { width: 120.0, height: 80.0, margin: 10.0, ..RenderConfig::default() };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Space between the canvas border and the plot area on every side.
    pub margin: f64,
    /// Length of the tick marks.
    pub tick_length: f64,
    /// Number of intervals between ticks; an axis has one more tick than intervals.
    /// At most [MAX_TICK_INTERVALS].
    pub tick_intervals: u32,
    /// Upper bound of points drawn per dataset.
    pub max_points: usize,
    /// Width of the dataset polylines.
    pub stroke_width: f64,
    /// Opacity of the dataset polylines, from 0 to 1.
    pub stroke_opacity: f64,
    /// Stroke colors, cycled through in dataset order.
    pub palette: Vec<String>,
    /// Font size of the axis and tick labels.
    pub font_size: f64,
    /// Label drawn under the x axis.
    pub x_axis_label: String,
    /// Label drawn beside the y axis.
    pub y_axis_label: String,
    /// Handling of data without extent along an axis.
    pub degenerate_range: DegenerateRangePolicy,
}

impl RenderConfig {
    /// Width of the plot area inside the margins.
    pub fn drawable_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Height of the plot area inside the margins.
    pub fn drawable_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }

    /// Checks that the configuration describes a drawable canvas.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let canvas_is_finite =
            self.width.is_finite() && self.height.is_finite() && self.margin.is_finite();

        if !canvas_is_finite
            || self.margin < 0.0
            || self.drawable_width() <= 0.0
            || self.drawable_height() <= 0.0
        {
            return Err(ConfigurationError::InvalidCanvas {
                width: self.width,
                height: self.height,
                margin: self.margin,
            });
        }

        let non_negative = |value: f64| value.is_finite() && value >= 0.0;

        if !non_negative(self.tick_length) {
            return Err(ConfigurationError::InvalidStyle("tick length"));
        }
        if !non_negative(self.stroke_width) {
            return Err(ConfigurationError::InvalidStyle("stroke width"));
        }
        if !non_negative(self.stroke_opacity) || self.stroke_opacity > 1.0 {
            return Err(ConfigurationError::InvalidStyle("stroke opacity"));
        }
        if !non_negative(self.font_size) {
            return Err(ConfigurationError::InvalidStyle("font size"));
        }
        if self.max_points == 0 {
            return Err(ConfigurationError::ZeroMaxPoints);
        }
        if self.tick_intervals == 0 {
            return Err(ConfigurationError::ZeroTickIntervals);
        }
        if self.tick_intervals > MAX_TICK_INTERVALS {
            return Err(ConfigurationError::TooManyTickIntervals(self.tick_intervals));
        }
        if self.palette.is_empty() {
            return Err(ConfigurationError::EmptyPalette);
        }

        Ok(())
    }

    /// The stroke color of the dataset at `index`.
    pub(crate) fn color(&self, index: usize) -> &str {
        &self.palette[index % self.palette.len()]
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            margin: 40.0,
            tick_length: 5.0,
            tick_intervals: 10,
            max_points: 1000,
            stroke_width: 1.0,
            stroke_opacity: 0.8,
            palette: [
                "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
                "#7f7f7f", "#bcbd22", "#17becf",
            ]
            .map(String::from)
            .to_vec(),
            font_size: 10.0,
            x_axis_label: String::from("X Axis"),
            y_axis_label: String::from("Y Axis"),
            degenerate_range: DegenerateRangePolicy::Reject,
        }
    }
}
