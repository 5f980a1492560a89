use crate::vector::bounds::BoundingBox;
use crate::vector::config::RenderConfig;

/// Maps data coordinates onto the canvas.
///
/// The data box fills the area inside the margins and the y axis is flipped,
/// so `(x_min, y_min)` lands on `(margin, height - margin)` and
/// `(x_max, y_max)` on `(width - margin, margin)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    bounds: BoundingBox,
    margin: f64,
    height: f64,
    drawable_width: f64,
    drawable_height: f64,
}

impl Transform {
    /// Creates the transform for a box with extent on both axes.
    pub fn new(bounds: BoundingBox, config: &RenderConfig) -> Transform {
        Self {
            bounds,
            margin: config.margin,
            height: config.height,
            drawable_width: config.drawable_width(),
            drawable_height: config.drawable_height(),
        }
    }

    /// Canvas units per data unit along x.
    pub fn x_scale(&self) -> f64 {
        self.drawable_width / (self.bounds.x_max - self.bounds.x_min)
    }

    /// Canvas units per data unit along y.
    pub fn y_scale(&self) -> f64 {
        self.drawable_height / (self.bounds.y_max - self.bounds.y_min)
    }

    /// The canvas position of a data point.
    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        let px = self.margin + fraction(x, self.bounds.x_min, self.bounds.x_max) * self.drawable_width;
        let py = self.height
            - self.margin
            - fraction(y, self.bounds.y_min, self.bounds.y_max) * self.drawable_height;

        (px, py)
    }
}

// Spans wider than f64::MAX are halved before subtracting.
fn fraction(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;

    if span.is_finite() {
        (value - min) / span
    } else {
        (value * 0.5 - min * 0.5) / (max * 0.5 - min * 0.5)
    }
}

/// The data value at fraction `t` of the way from `min` to `max`, kept
/// within `[min, max]`.
pub(crate) fn interpolate(min: f64, max: f64, t: f64) -> f64 {
    (min * (1.0 - t) + max * t).max(min).min(max)
}
