use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use log::warn;
use plotsave_dataset::Dataset;

use crate::error::DegenerateRangeError;
use crate::vector::config::DegenerateRangePolicy;
use crate::vector::iter::PlottableIter;

const MIN_EXPANSION: f64 = 0.5;
const RELATIVE_EXPANSION: f64 = 1e-6;

/// A plot axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// The extent of the plotted data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
    /// There is no finite point to plot.
    Empty,
    /// The smallest box containing every finite point.
    Box(BoundingBox),
}

impl Bounds {
    /// Computes the extent of every finite point of every dataset.
    pub fn of(datasets: &[Dataset]) -> Bounds {
        let mut points = PlottableIter::new(datasets.iter().flat_map(|dataset| &dataset.data));

        let bounds = match points.next() {
            None => Bounds::Empty,
            Some(first) => {
                let start = BoundingBox {
                    x_min: first.x,
                    x_max: first.x,
                    y_min: first.y,
                    y_max: first.y,
                };

                let bounding_box = points.by_ref().fold(start, |bounding_box, datum| BoundingBox {
                    x_min: bounding_box.x_min.min(datum.x),
                    x_max: bounding_box.x_max.max(datum.x),
                    y_min: bounding_box.y_min.min(datum.y),
                    y_max: bounding_box.y_max.max(datum.y),
                });

                Bounds::Box(bounding_box)
            }
        };

        if points.skipped() > 0 {
            warn!(
                "{} samples with non-finite coordinates are left out of the rendering",
                points.skipped()
            );
        }

        bounds
    }
}

/// An axis-aligned box in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// The smallest x coordinate.
    pub x_min: f64,
    /// The largest x coordinate.
    pub x_max: f64,
    /// The smallest y coordinate.
    pub y_min: f64,
    /// The largest y coordinate.
    pub y_max: f64,
}

impl BoundingBox {
    /// Makes sure both axes have extent, applying `policy` to those without.
    pub fn resolve(self, policy: DegenerateRangePolicy) -> Result<BoundingBox, DegenerateRangeError> {
        let (x_min, x_max) = resolve_axis(Axis::X, self.x_min, self.x_max, policy)?;
        let (y_min, y_max) = resolve_axis(Axis::Y, self.y_min, self.y_max, policy)?;

        Ok(BoundingBox {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }
}

fn resolve_axis(
    axis: Axis,
    min: f64,
    max: f64,
    policy: DegenerateRangePolicy,
) -> Result<(f64, f64), DegenerateRangeError> {
    if min < max {
        return Ok((min, max));
    }

    match policy {
        DegenerateRangePolicy::Reject => Err(DegenerateRangeError { axis, value: min }),
        DegenerateRangePolicy::Expand => {
            let expansion = (min.abs() * RELATIVE_EXPANSION).max(MIN_EXPANSION);
            warn!("every point has {axis} = {min}; widening the {axis} axis by {expansion} on each side");

            // Widening stops at the largest finite values.
            let low = (min - expansion).max(f64::MIN);
            let high = (max + expansion).min(f64::MAX);
            Ok((low, high))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use plotsave_dataset::Datum;
    use plotsave_dataset::Time;

    fn dataset(points: &[(f64, f64)]) -> Dataset {
        let data = points
            .iter()
            .map(|&(x, y)| Datum::new(x, y, y, Time::default()))
            .collect();
        Dataset::new(None, data)
    }

    #[test]
    fn bounds_span_every_dataset() {
        let datasets = [
            dataset(&[(1.0, 5.0), (2.0, -1.0)]),
            dataset(&[]),
            dataset(&[(-3.0, 0.0), (0.5, 8.0)]),
        ];

        assert_eq!(
            Bounds::of(&datasets),
            Bounds::Box(BoundingBox {
                x_min: -3.0,
                x_max: 2.0,
                y_min: -1.0,
                y_max: 8.0
            })
        );
    }

    #[test]
    fn non_finite_points_are_ignored() {
        let datasets = [dataset(&[
            (f64::NAN, 100.0),
            (1.0, 1.0),
            (2.0, f64::INFINITY),
            (3.0, 2.0),
        ])];

        assert_eq!(
            Bounds::of(&datasets),
            Bounds::Box(BoundingBox {
                x_min: 1.0,
                x_max: 3.0,
                y_min: 1.0,
                y_max: 2.0
            })
        );
    }

    #[test]
    fn no_finite_points_is_empty() {
        assert_eq!(Bounds::of(&[]), Bounds::Empty);
        assert_eq!(Bounds::of(&[dataset(&[])]), Bounds::Empty);
        assert_eq!(
            Bounds::of(&[dataset(&[(f64::NAN, f64::NAN), (f64::INFINITY, 0.0)])]),
            Bounds::Empty
        );
    }

    #[test]
    fn reject_zero_width() {
        let bounding_box = BoundingBox {
            x_min: 4.0,
            x_max: 4.0,
            y_min: 0.0,
            y_max: 1.0,
        };

        assert_eq!(
            bounding_box.resolve(DegenerateRangePolicy::Reject),
            Err(DegenerateRangeError {
                axis: Axis::X,
                value: 4.0
            })
        );
    }

    #[test]
    fn reject_zero_height() {
        let bounding_box = BoundingBox {
            x_min: 0.0,
            x_max: 1.0,
            y_min: -2.0,
            y_max: -2.0,
        };

        assert_eq!(
            bounding_box.resolve(DegenerateRangePolicy::Reject),
            Err(DegenerateRangeError {
                axis: Axis::Y,
                value: -2.0
            })
        );
    }

    #[test]
    fn expand_constant_axis() {
        let bounding_box = BoundingBox {
            x_min: 4.0,
            x_max: 4.0,
            y_min: 0.0,
            y_max: 1.0,
        };

        assert_eq!(
            bounding_box.resolve(DegenerateRangePolicy::Expand),
            Ok(BoundingBox {
                x_min: 3.5,
                x_max: 4.5,
                y_min: 0.0,
                y_max: 1.0
            })
        );
    }

    #[test]
    fn expand_large_constant_keeps_extent() {
        let bounding_box = BoundingBox {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 1e17,
            y_max: 1e17,
        };

        let resolved = bounding_box.resolve(DegenerateRangePolicy::Expand);

        assert!(resolved.is_ok_and(|resolved| resolved.y_min < resolved.y_max));
    }

    #[test]
    fn expand_stays_finite_at_the_extremes() {
        for value in [f64::MAX, f64::MIN] {
            let bounding_box = BoundingBox {
                x_min: value,
                x_max: value,
                y_min: 0.0,
                y_max: 1.0,
            };

            let resolved = bounding_box.resolve(DegenerateRangePolicy::Expand);

            assert!(
                resolved.is_ok_and(|resolved| resolved.x_min.is_finite()
                    && resolved.x_max.is_finite()
                    && resolved.x_min < resolved.x_max),
                "x = {value}"
            );
        }
    }
}
