//! The vector-graphic renderer.
//!
//! All datasets share one coordinate transform, derived from the bounding box
//! of every finite point. The document lists, in this order, the axes and
//! their labels, the tick marks and tick labels, and one polyline per dataset.

mod axes;
mod bounds;
mod config;
mod document;
mod element;
mod iter;
mod sample;
mod scale;

use log::debug;
use plotsave_dataset::Dataset;

use crate::error::Result;
use crate::vector::element::Element;
use crate::vector::element::Polyline;

pub use bounds::Axis;
pub use bounds::BoundingBox;
pub use bounds::Bounds;
pub use config::DegenerateRangePolicy;
pub use config::MAX_TICK_INTERVALS;
pub use config::RenderConfig;
pub use sample::decimate;
pub use sample::resample_factor;
pub use scale::Transform;

/// Renders datasets into an SVG document.
#[derive(Debug, Clone, Default)]
pub struct VectorRenderer {
    config: RenderConfig,
}

impl VectorRenderer {
    /// Creates a renderer after validating its configuration.
    pub fn new(config: RenderConfig) -> Result<VectorRenderer> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The renderer configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders the datasets.
    ///
    /// Input without a single finite point renders as an empty plot: axes and
    /// unlabeled ticks, no polylines. Input whose points share one coordinate
    /// along an axis is handled by [RenderConfig::degenerate_range].
    pub fn render(&self, datasets: &[Dataset]) -> Result<String> {
        let elements = self.layout(datasets)?;
        let document = document::render(&self.config, &elements)?;

        debug!(
            "rendered {} datasets into {} elements ({} bytes)",
            datasets.len(),
            elements.len(),
            document.len()
        );

        Ok(document)
    }

    fn layout(&self, datasets: &[Dataset]) -> Result<Vec<Element>> {
        let bounding_box = match Bounds::of(datasets) {
            Bounds::Empty => return Ok(axes::axes(&self.config, None)),
            Bounds::Box(bounding_box) => bounding_box.resolve(self.config.degenerate_range)?,
        };

        let transform = Transform::new(bounding_box, &self.config);
        let mut elements = axes::axes(&self.config, Some(&bounding_box));

        for (index, dataset) in datasets.iter().enumerate() {
            if let Some(polyline) = self.polyline(index, dataset, &transform) {
                elements.push(Element::Polyline(polyline));
            }
        }

        Ok(elements)
    }

    fn polyline(&self, index: usize, dataset: &Dataset, transform: &Transform) -> Option<Polyline> {
        let factor = resample_factor(dataset.len(), self.config.max_points);
        if factor > 1 {
            debug!(
                "keeping every {factor}th of {} points of dataset {index}",
                dataset.len()
            );
        }

        let points: Vec<(f64, f64)> = decimate(&dataset.data, self.config.max_points)
            .filter(|datum| datum.is_plottable())
            .map(|datum| transform.map(datum.x, datum.y))
            .collect();

        if points.is_empty() {
            return None;
        }

        Some(Polyline {
            points,
            stroke: self.config.color(index).to_owned(),
            stroke_width: self.config.stroke_width,
            stroke_opacity: self.config.stroke_opacity,
            label: dataset.label.clone(),
        })
    }
}

/// Renders datasets with the default [RenderConfig].
pub fn render_vector(datasets: &[Dataset]) -> Result<String> {
    VectorRenderer::default().render(datasets)
}

#[cfg(test)]
mod tests {
    use super::*;

    use plotsave_dataset::Datum;
    use plotsave_dataset::Time;

    use crate::error::ConfigurationError;
    use crate::error::DegenerateRangeError;
    use crate::error::ExportError;

    fn dataset(points: &[(f64, f64)]) -> Dataset {
        let data = points
            .iter()
            .map(|&(x, y)| Datum::new(x, y, y, Time::default()))
            .collect();
        Dataset::labeled("/topic", data)
    }

    fn polylines(elements: &[Element]) -> Vec<&Polyline> {
        elements
            .iter()
            .filter_map(|element| match element {
                Element::Polyline(polyline) => Some(polyline),
                _ => None,
            })
            .collect()
    }

    fn is_finite_document(document: &str) -> bool {
        !document.contains("NaN") && !document.contains("inf")
    }

    #[test]
    fn empty_input_renders_an_empty_plot() -> Result<()> {
        for datasets in [Vec::new(), vec![Dataset::default()], vec![dataset(&[(f64::NAN, 1.0)])]] {
            let document = render_vector(&datasets)?;

            assert!(document.starts_with("<?xml"));
            assert!(document.contains("<svg xmlns=\"http://www.w3.org/2000/svg\""));
            assert!(document.trim_end().ends_with("</svg>"));
            assert!(!document.contains("<polyline"));
            assert_eq!(document.matches("<line").count(), 2 + 22);
            assert!(is_finite_document(&document));
        }

        Ok(())
    }

    #[test]
    fn one_polyline_per_dataset_in_order() -> Result<()> {
        let datasets = vec![
            dataset(&[(0.0, 0.0), (10.0, 10.0)]),
            Dataset::new(None, Vec::new()),
            dataset(&[(5.0, 2.0), (6.0, 3.0), (7.0, 1.0)]),
        ];
        let renderer = VectorRenderer::default();

        let elements = renderer.layout(&datasets)?;
        let polylines = polylines(&elements);

        assert_eq!(polylines.len(), 2);
        assert_eq!(polylines[0].points, vec![(40.0, 460.0), (460.0, 40.0)]);
        assert_eq!(polylines[0].stroke, "#1f77b4");
        assert_eq!(polylines[1].points.len(), 3);
        assert_eq!(polylines[1].stroke, "#2ca02c");

        let last_axis_element = elements
            .iter()
            .rposition(|element| !matches!(element, Element::Polyline(_)));
        assert_eq!(last_axis_element, Some(elements.len() - 3));

        Ok(())
    }

    #[test]
    fn corners_of_the_bounding_box() -> Result<()> {
        let datasets = vec![
            dataset(&[(-2.0, 7.0), (1.0, 3.0)]),
            dataset(&[(3.5, 100.0), (0.0, -50.0)]),
        ];

        let elements = VectorRenderer::default().layout(&datasets)?;
        let polylines = polylines(&elements);

        assert_eq!(polylines[0].points[0].0, 40.0);
        assert_eq!(polylines[1].points[0], (460.0, 40.0));
        assert_eq!(polylines[1].points[1].1, 460.0);

        Ok(())
    }

    #[test]
    fn long_datasets_are_decimated() -> Result<()> {
        let points: Vec<(f64, f64)> = (0..2500).map(|i| (i as f64, (i as f64).sin())).collect();
        let datasets = vec![dataset(&points)];

        let elements = VectorRenderer::default().layout(&datasets)?;
        let polylines = polylines(&elements);

        assert_eq!(polylines[0].points.len(), 834);
        assert_eq!(polylines[0].points[0].0, 40.0);

        Ok(())
    }

    #[test]
    fn non_finite_points_are_left_out() -> Result<()> {
        let datasets = vec![dataset(&[(0.0, 0.0), (1.0, f64::NAN), (2.0, 2.0)])];

        let document = render_vector(&datasets)?;

        assert!(document.contains("points=\"40,460 460,40\""));
        assert!(is_finite_document(&document));

        Ok(())
    }

    #[test]
    fn subnormal_range_renders_finite_coordinates() -> Result<()> {
        let datasets = vec![dataset(&[(0.0, 0.0), (5e-324, 1.0)])];

        let document = render_vector(&datasets)?;

        assert!(document.contains("points=\"40,460 460,40\""));
        assert!(is_finite_document(&document));

        Ok(())
    }

    #[test]
    fn expanded_extreme_constants_stay_finite() -> Result<()> {
        let renderer = VectorRenderer::new(RenderConfig {
            degenerate_range: DegenerateRangePolicy::Expand,
            ..RenderConfig::default()
        })?;

        for value in [f64::MAX, f64::MIN] {
            let datasets = vec![dataset(&[(value, 0.0), (value, 1.0)])];

            let document = renderer.render(&datasets)?;

            assert!(document.contains("<polyline"), "x = {value}");
            assert!(is_finite_document(&document), "x = {value}");
        }

        Ok(())
    }

    #[test]
    fn constant_x_is_rejected_by_default() {
        let datasets = vec![dataset(&[(3.0, 0.0), (3.0, 1.0), (3.0, 2.0)])];

        let result = render_vector(&datasets);

        assert!(matches!(
            result,
            Err(ExportError::DegenerateRange(DegenerateRangeError {
                axis: Axis::X,
                value: 3.0
            }))
        ));
    }

    #[test]
    fn constant_x_expands_when_configured() -> Result<()> {
        let datasets = vec![dataset(&[(3.0, 0.0), (3.0, 1.0), (3.0, 2.0)])];
        let renderer = VectorRenderer::new(RenderConfig {
            degenerate_range: DegenerateRangePolicy::Expand,
            ..RenderConfig::default()
        })?;

        let document = renderer.render(&datasets)?;

        assert!(document.contains("points=\"250,460 250,250 250,40\""));
        assert!(is_finite_document(&document));

        Ok(())
    }

    #[test]
    fn single_point_expands_on_both_axes() -> Result<()> {
        let renderer = VectorRenderer::new(RenderConfig {
            degenerate_range: DegenerateRangePolicy::Expand,
            ..RenderConfig::default()
        })?;

        let document = renderer.render(&[dataset(&[(1.0, 1.0)])])?;

        assert!(document.contains("points=\"250,250\""));

        Ok(())
    }

    #[test]
    fn small_canvas() -> Result<()> {
        let renderer = VectorRenderer::new(RenderConfig {
            width: 20.0,
            height: 10.0,
            margin: 2.0,
            tick_intervals: 2,
            max_points: 2,
            ..RenderConfig::default()
        })?;
        let datasets = vec![dataset(&[(0.0, 0.0), (1.0, 5.0), (2.0, 2.0), (4.0, 8.0)])];

        let elements = renderer.layout(&datasets)?;
        let polylines = polylines(&elements);

        assert_eq!(polylines[0].points, vec![(2.0, 8.0), (10.0, 6.5)]);
        assert_eq!(
            elements
                .iter()
                .filter(|element| matches!(element, Element::Line(_)))
                .count(),
            2 + 3 + 3
        );

        Ok(())
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = VectorRenderer::new(RenderConfig {
            margin: 300.0,
            ..RenderConfig::default()
        });

        assert!(matches!(
            result,
            Err(ExportError::Configuration(ConfigurationError::InvalidCanvas { .. }))
        ));

        let result = VectorRenderer::new(RenderConfig {
            tick_intervals: u32::MAX,
            ..RenderConfig::default()
        });

        assert!(matches!(
            result,
            Err(ExportError::Configuration(ConfigurationError::TooManyTickIntervals(u32::MAX)))
        ));
    }
}
