use crate::vector::bounds::BoundingBox;
use crate::vector::config::RenderConfig;
use crate::vector::element::Anchor;
use crate::vector::element::Element;
use crate::vector::element::Line;
use crate::vector::element::Text;
use crate::vector::scale::interpolate;

const Y_LABEL_X: f64 = 15.0;
const X_LABEL_OFFSET: f64 = 5.0;
const TICK_LABEL_GAP: f64 = 2.0;

/// The axis lines, axis labels, tick marks and tick labels.
///
/// Without `bounds` the tick marks are drawn unlabeled.
pub(super) fn axes(config: &RenderConfig, bounds: Option<&BoundingBox>) -> Vec<Element> {
    let mut elements = Vec::with_capacity(4 + 4 * (config.tick_intervals as usize + 1));

    elements.extend(axis_lines(config));
    elements.extend(x_ticks(config, bounds));
    elements.extend(y_ticks(config, bounds));

    elements
}

fn axis_lines(config: &RenderConfig) -> [Element; 4] {
    let left = config.margin;
    let right = config.width - config.margin;
    let top = config.margin;
    let bottom = config.height - config.margin;
    let middle_y = config.height / 2.0;

    [
        Element::Line(Line {
            from: (left, bottom),
            to: (right, bottom),
        }),
        Element::Line(Line {
            from: (left, top),
            to: (left, bottom),
        }),
        Element::Text(Text {
            position: (config.width / 2.0, config.height - X_LABEL_OFFSET),
            anchor: Anchor::Middle,
            font_size: config.font_size,
            rotation: None,
            content: config.x_axis_label.clone(),
        }),
        Element::Text(Text {
            position: (Y_LABEL_X, middle_y),
            anchor: Anchor::Middle,
            font_size: config.font_size,
            rotation: Some(-90.0),
            content: config.y_axis_label.clone(),
        }),
    ]
}

fn x_ticks(config: &RenderConfig, bounds: Option<&BoundingBox>) -> Vec<Element> {
    let intervals = config.tick_intervals;
    let step = config.drawable_width() / f64::from(intervals);
    let bottom = config.height - config.margin;
    let mut elements = Vec::new();

    for i in 0..=intervals {
        let x = config.margin + f64::from(i) * step;

        elements.push(Element::Line(Line {
            from: (x, bottom),
            to: (x, bottom + config.tick_length),
        }));

        if let Some(bounds) = bounds {
            let value = interpolate(bounds.x_min, bounds.x_max, f64::from(i) / f64::from(intervals));

            elements.push(Element::Text(Text {
                position: (x, bottom + config.tick_length + TICK_LABEL_GAP + config.font_size),
                anchor: Anchor::Middle,
                font_size: config.font_size,
                rotation: None,
                content: format!("{value:.1}"),
            }));
        }
    }

    elements
}

fn y_ticks(config: &RenderConfig, bounds: Option<&BoundingBox>) -> Vec<Element> {
    let intervals = config.tick_intervals;
    let step = config.drawable_height() / f64::from(intervals);
    let left = config.margin;
    let mut elements = Vec::new();

    for i in 0..=intervals {
        let y = config.height - config.margin - f64::from(i) * step;

        elements.push(Element::Line(Line {
            from: (left - config.tick_length, y),
            to: (left, y),
        }));

        if let Some(bounds) = bounds {
            let value = interpolate(bounds.y_min, bounds.y_max, f64::from(i) / f64::from(intervals));

            // Shift by about a third of the font size to center the digits on the tick.
            elements.push(Element::Text(Text {
                position: (left - config.tick_length - TICK_LABEL_GAP, y + config.font_size / 3.0),
                anchor: Anchor::End,
                font_size: config.font_size,
                rotation: None,
                content: format!("{value:.2}"),
            }));
        }
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(elements: &[Element]) -> Vec<String> {
        elements
            .iter()
            .filter_map(|element| match element {
                Element::Text(text) => Some(text.content.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn eleven_labeled_ticks_per_axis() {
        let config = RenderConfig::default();
        let bounds = BoundingBox {
            x_min: 0.0,
            x_max: 10.0,
            y_min: -1.0,
            y_max: 1.0,
        };

        let x_ticks = x_ticks(&config, Some(&bounds));
        let y_ticks = y_ticks(&config, Some(&bounds));

        assert_eq!(x_ticks.len(), 22);
        assert_eq!(y_ticks.len(), 22);
        assert_eq!(
            labels(&x_ticks),
            ["0.0", "1.0", "2.0", "3.0", "4.0", "5.0", "6.0", "7.0", "8.0", "9.0", "10.0"]
        );
        assert_eq!(
            labels(&y_ticks),
            [
                "-1.00", "-0.80", "-0.60", "-0.40", "-0.20", "0.00", "0.20", "0.40", "0.60",
                "0.80", "1.00"
            ]
        );
    }

    #[test]
    fn tick_positions() {
        let config = RenderConfig::default();

        let x_marks: Vec<(f64, f64)> = x_ticks(&config, None)
            .iter()
            .filter_map(|element| match element {
                Element::Line(line) => Some(line.from),
                _ => None,
            })
            .collect();
        let y_marks: Vec<(f64, f64)> = y_ticks(&config, None)
            .iter()
            .filter_map(|element| match element {
                Element::Line(line) => Some(line.to),
                _ => None,
            })
            .collect();

        assert_eq!(x_marks.len(), 11);
        assert_eq!(x_marks[0], (40.0, 460.0));
        assert_eq!(x_marks[5], (250.0, 460.0));
        assert_eq!(x_marks[10], (460.0, 460.0));
        assert_eq!(y_marks[0], (40.0, 460.0));
        assert_eq!(y_marks[10], (40.0, 40.0));
    }

    #[test]
    fn unlabeled_ticks_without_bounds() {
        let elements = axes(&RenderConfig::default(), None);

        assert_eq!(labels(&elements), ["X Axis", "Y Axis"]);
        assert_eq!(elements.len(), 4 + 22);
    }

    #[test]
    fn y_axis_label_is_rotated() {
        let elements = axes(&RenderConfig::default(), None);

        let rotated: Vec<&Text> = elements
            .iter()
            .filter_map(|element| match element {
                Element::Text(text) if text.rotation.is_some() => Some(text),
                _ => None,
            })
            .collect();

        assert_eq!(rotated.len(), 1);
        assert_eq!(rotated[0].content, "Y Axis");
        assert_eq!(rotated[0].position, (15.0, 250.0));
        assert_eq!(rotated[0].rotation, Some(-90.0));
    }
}
