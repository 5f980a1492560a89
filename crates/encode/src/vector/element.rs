use std::borrow::Cow;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::render::OutputStream;
use crate::render::Render;

const AXIS_COLOR: &str = "black";

/// An element of the vector document.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// An axis or tick line.
    Line(Line),
    /// An axis or tick label.
    Text(Text),
    /// The stroke of one dataset.
    Polyline(Polyline),
}

impl Render for Element {
    fn render<O>(&self, output: &mut O) -> fmt::Result
    where
        O: OutputStream,
    {
        match self {
            Element::Line(line) => line.render(output),
            Element::Text(text) => text.render(output),
            Element::Polyline(polyline) => polyline.render(output),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

impl Render for Line {
    fn render<O>(&self, output: &mut O) -> fmt::Result
    where
        O: OutputStream,
    {
        let (x1, y1) = self.from;
        let (x2, y2) = self.to;

        write!(
            output,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{AXIS_COLOR}"/>"#,
            Coord(x1),
            Coord(y1),
            Coord(x2),
            Coord(y2),
        )?;
        output.write("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Middle,
    End,
}

impl Display for Anchor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Middle => f.write_str("middle"),
            Anchor::End => f.write_str("end"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub position: (f64, f64),
    pub anchor: Anchor,
    pub font_size: f64,
    /// Rotation in degrees about the text position.
    pub rotation: Option<f64>,
    pub content: String,
}

impl Render for Text {
    fn render<O>(&self, output: &mut O) -> fmt::Result
    where
        O: OutputStream,
    {
        let (x, y) = self.position;

        write!(
            output,
            r#"<text x="{x}" y="{y}" font-size="{size}" text-anchor="{anchor}""#,
            x = Coord(x),
            y = Coord(y),
            size = Coord(self.font_size),
            anchor = self.anchor,
        )?;
        if let Some(angle) = self.rotation {
            write!(
                output,
                r#" transform="rotate({angle} {x} {y})""#,
                angle = Coord(angle),
                x = Coord(x),
                y = Coord(y),
            )?;
        }
        write!(output, ">{}</text>\n", escape(&self.content))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
    pub stroke: String,
    pub stroke_width: f64,
    pub stroke_opacity: f64,
    pub label: Option<String>,
}

impl Render for Polyline {
    fn render<O>(&self, output: &mut O) -> fmt::Result
    where
        O: OutputStream,
    {
        output.write(r#"<polyline points=""#)?;
        for (index, &(x, y)) in self.points.iter().enumerate() {
            if index > 0 {
                output.write(" ")?;
            }
            write!(output, "{},{}", Coord(x), Coord(y))?;
        }
        write!(
            output,
            r#"" fill="none" stroke="{stroke}" stroke-width="{width}" stroke-opacity="{opacity}""#,
            stroke = escape(&self.stroke),
            width = Coord(self.stroke_width),
            opacity = Coord(self.stroke_opacity),
        )?;

        match self.label {
            Some(ref label) => write!(output, "><title>{}</title></polyline>\n", escape(label)),
            None => output.write("/>\n"),
        }
    }
}

/// A canvas coordinate printed with at most three decimals.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Coord(pub f64);

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 1000.0).round() / 1000.0;

        if rounded == 0.0 {
            // Avoids printing `-0`.
            f.write_str("0")
        } else {
            rounded.fmt(f)
        }
    }
}

/// Escapes the characters that are special in XML text and attribute values.
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}
