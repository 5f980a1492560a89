//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io;

use tinytemplate::error::Error as TinyTemplateError;

use crate::vector::Axis;

/// The result type that uses [ExportError] as the error type.
pub type Result<T> = std::result::Result<T, ExportError>;

/// The error type for encoding and exporting plotted datasets.
#[derive(Debug)]
pub enum ExportError {
    /// The export was requested with an invalid configuration.
    Configuration(ConfigurationError),

    /// The plotted data spans no width or no height.
    DegenerateRange(DegenerateRangeError),

    /// A [tinytemplate::error::Error] encountered while rendering the vector document.
    Template(TinyTemplateError),

    /// A [std::fmt::Error] raised while formatting a document element.
    Render(fmt::Error),

    /// A [csv::Error] encountered while writing the table.
    Csv(csv::Error),

    /// A [std::io::Error] reported by the download sink.
    Io(io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let export_error = "export error:";

        match self {
            ExportError::Configuration(error) => write!(f, "{export_error} {error}"),
            ExportError::DegenerateRange(error) => write!(f, "{export_error} {error}"),
            ExportError::Template(error) => write!(f, "{export_error} template error: {error}"),
            ExportError::Render(error) => write!(f, "{export_error} render error: {error}"),
            ExportError::Csv(error) => write!(f, "{export_error} table error: {error}"),
            ExportError::Io(error) => write!(f, "{export_error} I/O error: {error}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ExportError::Configuration(error) => Some(error),
            ExportError::DegenerateRange(error) => Some(error),
            ExportError::Template(error) => Some(error),
            ExportError::Render(error) => Some(error),
            ExportError::Csv(error) => Some(error),
            ExportError::Io(error) => Some(error),
        }
    }
}

impl From<ConfigurationError> for ExportError {
    fn from(error: ConfigurationError) -> Self {
        ExportError::Configuration(error)
    }
}

impl From<DegenerateRangeError> for ExportError {
    fn from(error: DegenerateRangeError) -> Self {
        ExportError::DegenerateRange(error)
    }
}

impl From<TinyTemplateError> for ExportError {
    fn from(error: TinyTemplateError) -> Self {
        ExportError::Template(error)
    }
}

impl From<fmt::Error> for ExportError {
    fn from(error: fmt::Error) -> Self {
        ExportError::Render(error)
    }
}

impl From<csv::Error> for ExportError {
    fn from(error: csv::Error) -> Self {
        ExportError::Csv(error)
    }
}

impl From<io::Error> for ExportError {
    fn from(error: io::Error) -> Self {
        ExportError::Io(error)
    }
}

/// The error type for rejected encoder settings.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// The axis kind name is not one of `timestamp`, `index`, `custom` or `currentCustom`.
    UnknownAxisKind(String),

    /// The canvas leaves no drawable area inside its margins.
    InvalidCanvas {
        /// The canvas width.
        width: f64,
        /// The canvas height.
        height: f64,
        /// The margin on every side of the drawable area.
        margin: f64,
    },

    /// A style setting is not a finite number in its allowed range.
    InvalidStyle(&'static str),

    /// At least one point per dataset must be rendered.
    ZeroMaxPoints,

    /// An axis needs at least one interval between ticks.
    ZeroTickIntervals,

    /// More tick intervals than [crate::vector::MAX_TICK_INTERVALS] were requested.
    TooManyTickIntervals(u32),

    /// The table delimiter is not an ASCII character, or it is a quote or a line break.
    InvalidDelimiter(u8),

    /// Polylines need at least one stroke color.
    EmptyPalette,
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let configuration_error = "configuration error:";

        match self {
            ConfigurationError::UnknownAxisKind(name) => write!(
                f,
                "{configuration_error} unknown axis kind \"{name}\"; expected one of timestamp, index, custom, currentCustom"
            ),
            ConfigurationError::InvalidCanvas {
                width,
                height,
                margin,
            } => write!(
                f,
                "{configuration_error} a {width}x{height} canvas has no drawable area inside a {margin} margin"
            ),
            ConfigurationError::InvalidStyle(setting) => write!(
                f,
                "{configuration_error} the {setting} is not a finite number in its allowed range"
            ),
            ConfigurationError::ZeroMaxPoints => {
                write!(f, "{configuration_error} the maximum number of points per dataset must be at least 1")
            }
            ConfigurationError::ZeroTickIntervals => {
                write!(f, "{configuration_error} the number of tick intervals must be at least 1")
            }
            ConfigurationError::TooManyTickIntervals(intervals) => write!(
                f,
                "{configuration_error} {intervals} tick intervals exceed the maximum of {}",
                crate::vector::MAX_TICK_INTERVALS
            ),
            ConfigurationError::InvalidDelimiter(delimiter) => write!(
                f,
                "{configuration_error} the delimiter {} must be an ASCII character other than a quote or a line break",
                delimiter.escape_ascii()
            ),
            ConfigurationError::EmptyPalette => {
                write!(f, "{configuration_error} the color palette is empty")
            }
        }
    }
}

impl Error for ConfigurationError {}

/// The plotted data has the same coordinate on every point along an axis,
/// so no scale can map it onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegenerateRangeError {
    /// The axis without extent.
    pub axis: Axis,
    /// The single coordinate every point has along the axis.
    pub value: f64,
}

impl Display for DegenerateRangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "degenerate range: every point has {axis} = {value}, so the {axis} axis cannot be scaled",
            axis = self.axis,
            value = self.value
        )
    }
}

impl Error for DegenerateRangeError {}
