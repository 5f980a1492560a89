//! Export encoders for plotted time-series datasets.
//!
//! A snapshot of the plotted [`Dataset`](plotsave_dataset::Dataset)s is turned
//! into one of two artifacts:
//!
//! - a delimited text table, see [`TableEncoder`], and
//! - a standalone SVG document, see [`VectorRenderer`].
//!
//! The [`Exporter`] wraps both encoders and hands the finished artifact to a
//! [`DownloadSink`] supplied by the host application.

#![warn(missing_docs)]

mod axis;
mod render;

pub mod error;
pub mod export;
pub mod table;
pub mod vector;

pub use axis::AxisKind;
pub use error::ConfigurationError;
pub use error::DegenerateRangeError;
pub use error::ExportError;
pub use error::Result;
pub use export::DownloadSink;
pub use export::ExportFile;
pub use export::Exporter;
pub use export::TABLE_FILE_NAME;
pub use export::TABLE_MIME;
pub use export::VECTOR_FILE_NAME;
pub use export::VECTOR_MIME;
pub use export::export_table;
pub use export::export_vector;
pub use table::FieldQuoting;
pub use table::TableEncoder;
pub use table::TableOptions;
pub use table::encode_table;
pub use vector::Axis;
pub use vector::DegenerateRangePolicy;
pub use vector::RenderConfig;
pub use vector::VectorRenderer;
pub use vector::render_vector;
