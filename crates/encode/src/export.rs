//! Hands encoded artifacts over to the host application.
//!
//! Encoding always completes before the sink is called, so a failed export
//! never reaches the sink and a successful one reaches it exactly once.

use std::io;

use log::info;
use plotsave_dataset::Dataset;
use plotsave_dataset::RawTime;
use plotsave_dataset::TimeFormat;

use crate::axis::AxisKind;
use crate::error::Result;
use crate::table::TableEncoder;
use crate::table::TableOptions;
use crate::vector::VectorRenderer;

/// The file name of exported tables.
pub const TABLE_FILE_NAME: &str = "plot_data.csv";
/// The MIME type of exported tables.
pub const TABLE_MIME: &str = "text/csv";
/// The file name of exported vector renderings.
pub const VECTOR_FILE_NAME: &str = "plot_data.svg";
/// The MIME type of exported vector renderings.
pub const VECTOR_MIME: &str = "image/svg+xml";

/// An encoded artifact ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// The suggested file name.
    pub filename: &'static str,
    /// The MIME type of the content.
    pub mime: &'static str,
    /// The encoded content.
    pub content: String,
}

/// The host collaborator that saves exported files, e.g. behind a save dialog.
pub trait DownloadSink {
    /// Saves the files.
    fn download(&mut self, files: Vec<ExportFile>) -> io::Result<()>;
}

impl<F> DownloadSink for F
where
    F: FnMut(Vec<ExportFile>) -> io::Result<()>,
{
    fn download(&mut self, files: Vec<ExportFile>) -> io::Result<()> {
        self(files)
    }
}

/// Encodes datasets and hands the results to a [DownloadSink].
#[derive(Debug, Clone)]
pub struct Exporter<T = RawTime> {
    table: TableEncoder<T>,
    vector: VectorRenderer,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(TableEncoder::new(TableOptions::default()), VectorRenderer::default())
    }
}

impl<T: TimeFormat> Exporter<T> {
    /// Creates an exporter from configured encoders.
    pub fn new(table: TableEncoder<T>, vector: VectorRenderer) -> Exporter<T> {
        Self { table, vector }
    }

    /// Exports the datasets as a table named after `axis_kind`.
    pub fn export_table<S>(&self, datasets: &[Dataset], axis_kind: AxisKind, sink: &mut S) -> Result<()>
    where
        S: DownloadSink + ?Sized,
    {
        let content = self.table.encode(datasets, axis_kind)?;
        send(sink, TABLE_FILE_NAME, TABLE_MIME, content)
    }

    /// Exports the datasets as a vector rendering.
    pub fn export_vector<S>(&self, datasets: &[Dataset], sink: &mut S) -> Result<()>
    where
        S: DownloadSink + ?Sized,
    {
        let content = self.vector.render(datasets)?;
        send(sink, VECTOR_FILE_NAME, VECTOR_MIME, content)
    }
}

fn send<S>(sink: &mut S, filename: &'static str, mime: &'static str, content: String) -> Result<()>
where
    S: DownloadSink + ?Sized,
{
    info!("exporting {filename} ({mime}, {} bytes)", content.len());

    let file = ExportFile {
        filename,
        mime,
        content,
    };
    sink.download(vec![file])?;

    Ok(())
}

/// Exports the datasets as a table with the default encoder settings.
pub fn export_table<S>(datasets: &[Dataset], axis_kind: AxisKind, sink: &mut S) -> Result<()>
where
    S: DownloadSink + ?Sized,
{
    Exporter::default().export_table(datasets, axis_kind, sink)
}

/// Exports the datasets as a vector rendering with the default [crate::RenderConfig].
pub fn export_vector<S>(datasets: &[Dataset], sink: &mut S) -> Result<()>
where
    S: DownloadSink + ?Sized,
{
    Exporter::default().export_vector(datasets, sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    use plotsave_dataset::Datum;
    use plotsave_dataset::Time;

    use crate::error::ExportError;

    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<Vec<ExportFile>>,
    }

    impl DownloadSink for RecordingSink {
        fn download(&mut self, files: Vec<ExportFile>) -> io::Result<()> {
            self.calls.push(files);
            Ok(())
        }
    }

    fn datasets() -> Vec<Dataset> {
        vec![Dataset::labeled(
            "/a",
            vec![
                Datum::new(0.0, 0.0, 0.0, Time::new(1, 0)),
                Datum::new(10.0, 10.0, 10.0, Time::new(2, 0)),
            ],
        )]
    }

    #[test]
    fn table_export_calls_the_sink_once() -> Result<()> {
        let mut sink = RecordingSink::default();

        export_table(&datasets(), AxisKind::Index, &mut sink)?;

        assert_eq!(sink.calls.len(), 1);
        assert_eq!(sink.calls[0].len(), 1);

        let file = &sink.calls[0][0];
        assert_eq!(file.filename, "plot_data.csv");
        assert_eq!(file.mime, "text/csv");
        assert!(file.content.starts_with("index,receive time,header.stamp,topic,value\n"));

        Ok(())
    }

    #[test]
    fn vector_export_calls_the_sink_once() -> Result<()> {
        let mut sink = RecordingSink::default();

        export_vector(&datasets(), &mut sink)?;

        assert_eq!(sink.calls.len(), 1);

        let file = &sink.calls[0][0];
        assert_eq!(file.filename, "plot_data.svg");
        assert_eq!(file.mime, "image/svg+xml");
        assert!(file.content.contains("<polyline"));

        Ok(())
    }

    #[test]
    fn failed_export_never_reaches_the_sink() {
        let mut calls = 0;
        let mut sink = |_: Vec<ExportFile>| -> io::Result<()> {
            calls += 1;
            Ok(())
        };
        let constant = vec![Dataset::new(
            None,
            vec![Datum::new(1.0, 1.0, 1.0, Time::default())],
        )];

        let result = export_vector(&constant, &mut sink);

        assert!(matches!(result, Err(ExportError::DegenerateRange(_))));
        assert_eq!(calls, 0);
    }

    #[test]
    fn sink_errors_are_returned() {
        let mut sink = |_: Vec<ExportFile>| -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        };

        let result = export_table(&datasets(), AxisKind::Custom, &mut sink);

        assert!(matches!(result, Err(ExportError::Io(ref error)) if error.kind() == io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn exporter_uses_its_encoders() -> Result<()> {
        let table = TableEncoder::new(TableOptions::default()).with_time_format(|time: &Time| time.sec().to_string());
        let exporter = Exporter::new(table, VectorRenderer::default());
        let mut sink = RecordingSink::default();

        exporter.export_table(&datasets(), AxisKind::Timestamp, &mut sink)?;

        assert_eq!(
            sink.calls[0][0].content,
            "elapsed time,receive time,header.stamp,topic,value\n0,1,,/a,0\n10,2,,/a,10"
        );

        Ok(())
    }
}
