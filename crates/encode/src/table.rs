//! The delimited text table encoder.
//!
//! One header row is followed by one row per sample, datasets in input order
//! and samples in dataset order. Rows are joined by `\n` without a trailing
//! line separator.

use std::io;

use csv::QuoteStyle;
use csv::Terminator;
use csv::WriterBuilder;
use log::debug;
use plotsave_dataset::Dataset;
use plotsave_dataset::RawTime;
use plotsave_dataset::TimeFormat;
use serde::Deserialize;
use serde::Serialize;

use crate::axis::AxisKind;
use crate::error::ConfigurationError;
use crate::error::Result;

const LINE_SEPARATOR: u8 = b'\n';
const FIXED_COLUMNS: [&str; 4] = ["receive time", "header.stamp", "topic", "value"];

/// Whether fields are quoted when they contain special characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldQuoting {
    /// Fields are written verbatim. A label or value that contains the
    /// delimiter or a line break shifts the columns of its row.
    #[default]
    Never,
    /// Fields containing the delimiter, a quote or a line break are quoted
    /// and inner quotes are doubled.
    Necessary,
}

impl From<FieldQuoting> for QuoteStyle {
    fn from(quoting: FieldQuoting) -> Self {
        match quoting {
            FieldQuoting::Never => QuoteStyle::Never,
            FieldQuoting::Necessary => QuoteStyle::Necessary,
        }
    }
}

/// Table layout settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// The field delimiter; `,` by default.
    pub delimiter: u8,
    /// The quoting policy; [FieldQuoting::Never] by default.
    pub quoting: FieldQuoting,
}

impl TableOptions {
    /// Checks that the delimiter is an ASCII character other than a quote or
    /// a line break, so every encoded table is valid UTF-8.
    pub fn validate(&self) -> std::result::Result<(), ConfigurationError> {
        if !self.delimiter.is_ascii() || matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            return Err(ConfigurationError::InvalidDelimiter(self.delimiter));
        }

        Ok(())
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quoting: FieldQuoting::Never,
        }
    }
}

/// Encodes datasets into a delimited text table.
#[derive(Debug, Clone)]
pub struct TableEncoder<T = RawTime> {
    options: TableOptions,
    time_format: T,
}

impl TableEncoder {
    /// Creates an encoder that prints timestamps as raw `sec.nsec` numbers.
    pub fn new(options: TableOptions) -> TableEncoder {
        Self {
            options,
            time_format: RawTime,
        }
    }
}

impl Default for TableEncoder {
    fn default() -> Self {
        Self::new(TableOptions::default())
    }
}

impl<T: TimeFormat> TableEncoder<T> {
    /// Replaces the timestamp formatter.
    pub fn with_time_format<U: TimeFormat>(self, time_format: U) -> TableEncoder<U> {
        TableEncoder {
            options: self.options,
            time_format,
        }
    }

    /// The table layout settings.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Encodes the datasets, naming the x column after `axis_kind`.
    pub fn encode(&self, datasets: &[Dataset], axis_kind: AxisKind) -> Result<String> {
        self.options.validate()?;

        let mut writer = WriterBuilder::new()
            .delimiter(self.options.delimiter)
            .quote_style(self.options.quoting.into())
            .terminator(Terminator::Any(LINE_SEPARATOR))
            .from_writer(Vec::new());

        let mut header = vec![axis_kind.column_label()];
        header.extend(FIXED_COLUMNS);
        writer.write_record(&header)?;

        let mut rows = 0;
        for dataset in datasets {
            let topic = dataset.label.as_deref().unwrap_or_default();

            for datum in &dataset.data {
                let header_stamp = datum
                    .header_stamp
                    .as_ref()
                    .map(|stamp| self.time_format.format(stamp))
                    .unwrap_or_default();

                writer.write_record([
                    datum.x.to_string(),
                    self.time_format.format(&datum.receive_time),
                    header_stamp,
                    topic.to_owned(),
                    datum.value.to_string(),
                ])?;
                rows += 1;
            }
        }

        let mut bytes = writer.into_inner().map_err(|error| error.into_error())?;
        if bytes.last() == Some(&LINE_SEPARATOR) {
            bytes.pop();
        }

        debug!(
            "encoded {rows} table rows from {} datasets ({} bytes)",
            datasets.len(),
            bytes.len()
        );

        let table = String::from_utf8(bytes)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

        Ok(table)
    }
}

/// Encodes datasets with the default [TableOptions] and raw timestamps.
pub fn encode_table(datasets: &[Dataset], axis_kind: AxisKind) -> Result<String> {
    TableEncoder::new(TableOptions::default()).encode(datasets, axis_kind)
}
