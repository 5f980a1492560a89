use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::time::Time;

/// The plotted value of a sample, either numeric or textual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A numeric value.
    Number(f64),
    /// A textual value, e.g. an enum name.
    Text(String),
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(number) => number.fmt(f),
            Value::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

/// A single plotted sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datum {
    /// The horizontal plot coordinate.
    pub x: f64,
    /// The vertical plot coordinate.
    pub y: f64,
    /// The value the sample was derived from.
    pub value: Value,
    /// When the message carrying the sample was received.
    pub receive_time: Time,
    /// The stamp from the message header, if it had one.
    #[serde(default)]
    pub header_stamp: Option<Time>,
}

impl Datum {
    /// Creates a sample without a header stamp.
    pub fn new(x: f64, y: f64, value: impl Into<Value>, receive_time: Time) -> Datum {
        Self {
            x,
            y,
            value: value.into(),
            receive_time,
            header_stamp: None,
        }
    }

    /// Sets the header stamp of the sample.
    pub fn with_header_stamp(mut self, header_stamp: Time) -> Datum {
        self.header_stamp = Some(header_stamp);
        self
    }

    /// Whether both coordinates are finite and the sample can be drawn.
    pub fn is_plottable(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An ordered, optionally labeled series of samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// The series label, usually the topic path it was plotted from.
    #[serde(default)]
    pub label: Option<String>,
    /// The samples in plotting order.
    #[serde(default)]
    pub data: Vec<Datum>,
}

impl Dataset {
    /// Creates a dataset.
    pub fn new(label: Option<String>, data: Vec<Datum>) -> Dataset {
        Self { label, data }
    }

    /// Creates a dataset with the given label.
    pub fn labeled(label: impl Into<String>, data: Vec<Datum>) -> Dataset {
        Self::new(Some(label.into()), data)
    }

    /// The number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the dataset has no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
