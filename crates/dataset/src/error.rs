//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io;

/// The result type that uses [DatasetError] as the error type.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// The error type for loading dataset snapshots and converting timestamps.
#[derive(Debug)]
pub enum DatasetError {
    /// A [std::io::Error] encountered while reading a snapshot.
    Io(io::Error),

    /// A [serde_json::Error] encountered while decoding a snapshot.
    Json(serde_json::Error),

    /// The timestamp (in seconds since the Unix epoch) does not fit into a [crate::Time].
    TimeOutOfRange(i64),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let dataset_error = "dataset error:";

        match self {
            DatasetError::Io(error) => write!(f, "{dataset_error} I/O error: {error}"),
            DatasetError::Json(error) => {
                write!(f, "{dataset_error} could not decode the snapshot: {error}")
            }
            DatasetError::TimeOutOfRange(seconds) => write!(
                f,
                "{dataset_error} the timestamp {seconds}s is outside the supported range"
            ),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DatasetError::Io(error) => Some(error),
            DatasetError::Json(error) => Some(error),
            DatasetError::TimeOutOfRange(_) => None,
        }
    }
}

impl From<io::Error> for DatasetError {
    fn from(error: io::Error) -> Self {
        DatasetError::Io(error)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(error: serde_json::Error) -> Self {
        DatasetError::Json(error)
    }
}
