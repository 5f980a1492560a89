use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use serde::Serialize;

use crate::error::Result;
use crate::model::Dataset;

/// An immutable snapshot of the plotted datasets, in panel order.
///
/// Snapshots are stored as a JSON array of datasets:
///
/// ```json
/// [{ "label": "/odom.pose.x",
///    "data": [{ "x": 0, "y": 1.5, "value": 1.5,
///               "receiveTime": { "sec": 10, "nsec": 0 },
///               "headerStamp": { "sec": 9, "nsec": 999 } }] }]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    datasets: Vec<Dataset>,
}

impl Snapshot {
    /// Creates a snapshot from datasets.
    pub fn new(datasets: Vec<Dataset>) -> Snapshot {
        Self { datasets }
    }

    /// Reads a JSON snapshot from the file at `path`.
    pub fn read(path: &Path) -> Result<Snapshot> {
        let file = File::open(path)?;
        let snapshot = Self::from_reader(BufReader::new(file))?;

        debug!(
            "read {} datasets from `{}`",
            snapshot.datasets.len(),
            path.display()
        );

        Ok(snapshot)
    }

    /// Decodes a JSON snapshot from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Snapshot> {
        let snapshot = serde_json::from_reader(reader)?;
        Ok(snapshot)
    }

    /// The datasets in panel order.
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Consumes the snapshot, returning its datasets.
    pub fn into_datasets(self) -> Vec<Dataset> {
        self.datasets
    }
}
