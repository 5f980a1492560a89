use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigurationError;

/// What the x coordinate of the plotted samples stands for.
///
/// The kind only names the x column of exported tables; it never changes the
/// exported values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum AxisKind {
    /// Seconds elapsed since the start of the recording.
    Timestamp,
    /// The index of the message in its topic.
    Index,
    /// A value taken from another message path.
    Custom,
    /// A value taken from the latest message of another path.
    CurrentCustom,
}

impl AxisKind {
    /// All axis kinds.
    pub const ALL: [AxisKind; 4] = [
        AxisKind::Timestamp,
        AxisKind::Index,
        AxisKind::Custom,
        AxisKind::CurrentCustom,
    ];

    /// The name of the axis kind as the plotting panel spells it.
    pub fn name(self) -> &'static str {
        match self {
            AxisKind::Timestamp => "timestamp",
            AxisKind::Index => "index",
            AxisKind::Custom => "custom",
            AxisKind::CurrentCustom => "currentCustom",
        }
    }

    /// The header of the x column in exported tables.
    pub fn column_label(self) -> &'static str {
        match self {
            AxisKind::Timestamp => "elapsed time",
            AxisKind::Index => "index",
            AxisKind::Custom | AxisKind::CurrentCustom => "x value",
        }
    }
}

impl Display for AxisKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AxisKind {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        AxisKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ConfigurationError::UnknownAxisKind(name.to_owned()))
    }
}

impl TryFrom<String> for AxisKind {
    type Error = ConfigurationError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<AxisKind> for &'static str {
    fn from(kind: AxisKind) -> Self {
        kind.name()
    }
}
