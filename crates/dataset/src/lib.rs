//! The dataset model of the plotsave export engine.
//!
//! Datasets are produced upstream by the plotting panel's data pipeline and
//! arrive here as an immutable snapshot. This crate only describes them:
//! the [`Dataset`] and [`Datum`] types, the [`Time`] stamps carried by every
//! sample and the [`TimeFormat`] collaborators used to print those stamps.

#![warn(missing_docs)]

mod model;
mod snapshot;

pub mod error;
pub mod time;

pub use model::Dataset;
pub use model::Datum;
pub use model::Value;
pub use snapshot::Snapshot;
pub use time::RawTime;
pub use time::Rfc3339Time;
pub use time::Time;
pub use time::TimeFormat;
