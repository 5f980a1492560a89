//! Stride decimation of long datasets.
//!
//! A dataset of `n` points keeps every `ceil(n / max_points)`-th point,
//! starting with the first one. This bounds the rendering cost but is lossy:
//! extrema that fall between kept points are not drawn.

use plotsave_dataset::Datum;

/// The stride that keeps at most `max_points` out of `len` points.
pub fn resample_factor(len: usize, max_points: usize) -> usize {
    len.div_ceil(max_points.max(1)).max(1)
}

/// The points kept from `data`, in their original order.
pub fn decimate(data: &[Datum], max_points: usize) -> impl Iterator<Item = &Datum> {
    data.iter().step_by(resample_factor(data.len(), max_points))
}
