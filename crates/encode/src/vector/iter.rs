use log::debug;
use plotsave_dataset::Datum;

/// Yields the samples whose coordinates are both finite, skipping the rest.
pub(super) struct PlottableIter<I> {
    iter: I,
    skipped: usize,
}

impl<'a, I> PlottableIter<I>
where
    I: Iterator<Item = &'a Datum>,
{
    pub fn new(iter: I) -> PlottableIter<I> {
        Self { iter, skipped: 0 }
    }

    /// The number of samples skipped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<'a, I> Iterator for PlottableIter<I>
where
    I: Iterator<Item = &'a Datum>,
{
    type Item = &'a Datum;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.iter.next() {
                Some(datum) if datum.is_plottable() => return Some(datum),
                Some(datum) => {
                    debug!("skipping sample at ({}, {}): not a finite point", datum.x, datum.y);
                    self.skipped += 1;
                    continue;
                }
                None => return None,
            }
        }
    }
}
