//! Walking nested errors
//!
//! An error exposes its inner cause through [`Error::source`]; a chain ends
//! at the first layer that returns `None`.

use std::error::Error;
use std::iter::FusedIterator;

/// Iterator over an error and every error it wraps, outermost first
#[derive(Debug, Clone)]
pub struct Layers<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Layers<'a> {
    /// Start at `err`; `None` yields nothing
    pub fn new(err: Option<&'a (dyn Error + 'static)>) -> Self {
        Self { next: err }
    }
}

impl<'a> Iterator for Layers<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Layers<'_> {}

/// Iterate over `err` and its sources
pub fn layers<'a>(err: &'a (dyn Error + 'static)) -> Layers<'a> {
    Layers::new(Some(err))
}

/// Number of layers in the chain starting at `err`
pub fn depth(err: &(dyn Error + 'static)) -> usize {
    layers(err).count()
}
