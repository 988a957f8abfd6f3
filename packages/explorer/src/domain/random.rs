//! Random source seam.
//!
//! Everything the explorer "simulates" draws from a [`RandomSource`]. Production
//! code uses an `StdRng`, tests substitute a scripted sequence of outcomes.

use std::ops::RangeInclusive;

/// Source of the random outcomes the simulation needs
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send {
    /// `true` with the given probability, which lies in `[0, 1]`.
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform index into a collection of `len` items; `len` is non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform integer within `range`.
    fn int_in(&mut self, range: RangeInclusive<i32>) -> i32;
}

/// Hands out an independent [`RandomSource`] to each consumer
///
/// Each chat session moves its source into the activity task, so it needs a
/// source of its own rather than a shared one.
pub trait RandomProvider: Send + Sync {
    fn source(&self) -> Box<dyn RandomSource>;
}

impl<F> RandomProvider for F
where
    F: Fn() -> Box<dyn RandomSource> + Send + Sync,
{
    fn source(&self) -> Box<dyn RandomSource> {
        self()
    }
}
