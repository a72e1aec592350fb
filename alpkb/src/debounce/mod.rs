//! Debouncers turn the raw matrix into a stable one.

use crate::matrix::MatrixRow;
use crate::timer::Tick;

pub mod default_debouncer;
pub mod fast_debouncer;

pub use default_debouncer::DefaultDebouncer;
pub use fast_debouncer::FastDebouncer;

/// Debounce a whole matrix at once
pub trait DebouncerTrait<const ROW: usize> {
    /// Update `cooked` from `raw`, returns whether `cooked` changed.
    ///
    /// `changed` tells whether `raw` differs from the previous call.
    fn debounce(&mut self, raw: &[MatrixRow; ROW], cooked: &mut [MatrixRow; ROW], changed: bool, now: Tick) -> bool;
}
