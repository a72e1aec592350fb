use super::DebouncerTrait;
use crate::DEBOUNCE_TIME;
use crate::matrix::MatrixRow;
use crate::timer::Tick;

/// Fast per-row debouncer.
///
/// A changed row is reported immediately, then the row is frozen until the
/// window elapses.
pub struct FastDebouncer<const ROW: usize> {
    debounce_time: u16,
    frozen_since: [Option<Tick>; ROW],
}

impl<const ROW: usize> Default for FastDebouncer<ROW> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROW: usize> FastDebouncer<ROW> {
    /// Create a fast debouncer
    pub fn new() -> Self {
        Self::with_debounce_time(DEBOUNCE_TIME)
    }

    pub fn with_debounce_time(debounce_time: u16) -> Self {
        FastDebouncer {
            debounce_time,
            frozen_since: [None; ROW],
        }
    }
}

impl<const ROW: usize> DebouncerTrait<ROW> for FastDebouncer<ROW> {
    fn debounce(&mut self, raw: &[MatrixRow; ROW], cooked: &mut [MatrixRow; ROW], _changed: bool, now: Tick) -> bool {
        let mut updated = false;
        for row in 0..ROW {
            if let Some(since) = self.frozen_since[row] {
                if now.elapsed_since(since) < self.debounce_time {
                    continue;
                }
                self.frozen_since[row] = None;
            }
            if raw[row] != cooked[row] {
                cooked[row] = raw[row];
                self.frozen_since[row] = Some(now);
                updated = true;
            }
        }
        updated
    }
}
