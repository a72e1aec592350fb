use super::DebouncerTrait;
use crate::DEBOUNCE_TIME;
use crate::matrix::MatrixRow;
use crate::timer::Tick;

/// Symmetric deferred debouncer for the whole matrix.
///
/// Any raw change restarts one shared window, the raw matrix is copied to
/// the stable one only after it stayed unchanged for the whole window.
pub struct DefaultDebouncer {
    debounce_time: u16,
    /// Tick of the last raw change which isn't copied yet
    pending_since: Option<Tick>,
}

impl Default for DefaultDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultDebouncer {
    pub fn new() -> Self {
        Self::with_debounce_time(DEBOUNCE_TIME)
    }

    /// Create a debouncer with a window of `debounce_time` ticks, 0 disables debouncing
    pub fn with_debounce_time(debounce_time: u16) -> Self {
        DefaultDebouncer {
            debounce_time,
            pending_since: None,
        }
    }
}

impl<const ROW: usize> DebouncerTrait<ROW> for DefaultDebouncer {
    fn debounce(&mut self, raw: &[MatrixRow; ROW], cooked: &mut [MatrixRow; ROW], changed: bool, now: Tick) -> bool {
        if changed {
            self.pending_since = Some(now);
        }

        match self.pending_since {
            Some(since) if now.elapsed_since(since) >= self.debounce_time => {
                self.pending_since = None;
                if cooked == raw {
                    return false;
                }
                *cooked = *raw;
                true
            }
            _ => false,
        }
    }
}
