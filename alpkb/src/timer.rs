//! Free running tick counter.
//!
//! Ticks are milliseconds truncated to 16 bits, so the counter wraps roughly
//! every 65 seconds. All elapsed-time arithmetic is done with wrapping
//! subtraction, which stays correct across a wrap as long as the measured
//! interval is shorter than the counter period.

use embassy_time::Instant;

/// Longest interval which can be told apart from a wrapped one
pub const MAX_INTERVAL_TICKS: u16 = u16::MAX / 2;

/// A reading of the tick counter
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick(pub u16);

impl Tick {
    /// Ticks elapsed from `earlier` to `self`
    pub const fn elapsed_since(self, earlier: Tick) -> u16 {
        self.0.wrapping_sub(earlier.0)
    }

    pub const fn wrapping_add(self, ticks: u16) -> Tick {
        Tick(self.0.wrapping_add(ticks))
    }
}

/// Source of the current tick
pub trait Clock {
    /// Read the current tick
    fn now(&self) -> Tick;

    /// Ticks elapsed since a prior reading
    fn elapsed(&self, since: Tick) -> u16 {
        self.now().elapsed_since(since)
    }
}

/// Clock backed by the embassy time driver
#[derive(Copy, Clone, Debug, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Tick {
        Tick(Instant::now().as_millis() as u16)
    }
}
