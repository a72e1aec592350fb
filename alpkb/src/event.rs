use crate::keycode::KeyCode;
use crate::timer::Tick;

/// Position of a key in the matrix
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPos {
    pub row: u8,
    pub col: u8,
}

impl KeyPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// A resolved key transition.
///
/// `time` is the tick of the scan which observed the transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub keycode: KeyCode,
    pub pressed: bool,
    pub time: Tick,
}

impl KeyEvent {
    pub fn press(keycode: KeyCode, time: Tick) -> Self {
        Self {
            keycode,
            pressed: true,
            time,
        }
    }

    pub fn release(keycode: KeyCode, time: Tick) -> Self {
        Self {
            keycode,
            pressed: false,
            time,
        }
    }
}
