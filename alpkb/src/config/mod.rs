use embassy_time::Duration;
use embedded_hal::digital::StatefulOutputPin;

use crate::controller::led_indicator::IndicatorConfig;
use crate::layer::TriLayer;
use crate::tap_hold::TapHoldBinding;
use crate::timer::MAX_INTERVAL_TICKS;
use crate::{MATRIX_SELECT_DELAY_NS, MATRIX_UNSELECT_DELAY_US, TAPPING_TERM};

/// The config struct for alpkb keyboard.
///
/// There are 3 parts:
/// 1. `behavior`: tunable key behavior, tap-hold and tri-layer
/// 2. `tap_hold_bindings`: the layer-tap keys of the keymap
/// 3. `indicator`: which light slot shows which layer
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyboardConfig<'a> {
    pub behavior: BehaviorConfig,
    pub tap_hold_bindings: &'a [TapHoldBinding],
    pub indicator: IndicatorConfig<'a>,
}

/// Config for configurable action behavior
#[derive(Clone, Copy, Debug, Default)]
pub struct BehaviorConfig {
    pub tri_layer: Option<TriLayer>,
    pub tap_hold: TapHoldConfig,
}

/// Configurations for tap hold behavior
#[derive(Clone, Copy, Debug)]
pub struct TapHoldConfig {
    /// A trigger released within this duration, with no other key pressed meanwhile, is a tap
    pub tapping_term: Duration,
}

impl Default for TapHoldConfig {
    fn default() -> Self {
        Self {
            tapping_term: Duration::from_millis(TAPPING_TERM as u64),
        }
    }
}

impl TapHoldConfig {
    /// Tapping term in ticks, saturated to half the tick range
    pub fn term_ticks(&self) -> u16 {
        self.tapping_term.as_millis().min(MAX_INTERVAL_TICKS as u64) as u16
    }
}

/// Settle delays of the matrix scan
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MatrixConfig {
    /// Wait after a line is driven low, before sampling
    pub select_delay_ns: u32,
    /// Wait after a line is released, before the next one is driven
    pub unselect_delay_us: u32,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            select_delay_ns: MATRIX_SELECT_DELAY_NS,
            unselect_delay_us: MATRIX_UNSELECT_DELAY_US,
        }
    }
}

/// Config for lights driven directly by gpio
pub struct LightPinConfig<O: StatefulOutputPin> {
    pub pin: O,
    pub low_active: bool,
    /// Light slot shown by this pin
    pub slot: u8,
}
