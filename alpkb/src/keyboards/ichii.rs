//! ichii: two space bars, each one a layer-tap key.

use crate::config::{BehaviorConfig, KeyboardConfig};
use crate::controller::led_indicator::{IndicatorConfig, LayerSlot};
use crate::keycode::KeyCode;
use crate::tap_hold::TapHoldBinding;

pub const BASE: u8 = 0;
pub const FN1: u8 = 1;
pub const FN2: u8 = 2;
pub const NUM_LAYER: usize = 3;

pub const L1_SPC: KeyCode = KeyCode::user(0);
pub const L2_SPC: KeyCode = KeyCode::user(1);

pub static TAP_HOLD_BINDINGS: [TapHoldBinding; 2] = [
    TapHoldBinding::new(L1_SPC, FN1, KeyCode::SPACE),
    TapHoldBinding::new(L2_SPC, FN2, KeyCode::SPACE),
];

pub static LAYER_SLOTS: [LayerSlot; 2] = [LayerSlot::new(FN1, 1), LayerSlot::new(FN2, 2)];

pub fn config() -> KeyboardConfig<'static> {
    KeyboardConfig {
        behavior: BehaviorConfig::default(),
        tap_hold_bindings: &TAP_HOLD_BINDINGS,
        indicator: IndicatorConfig {
            base_slot: Some(0),
            layer_slots: &LAYER_SLOTS,
            caps_lock_slot: Some(3),
        },
    }
}
