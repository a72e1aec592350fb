//! shirabiso: split space bar with one layer-tap keycode on both halves and
//! an adjust layer reached by holding both layer keys.

use crate::config::{BehaviorConfig, KeyboardConfig};
use crate::controller::led_indicator::{IndicatorConfig, LayerSlot};
use crate::keycode::KeyCode;
use crate::layer::TriLayer;
use crate::tap_hold::TapHoldBinding;

pub const BASE: u8 = 0;
pub const L1: u8 = 1;
pub const L2: u8 = 2;
pub const NUM: u8 = 3;
pub const NUM_LAYER: usize = 4;

pub const L1_SPC: KeyCode = KeyCode::user(0);
/// Plain momentary key of the second layer
pub const MO_L2: KeyCode = KeyCode::momentary(L2);

pub static TAP_HOLD_BINDINGS: [TapHoldBinding; 1] = [TapHoldBinding::new(L1_SPC, L1, KeyCode::SPACE)];

pub static LAYER_SLOTS: [LayerSlot; 3] = [LayerSlot::new(L1, 1), LayerSlot::new(L2, 2), LayerSlot::new(NUM, 3)];

pub fn config() -> KeyboardConfig<'static> {
    KeyboardConfig {
        behavior: BehaviorConfig {
            tri_layer: Some(TriLayer::new(L1, L2, NUM)),
            ..Default::default()
        },
        tap_hold_bindings: &TAP_HOLD_BINDINGS,
        indicator: IndicatorConfig {
            base_slot: Some(0),
            layer_slots: &LAYER_SLOTS,
            caps_lock_slot: Some(4),
        },
    }
}
