//! Controllers drive output devices on the board from keyboard state.
//!
//! The devices themselves stay outside this crate and are reached through
//! the sink traits defined here.

pub mod led_indicator;

/// The light subsystem, addressed by slot.
///
/// A slot is a light or a group of lights which shows one piece of state, the
/// mapping from slots to LEDs and colors belongs to the implementor.
pub trait LightLayerSink {
    /// Light up or turn off a slot
    fn set_layer_state(&mut self, slot: u8, enabled: bool);
}

impl<T: LightLayerSink + ?Sized> LightLayerSink for &mut T {
    fn set_layer_state(&mut self, slot: u8, enabled: bool) {
        (**self).set_layer_state(slot, enabled);
    }
}
