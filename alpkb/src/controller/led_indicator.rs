//! The controller which mirrors layer state and lock state onto light slots.

use super::LightLayerSink;
use crate::layer::LayerState;
use crate::light::LedIndicator;

/// Light slot showing one layer
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerSlot {
    pub layer: u8,
    pub slot: u8,
}

impl LayerSlot {
    pub const fn new(layer: u8, slot: u8) -> Self {
        Self { layer, slot }
    }
}

/// Which light slot shows what
#[derive(Clone, Copy, Debug, Default)]
pub struct IndicatorConfig<'a> {
    /// Slot lit once at startup and never turned off
    pub base_slot: Option<u8>,
    pub layer_slots: &'a [LayerSlot],
    /// Slot following the host's caps lock
    pub caps_lock_slot: Option<u8>,
}

/// Lit slots, bit `n` set when slot `n` is on
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorMask(u32);

impl IndicatorMask {
    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_lit(self, slot: u8) -> bool {
        slot < 32 && self.0 & (1 << slot) != 0
    }

    fn set(&mut self, slot: u8, enabled: bool) {
        if slot >= 32 {
            return;
        }
        if enabled {
            self.0 |= 1 << slot;
        } else {
            self.0 &= !(1 << slot);
        }
    }
}

pub struct LayerIndicatorController<'a> {
    config: IndicatorConfig<'a>,
    /// Last published state of every slot
    mask: IndicatorMask,
}

impl<'a> LayerIndicatorController<'a> {
    pub fn new(config: IndicatorConfig<'a>) -> Self {
        Self {
            config,
            mask: IndicatorMask::default(),
        }
    }

    /// Light the base slot, called once after the keyboard is initialized
    pub fn init(&mut self, sink: &mut impl LightLayerSink) {
        if let Some(slot) = self.config.base_slot {
            self.publish(slot, true, sink);
        }
    }

    /// Slots lit for a layer state
    pub fn indicator_mask(&self, layers: LayerState) -> IndicatorMask {
        let mut mask = IndicatorMask::default();
        if let Some(slot) = self.config.base_slot {
            mask.set(slot, true);
        }
        for layer_slot in self.config.layer_slots {
            if layers.is_on(layer_slot.layer) {
                mask.set(layer_slot.slot, true);
            }
        }
        mask
    }

    /// Publish every layer slot for a new layer state
    pub fn on_layer_state(&mut self, layers: LayerState, sink: &mut impl LightLayerSink) {
        for layer_slot in self.config.layer_slots {
            self.publish(layer_slot.slot, layers.is_on(layer_slot.layer), sink);
        }
    }

    /// Publish the caps lock slot for a new host lock state
    pub fn on_led_indicator(&mut self, leds: LedIndicator, sink: &mut impl LightLayerSink) {
        if let Some(slot) = self.config.caps_lock_slot {
            self.publish(slot, leds.caps_lock(), sink);
        }
    }

    /// Last published state of every slot
    pub fn mask(&self) -> IndicatorMask {
        self.mask
    }

    fn publish(&mut self, slot: u8, enabled: bool, sink: &mut impl LightLayerSink) {
        trace!("Light slot {} -> {}", slot, enabled);
        self.mask.set(slot, enabled);
        sink.set_layer_state(slot, enabled);
    }
}
