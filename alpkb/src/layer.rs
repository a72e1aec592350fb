//! Layer activation state.

use crate::LAYER_MAX_NUM;

/// Bitmask of active layers, bit `n` set when layer `n` is on.
///
/// Layer 0 is the base layer and is never tracked here, it's always active.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    fn valid(layer: u8) -> bool {
        if (layer as usize) < LAYER_MAX_NUM {
            true
        } else {
            warn!("Not a valid layer {}, only {} layers are supported", layer, LAYER_MAX_NUM);
            false
        }
    }

    /// Activate given layer
    pub fn on(&mut self, layer: u8) {
        if Self::valid(layer) {
            self.0 |= 1 << layer;
        }
    }

    /// Deactivate given layer
    pub fn off(&mut self, layer: u8) {
        if Self::valid(layer) {
            self.0 &= !(1 << layer);
        }
    }

    pub fn set(&mut self, layer: u8, enabled: bool) {
        if enabled { self.on(layer) } else { self.off(layer) }
    }

    pub const fn is_on(self, layer: u8) -> bool {
        (layer as usize) < LAYER_MAX_NUM && self.0 & (1 << layer) != 0
    }

    /// Highest active layer, 0 when nothing is on
    pub const fn highest(self) -> u8 {
        if self.0 == 0 { 0 } else { (31 - self.0.leading_zeros()) as u8 }
    }

    /// Apply a tri-layer policy, see [`TriLayer`]
    pub fn update_tri_layer(&mut self, tri_layer: &TriLayer) {
        let adjust = self.is_on(tri_layer.lower) && self.is_on(tri_layer.upper);
        self.set(tri_layer.adjust, adjust);
    }
}

/// `adjust` is on exactly when both `lower` and `upper` are on
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriLayer {
    pub lower: u8,
    pub upper: u8,
    pub adjust: u8,
}

impl TriLayer {
    pub const fn new(lower: u8, upper: u8, adjust: u8) -> Self {
        Self { lower, upper, adjust }
    }
}
