use crate::event::KeyPos;
use crate::keycode::KeyCode;
use crate::layer::LayerState;

/// Keymap represents the stack of layers.
///
/// The conventions of keymap are:
/// - Layer 0 is the base layer, it's always active
/// - A higher active layer wins
/// - [`KeyCode::TRANSPARENT`] falls through to the next active layer below
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    layers: &'a [[[KeyCode; COL]; ROW]; NUM_LAYER],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub const fn new(layers: &'a [[[KeyCode; COL]; ROW]; NUM_LAYER]) -> Self {
        Self { layers }
    }

    /// Keycode stored at `(row, col, layer)`, [`KeyCode::NO`] outside the keymap
    pub fn keycode_at(&self, row: usize, col: usize, layer: usize) -> KeyCode {
        self.layers
            .get(layer)
            .and_then(|l| l.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(KeyCode::NO)
    }

    /// Resolve the keycode of a key under the given layer state
    pub fn resolve(&self, pos: KeyPos, layers: LayerState) -> KeyCode {
        let (row, col) = (pos.row as usize, pos.col as usize);
        // Iterate from the highest active layer down, the lowest checked layer is the base layer
        let top = (layers.highest() as usize).min(NUM_LAYER.saturating_sub(1));
        for layer_idx in (0..=top).rev() {
            if layer_idx == 0 || layers.is_on(layer_idx as u8) {
                let keycode = self.keycode_at(row, col, layer_idx);
                if keycode != KeyCode::TRANSPARENT {
                    return keycode;
                }
            }
        }
        KeyCode::NO
    }
}
