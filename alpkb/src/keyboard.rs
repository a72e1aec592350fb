use crate::config::KeyboardConfig;
use crate::controller::LightLayerSink;
use crate::controller::led_indicator::LayerIndicatorController;
use crate::event::{KeyEvent, KeyPos};
use crate::hid::KeystrokeSink;
use crate::keycode::KeyCode;
use crate::keymap::KeyMap;
use crate::layer::{LayerState, TriLayer};
use crate::light::LedIndicator;
use crate::matrix::{MatrixRow, MatrixTrait, col_bit};
use crate::tap_hold::{TapHoldDecision, TapHoldProcessor};
use crate::timer::{Clock, Tick};

pub struct Keyboard<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Keymap
    keymap: KeyMap<'a, ROW, COL, NUM_LAYER>,

    /// Current state of each layer
    layers: LayerState,

    tri_layer: Option<TriLayer>,

    /// Layer-tap keys
    tap_hold: TapHoldProcessor<'a>,

    /// Light slots showing the layer and lock state
    indicator: LayerIndicatorController<'a>,

    /// Debounced matrix of the last processed scan
    last_matrix: [MatrixRow; ROW],

    /// Keycode each held key resolved to when it was pressed
    pressed_keycodes: [[KeyCode; COL]; ROW],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keyboard<'a, ROW, COL, NUM_LAYER> {
    pub fn new(keymap: &'a [[[KeyCode; COL]; ROW]; NUM_LAYER], config: KeyboardConfig<'a>) -> Self {
        Keyboard {
            keymap: KeyMap::new(keymap),
            layers: LayerState::new(),
            tri_layer: config.behavior.tri_layer,
            tap_hold: TapHoldProcessor::new(config.tap_hold_bindings, config.behavior.tap_hold),
            indicator: LayerIndicatorController::new(config.indicator),
            last_matrix: [0; ROW],
            pressed_keycodes: [[KeyCode::NO; COL]; ROW],
        }
    }

    /// Light the base slot and publish the initial layer state
    pub fn init(&mut self, lights: &mut impl LightLayerSink) {
        self.indicator.init(lights);
        self.indicator.on_layer_state(self.layers, lights);
    }

    pub fn layer_state(&self) -> LayerState {
        self.layers
    }

    pub fn indicator(&self) -> &LayerIndicatorController<'a> {
        &self.indicator
    }

    /// Process every key which changed since the last processed matrix, in row then column order
    pub fn process_matrix(
        &mut self,
        debounced: &[MatrixRow],
        now: Tick,
        keys: &mut impl KeystrokeSink,
        lights: &mut impl LightLayerSink,
    ) {
        for row in 0..ROW {
            let current = debounced.get(row).copied().unwrap_or(0);
            let changed = current ^ self.last_matrix[row];
            if changed == 0 {
                continue;
            }
            for col in 0..COL {
                if changed & col_bit(col) != 0 {
                    let pos = KeyPos::new(row as u8, col as u8);
                    self.process_key(pos, current & col_bit(col) != 0, now, keys, lights);
                }
            }
            self.last_matrix[row] = current;
        }
    }

    fn process_key(
        &mut self,
        pos: KeyPos,
        pressed: bool,
        now: Tick,
        keys: &mut impl KeystrokeSink,
        lights: &mut impl LightLayerSink,
    ) {
        let slot = &mut self.pressed_keycodes[pos.row as usize][pos.col as usize];
        let keycode = if pressed {
            *slot = self.keymap.resolve(pos, self.layers);
            *slot
        } else {
            // Releasing a pressed key, use the keycode resolved at press
            core::mem::replace(slot, KeyCode::NO)
        };
        trace!("Key {:?} at {:?}, pressed: {}", keycode, pos, pressed);

        self.process_event(
            KeyEvent {
                keycode,
                pressed,
                time: now,
            },
            keys,
            lights,
        );
    }

    /// Process a resolved key event
    pub fn process_event(
        &mut self,
        event: KeyEvent,
        keys: &mut impl KeystrokeSink,
        lights: &mut impl LightLayerSink,
    ) {
        // Tap-hold sees every event, presses of other keys decide whether a trigger was tapped
        match self.tap_hold.process(&event) {
            TapHoldDecision::Ignore => {}
            TapHoldDecision::LayerOn(layer) => return self.layer_on(layer, lights),
            TapHoldDecision::Tap { layer, tap } => {
                keys.tap(tap);
                return self.layer_off(layer, lights);
            }
            TapHoldDecision::LayerOff(layer) => return self.layer_off(layer, lights),
        }

        let keycode = event.keycode;
        if let Some(layer) = keycode.momentary_layer() {
            if event.pressed {
                self.layer_on(layer, lights);
            } else {
                self.layer_off(layer, lights);
            }
        } else if keycode.is_user() {
            debug!("No behavior bound to user keycode {:?}", keycode);
        } else if keycode.is_basic() {
            if event.pressed {
                keys.register(keycode);
            } else {
                keys.unregister(keycode);
            }
        }
    }

    /// Forward the host's lock state to the indicator
    pub fn set_led_indicator(&mut self, leds: LedIndicator, lights: &mut impl LightLayerSink) {
        debug!("Host lock state: {:?}", leds);
        self.indicator.on_led_indicator(leds, lights);
    }

    /// Activate given layer
    pub fn layer_on(&mut self, layer: u8, lights: &mut impl LightLayerSink) {
        self.layers.on(layer);
        self.apply_layer_state(lights);
    }

    /// Deactivate given layer
    pub fn layer_off(&mut self, layer: u8, lights: &mut impl LightLayerSink) {
        self.layers.off(layer);
        self.apply_layer_state(lights);
    }

    fn apply_layer_state(&mut self, lights: &mut impl LightLayerSink) {
        if let Some(tri_layer) = self.tri_layer {
            self.layers.update_tri_layer(&tri_layer);
        }
        debug!("Layer state: {:#b}", self.layers.bits());
        self.indicator.on_layer_state(self.layers, lights);
    }
}

/// One pass of the main loop: scan the matrix then process what changed.
///
/// Returns whether the raw matrix changed.
pub fn run_cycle<M: MatrixTrait, const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    matrix: &mut M,
    keyboard: &mut Keyboard<'_, ROW, COL, NUM_LAYER>,
    clock: &impl Clock,
    keys: &mut impl KeystrokeSink,
    lights: &mut impl LightLayerSink,
) -> bool {
    let now = clock.now();
    let changed = matrix.scan(now);
    keyboard.process_matrix(matrix.debounced(), now, keys, lights);
    changed
}
