pub mod sim_matrix;
pub mod test_macro;

use core::cell::Cell;

use alpkb::config::KeyboardConfig;
use alpkb::controller::LightLayerSink;
use alpkb::hid::KeystrokeSink;
use alpkb::keyboard::Keyboard;
use alpkb::keyboards::{ichii, shirabiso};
use alpkb::keycode::KeyCode;
use alpkb::matrix::MatrixRow;
use alpkb::timer::{Clock, Tick};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Clock moved by hand
#[derive(Default)]
pub struct ManualClock(Cell<u16>);

impl ManualClock {
    pub fn starting_at(tick: u16) -> Self {
        Self(Cell::new(tick))
    }

    pub fn advance(&self, ticks: u16) {
        self.0.set(self.0.get().wrapping_add(ticks));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Tick {
        Tick(self.0.get())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Press(KeyCode),
    Release(KeyCode),
}

pub fn press(keycode: KeyCode) -> Keystroke {
    Keystroke::Press(keycode)
}

pub fn release(keycode: KeyCode) -> Keystroke {
    Keystroke::Release(keycode)
}

/// Keystroke sink which keeps everything it's sent
#[derive(Default)]
pub struct RecordingKeys {
    pub strokes: Vec<Keystroke>,
}

impl KeystrokeSink for RecordingKeys {
    fn register(&mut self, keycode: KeyCode) {
        self.strokes.push(Keystroke::Press(keycode));
    }

    fn unregister(&mut self, keycode: KeyCode) {
        self.strokes.push(Keystroke::Release(keycode));
    }
}

/// Light sink which keeps the state of every slot and the publication history
#[derive(Default)]
pub struct RecordingLights {
    pub slots: [bool; 8],
    pub history: Vec<(u8, bool)>,
}

impl RecordingLights {
    pub fn lit(&self) -> Vec<u8> {
        (0..self.slots.len() as u8).filter(|s| self.slots[*s as usize]).collect()
    }
}

impl LightLayerSink for RecordingLights {
    fn set_layer_state(&mut self, slot: u8, enabled: bool) {
        self.slots[slot as usize] = enabled;
        self.history.push((slot, enabled));
    }
}

#[derive(Debug, Clone)]
pub struct TestKeyPress {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
    pub delay: u16, // Ticks before this key event
}

/// Feed a key sequence to the keyboard as debounced matrix changes, returns the keystrokes sent
pub fn run_key_sequence<const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keyboard: &mut Keyboard<'_, ROW, COL, NUM_LAYER>,
    key_sequence: &[TestKeyPress],
    lights: &mut RecordingLights,
) -> Vec<Keystroke> {
    run_key_sequence_from(keyboard, key_sequence, lights, Tick(0))
}

pub fn run_key_sequence_from<const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keyboard: &mut Keyboard<'_, ROW, COL, NUM_LAYER>,
    key_sequence: &[TestKeyPress],
    lights: &mut RecordingLights,
    start: Tick,
) -> Vec<Keystroke> {
    run_key_sequence_on(keyboard, &mut [0; ROW], key_sequence, lights, start)
}

/// Like [`run_key_sequence_from`], continuing from the keys held in `matrix`.
///
/// `matrix` is left holding the keys still pressed, so a later call picks up where this one ended.
pub fn run_key_sequence_on<const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    keyboard: &mut Keyboard<'_, ROW, COL, NUM_LAYER>,
    matrix: &mut [MatrixRow; ROW],
    key_sequence: &[TestKeyPress],
    lights: &mut RecordingLights,
    start: Tick,
) -> Vec<Keystroke> {
    let mut keys = RecordingKeys::default();
    let mut now = start;
    for key in key_sequence {
        now = now.wrapping_add(key.delay);
        let bit = 1 << key.col;
        if key.pressed {
            matrix[key.row as usize] |= bit;
        } else {
            matrix[key.row as usize] &= !bit;
        }
        keyboard.process_matrix(matrix, now, &mut keys, lights);
    }
    keys.strokes
}

const TRNS: KeyCode = KeyCode::TRANSPARENT;
const NO: KeyCode = KeyCode::NO;

#[rustfmt::skip]
pub static ICHII_KEYMAP: [[[KeyCode; 5]; 3]; ichii::NUM_LAYER] = [
    [
        [KeyCode::Q, KeyCode::W, KeyCode::E, KeyCode::R, KeyCode::T],
        [KeyCode::A, KeyCode::S, KeyCode::D, KeyCode::F, KeyCode::G],
        [KeyCode::LEFT_SHIFT, ichii::L1_SPC, NO, ichii::L2_SPC, KeyCode::BACKSPACE],
    ],
    [
        [KeyCode::DIGIT_1, KeyCode::DIGIT_2, KeyCode::DIGIT_3, KeyCode::DIGIT_4, KeyCode::DIGIT_5],
        [TRNS, KeyCode::LEFT_BRACKET, KeyCode::MINUS, KeyCode::EQUAL, KeyCode::QUOTE],
        [TRNS, TRNS, TRNS, TRNS, KeyCode::DELETE],
    ],
    [
        [KeyCode::PAGE_UP, KeyCode::HOME, KeyCode::UP, KeyCode::END, TRNS],
        [KeyCode::CAPS_LOCK, KeyCode::LEFT, KeyCode::DOWN, KeyCode::RIGHT, TRNS],
        [TRNS, TRNS, TRNS, TRNS, TRNS],
    ],
];

#[rustfmt::skip]
pub static SHIRABISO_KEYMAP: [[[KeyCode; 5]; 3]; shirabiso::NUM_LAYER] = [
    [
        [KeyCode::Q, KeyCode::W, KeyCode::E, KeyCode::R, KeyCode::T],
        [KeyCode::A, KeyCode::S, KeyCode::D, KeyCode::F, KeyCode::G],
        [shirabiso::MO_L2, shirabiso::L1_SPC, shirabiso::L1_SPC, shirabiso::MO_L2, KeyCode::BACKSPACE],
    ],
    [
        [KeyCode::DIGIT_1, KeyCode::DIGIT_2, KeyCode::DIGIT_3, KeyCode::DIGIT_4, KeyCode::DIGIT_5],
        [TRNS, TRNS, TRNS, TRNS, TRNS],
        [TRNS, TRNS, TRNS, TRNS, KeyCode::DELETE],
    ],
    [
        [TRNS, KeyCode::PAGE_UP, KeyCode::UP, KeyCode::HOME, TRNS],
        [TRNS, KeyCode::LEFT, KeyCode::DOWN, KeyCode::RIGHT, TRNS],
        [TRNS, TRNS, TRNS, TRNS, TRNS],
    ],
    [
        [KeyCode::F1, KeyCode::F2, KeyCode::F3, KeyCode::F4, KeyCode::F5],
        [KeyCode::CAPS_LOCK, TRNS, TRNS, TRNS, TRNS],
        [TRNS, TRNS, TRNS, TRNS, TRNS],
    ],
];

pub fn create_ichii_keyboard() -> Keyboard<'static, 3, 5, { ichii::NUM_LAYER }> {
    Keyboard::new(&ICHII_KEYMAP, ichii::config())
}

pub fn create_ichii_keyboard_with_config(config: KeyboardConfig<'static>) -> Keyboard<'static, 3, 5, { ichii::NUM_LAYER }> {
    Keyboard::new(&ICHII_KEYMAP, config)
}

pub fn create_shirabiso_keyboard() -> Keyboard<'static, 3, 5, { shirabiso::NUM_LAYER }> {
    Keyboard::new(&SHIRABISO_KEYMAP, shirabiso::config())
}
