//! 16 bit keycodes.
//!
//! The low byte range `0x00..=0xFF` holds HID keyboard usages, layer and user
//! keycodes live in reserved ranges above it.

/// A keycode as stored in the keymap
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCode(pub u16);

/// First momentary layer keycode, `MO(0)`
const MOMENTARY_BASE: u16 = 0x5220;
const MOMENTARY_LAST: u16 = MOMENTARY_BASE + 0x1F;

impl KeyCode {
    /// First keycode reserved for keyboard specific behavior
    pub const USER_BASE: u16 = 0x7E00;

    pub const NO: KeyCode = KeyCode(0x00);
    /// Falls through to the next active layer below
    pub const TRANSPARENT: KeyCode = KeyCode(0x01);

    pub const A: KeyCode = KeyCode(0x04);
    pub const B: KeyCode = KeyCode(0x05);
    pub const C: KeyCode = KeyCode(0x06);
    pub const D: KeyCode = KeyCode(0x07);
    pub const E: KeyCode = KeyCode(0x08);
    pub const F: KeyCode = KeyCode(0x09);
    pub const G: KeyCode = KeyCode(0x0A);
    pub const H: KeyCode = KeyCode(0x0B);
    pub const I: KeyCode = KeyCode(0x0C);
    pub const J: KeyCode = KeyCode(0x0D);
    pub const K: KeyCode = KeyCode(0x0E);
    pub const L: KeyCode = KeyCode(0x0F);
    pub const M: KeyCode = KeyCode(0x10);
    pub const N: KeyCode = KeyCode(0x11);
    pub const O: KeyCode = KeyCode(0x12);
    pub const P: KeyCode = KeyCode(0x13);
    pub const Q: KeyCode = KeyCode(0x14);
    pub const R: KeyCode = KeyCode(0x15);
    pub const S: KeyCode = KeyCode(0x16);
    pub const T: KeyCode = KeyCode(0x17);
    pub const U: KeyCode = KeyCode(0x18);
    pub const V: KeyCode = KeyCode(0x19);
    pub const W: KeyCode = KeyCode(0x1A);
    pub const X: KeyCode = KeyCode(0x1B);
    pub const Y: KeyCode = KeyCode(0x1C);
    pub const Z: KeyCode = KeyCode(0x1D);

    pub const DIGIT_1: KeyCode = KeyCode(0x1E);
    pub const DIGIT_2: KeyCode = KeyCode(0x1F);
    pub const DIGIT_3: KeyCode = KeyCode(0x20);
    pub const DIGIT_4: KeyCode = KeyCode(0x21);
    pub const DIGIT_5: KeyCode = KeyCode(0x22);
    pub const DIGIT_6: KeyCode = KeyCode(0x23);
    pub const DIGIT_7: KeyCode = KeyCode(0x24);
    pub const DIGIT_8: KeyCode = KeyCode(0x25);
    pub const DIGIT_9: KeyCode = KeyCode(0x26);
    pub const DIGIT_0: KeyCode = KeyCode(0x27);

    pub const ENTER: KeyCode = KeyCode(0x28);
    pub const ESCAPE: KeyCode = KeyCode(0x29);
    pub const BACKSPACE: KeyCode = KeyCode(0x2A);
    pub const TAB: KeyCode = KeyCode(0x2B);
    pub const SPACE: KeyCode = KeyCode(0x2C);
    pub const MINUS: KeyCode = KeyCode(0x2D);
    pub const EQUAL: KeyCode = KeyCode(0x2E);
    pub const LEFT_BRACKET: KeyCode = KeyCode(0x2F);
    pub const RIGHT_BRACKET: KeyCode = KeyCode(0x30);
    pub const BACKSLASH: KeyCode = KeyCode(0x31);
    pub const SEMICOLON: KeyCode = KeyCode(0x33);
    pub const QUOTE: KeyCode = KeyCode(0x34);
    pub const GRAVE: KeyCode = KeyCode(0x35);
    pub const COMMA: KeyCode = KeyCode(0x36);
    pub const DOT: KeyCode = KeyCode(0x37);
    pub const SLASH: KeyCode = KeyCode(0x38);
    pub const CAPS_LOCK: KeyCode = KeyCode(0x39);

    pub const F1: KeyCode = KeyCode(0x3A);
    pub const F2: KeyCode = KeyCode(0x3B);
    pub const F3: KeyCode = KeyCode(0x3C);
    pub const F4: KeyCode = KeyCode(0x3D);
    pub const F5: KeyCode = KeyCode(0x3E);
    pub const F6: KeyCode = KeyCode(0x3F);
    pub const F7: KeyCode = KeyCode(0x40);
    pub const F8: KeyCode = KeyCode(0x41);
    pub const F9: KeyCode = KeyCode(0x42);
    pub const F10: KeyCode = KeyCode(0x43);
    pub const F11: KeyCode = KeyCode(0x44);
    pub const F12: KeyCode = KeyCode(0x45);

    pub const HOME: KeyCode = KeyCode(0x4A);
    pub const PAGE_UP: KeyCode = KeyCode(0x4B);
    pub const DELETE: KeyCode = KeyCode(0x4C);
    pub const END: KeyCode = KeyCode(0x4D);
    pub const PAGE_DOWN: KeyCode = KeyCode(0x4E);
    pub const RIGHT: KeyCode = KeyCode(0x4F);
    pub const LEFT: KeyCode = KeyCode(0x50);
    pub const DOWN: KeyCode = KeyCode(0x51);
    pub const UP: KeyCode = KeyCode(0x52);

    pub const LEFT_CTRL: KeyCode = KeyCode(0xE0);
    pub const LEFT_SHIFT: KeyCode = KeyCode(0xE1);
    pub const LEFT_ALT: KeyCode = KeyCode(0xE2);
    pub const LEFT_GUI: KeyCode = KeyCode(0xE3);
    pub const RIGHT_CTRL: KeyCode = KeyCode(0xE4);
    pub const RIGHT_SHIFT: KeyCode = KeyCode(0xE5);
    pub const RIGHT_ALT: KeyCode = KeyCode(0xE6);
    pub const RIGHT_GUI: KeyCode = KeyCode(0xE7);

    /// Momentary layer keycode, the layer stays on while the key is held
    pub const fn momentary(layer: u8) -> KeyCode {
        KeyCode(MOMENTARY_BASE + (layer as u16 & 0x1F))
    }

    /// The `n`th keyboard specific keycode
    pub const fn user(n: u16) -> KeyCode {
        KeyCode(Self::USER_BASE + n)
    }

    /// Keycodes which map to a HID keyboard usage
    pub const fn is_basic(self) -> bool {
        self.0 > Self::TRANSPARENT.0 && self.0 <= 0xFF
    }

    /// Layer of a momentary layer keycode
    pub const fn momentary_layer(self) -> Option<u8> {
        if self.0 >= MOMENTARY_BASE && self.0 <= MOMENTARY_LAST {
            Some((self.0 - MOMENTARY_BASE) as u8)
        } else {
            None
        }
    }

    pub const fn is_user(self) -> bool {
        self.0 >= Self::USER_BASE
    }
}
