//! Keystroke output.

use crate::keycode::KeyCode;

/// The host facing side of the keyboard, usually the HID report writer.
///
/// Only basic keycodes reach a sink: layer and user keycodes are consumed
/// before.
pub trait KeystrokeSink {
    /// Add a key to the report
    fn register(&mut self, keycode: KeyCode);

    /// Remove a key from the report
    fn unregister(&mut self, keycode: KeyCode);

    /// Send a full press and release
    fn tap(&mut self, keycode: KeyCode) {
        self.register(keycode);
        self.unregister(keycode);
    }
}
