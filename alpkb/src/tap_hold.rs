//! Layer-tap keys with eager layer activation.
//!
//! Pressing a trigger turns its layer on at once. On release the layer is
//! turned off again, and the bound tap keycode is sent as well when the key
//! was released within the tapping term and no other key was pressed while it
//! was held.
//!
//! "No other key was pressed" is tracked with a press counter: every press
//! bumps the counter, each open session remembers the value of its own press.

use heapless::LinearMap;

use crate::TAP_HOLD_MAX_NUM;
use crate::config::TapHoldConfig;
use crate::event::KeyEvent;
use crate::keycode::KeyCode;
use crate::timer::{MAX_INTERVAL_TICKS, Tick};

/// A trigger keycode acting as a layer key when held and as `tap` when tapped
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapHoldBinding {
    pub trigger: KeyCode,
    pub layer: u8,
    pub tap: KeyCode,
    /// Per-binding tapping term in ticks, the keyboard's term is used when `None`
    pub term: Option<u16>,
}

impl TapHoldBinding {
    pub const fn new(trigger: KeyCode, layer: u8, tap: KeyCode) -> Self {
        Self {
            trigger,
            layer,
            tap,
            term: None,
        }
    }

    /// Override the tapping term, saturated to half the tick range
    pub const fn with_term(self, term: u16) -> Self {
        let term = if term > MAX_INTERVAL_TICKS { MAX_INTERVAL_TICKS } else { term };
        Self {
            term: Some(term),
            ..self
        }
    }
}

/// An open session, from the press of a trigger to its release
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapHoldSession {
    pub pressed_at: Tick,
    /// Press counter value right after the trigger press
    pub press_seq: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapHoldDecision {
    // Not a trigger, continue processing as normal key event
    Ignore,
    // Trigger pressed, activate the layer
    LayerOn(u8),
    // Trigger tapped, send the tap keycode then deactivate the layer
    Tap { layer: u8, tap: KeyCode },
    // Trigger released after being used as a layer key
    LayerOff(u8),
}

pub struct TapHoldProcessor<'a> {
    bindings: &'a [TapHoldBinding],
    /// Open sessions keyed by trigger keycode
    sessions: LinearMap<KeyCode, TapHoldSession, TAP_HOLD_MAX_NUM>,
    press_seq: u32,
    tapping_term: u16,
}

impl<'a> TapHoldProcessor<'a> {
    pub fn new(bindings: &'a [TapHoldBinding], config: TapHoldConfig) -> Self {
        Self {
            bindings,
            sessions: LinearMap::new(),
            press_seq: 0,
            tapping_term: config.term_ticks(),
        }
    }

    fn binding(&self, trigger: KeyCode) -> Option<TapHoldBinding> {
        self.bindings.iter().find(|b| b.trigger == trigger).copied()
    }

    /// Whether the trigger has an open session
    pub fn is_held(&self, trigger: KeyCode) -> bool {
        self.sessions.contains_key(&trigger)
    }

    pub fn process(&mut self, event: &KeyEvent) -> TapHoldDecision {
        let binding = self.binding(event.keycode);
        if event.pressed {
            self.press_seq = self.press_seq.wrapping_add(1);
        }
        let Some(binding) = binding else {
            return TapHoldDecision::Ignore;
        };

        if event.pressed {
            self.on_press(event, binding)
        } else {
            self.on_release(event, binding)
        }
    }

    fn on_press(&mut self, event: &KeyEvent, binding: TapHoldBinding) -> TapHoldDecision {
        let session = TapHoldSession {
            pressed_at: event.time,
            press_seq: self.press_seq,
        };
        match self.sessions.insert(event.keycode, session) {
            Ok(Some(_)) => warn!("Tap-hold key {:?} pressed again before release", event.keycode),
            Ok(None) => {}
            Err(_) => warn!("Too many tap-hold keys held, {:?} can't be tapped", event.keycode),
        }
        debug!("Tap-hold key {:?} pressed, layer {} on", event.keycode, binding.layer);
        TapHoldDecision::LayerOn(binding.layer)
    }

    fn on_release(&mut self, event: &KeyEvent, binding: TapHoldBinding) -> TapHoldDecision {
        let Some(session) = self.sessions.remove(&event.keycode) else {
            warn!("Tap-hold key {:?} released without a press", event.keycode);
            return TapHoldDecision::LayerOff(binding.layer);
        };

        let term = binding.term.unwrap_or(self.tapping_term).min(MAX_INTERVAL_TICKS);
        let elapsed = event.time.elapsed_since(session.pressed_at);
        let interrupted = session.press_seq != self.press_seq;
        if !interrupted && elapsed < term {
            debug!("Tap-hold key {:?} tapped after {}ms", event.keycode, elapsed);
            TapHoldDecision::Tap {
                layer: binding.layer,
                tap: binding.tap,
            }
        } else {
            debug!(
                "Tap-hold key {:?} held for {}ms, interrupted: {}",
                event.keycode, elapsed, interrupted
            );
            TapHoldDecision::LayerOff(binding.layer)
        }
    }
}
