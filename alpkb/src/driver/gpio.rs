use embedded_hal::digital::StatefulOutputPin;

use crate::config::LightPinConfig;
use crate::controller::LightLayerSink;

/// The gpio driver is a wrapper for the embedded-hal digital output pin trait.
/// It wraps the low-active and high-active pins, and provides a way to set the pin state
pub(crate) struct OutputController<P: StatefulOutputPin> {
    pin: P,
    low_active: bool,
}

impl<P: StatefulOutputPin> OutputController<P> {
    pub fn new(pin: P, low_active: bool) -> Self {
        Self { pin, low_active }
    }

    pub fn set_active(&mut self, active: bool) {
        // Low-active pins are lit by a low level
        if active != self.low_active {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
    }

    /// Check if the GPIO pin is active
    pub fn is_active(&mut self) -> Result<bool, P::Error> {
        if self.low_active {
            self.pin.is_set_low()
        } else {
            self.pin.is_set_high()
        }
    }
}

/// Light slots shown by single LEDs on gpio pins.
///
/// Several pins may show the same slot, slots without a pin are ignored.
pub struct GpioLightSink<P: StatefulOutputPin, const N: usize> {
    lights: [(u8, OutputController<P>); N],
}

impl<P: StatefulOutputPin, const N: usize> GpioLightSink<P, N> {
    pub fn new(pins: [LightPinConfig<P>; N]) -> Self {
        Self {
            lights: pins.map(|c| (c.slot, OutputController::new(c.pin, c.low_active))),
        }
    }

    /// Whether the light of a slot is on, `None` when no pin shows the slot
    pub fn is_lit(&mut self, slot: u8) -> Option<bool> {
        self.lights
            .iter_mut()
            .find(|(s, _)| *s == slot)
            .map(|(_, light)| light.is_active().unwrap_or_default())
    }
}

impl<P: StatefulOutputPin, const N: usize> LightLayerSink for GpioLightSink<P, N> {
    fn set_layer_state(&mut self, slot: u8, enabled: bool) {
        for (_, light) in self.lights.iter_mut().filter(|(s, _)| *s == slot) {
            light.set_active(enabled);
        }
    }
}
