use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

#[cfg(feature = "rp2040")]
pub mod rp;

/// Pin that can be switched between input and output.
///
/// A matrix line is either the driver of a scan pass or one of its sensors,
/// so every line of a dual-direction matrix must be able to take both roles.
pub trait FlexPin: ErrorType + InputPin + OutputPin {
    /// Switch to input with the internal pull-up enabled, the idle level is high
    fn set_as_input(&mut self);

    /// Switch to output
    fn set_as_output(&mut self);
}

/// Matrix line operations which can't be torn by an interrupt.
///
/// Direction and level are changed inside one critical section, otherwise an
/// interrupt arriving between the two writes could leave the line briefly
/// driven at the wrong level and a neighbouring pass would read a ghost press.
pub trait AtomicFlexPin: FlexPin {
    /// Drive the line low
    fn drive_low(&mut self) {
        critical_section::with(|_| {
            self.set_as_output();
            self.set_low().ok();
        });
    }

    /// Release the line, it floats high through the pull-up
    fn float_high(&mut self) {
        critical_section::with(|_| self.set_as_input());
    }

    /// A line reads active when it's pulled low. A read error counts as inactive.
    fn is_active(&mut self) -> bool {
        self.is_low().unwrap_or_default()
    }
}

impl<P: FlexPin> AtomicFlexPin for P {}
