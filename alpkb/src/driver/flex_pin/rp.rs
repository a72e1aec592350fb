use embassy_rp::gpio::{Flex, Level, Pull};

use crate::driver::flex_pin::FlexPin;

impl<'d> FlexPin for Flex<'d> {
    fn set_as_input(&mut self) {
        self.set_pull(Pull::Up);
        self.set_as_input();
    }

    fn set_as_output(&mut self) {
        // Preload the output latch so the switch doesn't glitch high
        self.set_level(Level::Low);
        self.set_as_output();
    }
}
