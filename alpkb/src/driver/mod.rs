//! Pin level drivers.

pub mod flex_pin;
pub mod gpio;
