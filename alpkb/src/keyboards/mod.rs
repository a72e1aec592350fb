//! Layer, tap-hold and light slot tables of supported keyboards.

pub mod ichii;
pub mod shirabiso;
pub mod solovan;
