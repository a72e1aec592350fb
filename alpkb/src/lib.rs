#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod controller;
pub mod debounce;
pub mod driver;
pub mod event;
pub mod hid;
pub mod keyboard;
pub mod keyboards;
pub mod keycode;
pub mod keymap;
pub mod layer;
pub mod light;
pub mod matrix;
pub mod tap_hold;
pub mod timer;

pub use keyboard::{Keyboard, run_cycle};

// Include generated constants
include!(concat!(env!("OUT_DIR"), "/constants.rs"));
