use std::path::Path;
use std::{env, fs};

use alpkb_config::{ConstantsConfig, KeyboardTomlConfig};
use const_gen::*;

fn main() {
    // Ensure build.rs is re-run when files change
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=KEYBOARD_TOML_PATH");

    // Read keyboard.toml if it's present
    let user_toml = if let Ok(toml_path) = env::var("KEYBOARD_TOML_PATH") {
        println!("cargo:rerun-if-changed={toml_path}");
        KeyboardTomlConfig::from_path(&toml_path).unwrap_or_else(|e| panic!("❌ {e}"))
    } else {
        KeyboardTomlConfig::default()
    };

    let constants = user_toml
        .constants()
        .unwrap_or_else(|e| panic!("❌ Parse `keyboard.toml` error: {e}"));

    // Write to constants.rs file
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("constants.rs");
    fs::write(&dest_path, get_constants_str(constants)).expect("Failed to write constants.rs file");
}

fn get_constants_str(constants: ConstantsConfig) -> String {
    let tapping_term = constants.tapping_term.0 as u16;
    let constant_strs = [
        const_declaration!(pub(crate) DEBOUNCE_TIME = constants.debounce_time),
        const_declaration!(pub(crate) TAPPING_TERM = tapping_term),
        const_declaration!(pub(crate) MATRIX_SELECT_DELAY_NS = constants.select_delay_ns),
        const_declaration!(pub(crate) MATRIX_UNSELECT_DELAY_US = constants.unselect_delay_us),
        const_declaration!(pub(crate) TAP_HOLD_MAX_NUM = constants.tap_hold_max_num),
        const_declaration!(pub(crate) LAYER_MAX_NUM = constants.layer_max_num),
    ];

    constant_strs
        .into_iter()
        .map(|s| "#[allow(clippy::redundant_static_lifetimes)]\n".to_owned() + s.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
