use std::path::Path;

use serde::de;
use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

mod error;

pub use error::ConfigError;

/// Keyboard constants, read from the `[alpkb]` table of `keyboard.toml`
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConstantsConfig {
    /// Debounce window in ms
    #[serde_inline_default(5)]
    pub debounce_time: u16,
    /// Default tap/hold threshold, e.g. "200ms"
    #[serde_inline_default(DurationMillis(200))]
    pub tapping_term: DurationMillis,
    /// Settle delay after a matrix line is driven low, in ns
    #[serde_inline_default(250)]
    pub select_delay_ns: u32,
    /// Settle delay after a matrix line is released, in us
    #[serde_inline_default(30)]
    pub unselect_delay_us: u32,
    /// Maximum number of tap-hold keys held at the same time
    #[serde_inline_default(4)]
    pub tap_hold_max_num: usize,
    /// Number of layers tracked in the layer bitmask
    #[serde_inline_default(32)]
    pub layer_max_num: usize,
}

/// This separate Default impl is needed when `[alpkb]` section is not set in keyboard.toml
impl Default for ConstantsConfig {
    fn default() -> Self {
        Self {
            debounce_time: 5,
            tapping_term: DurationMillis(200),
            select_delay_ns: 250,
            unselect_delay_us: 30,
            tap_hold_max_num: 4,
            layer_max_num: 32,
        }
    }
}

impl ConstantsConfig {
    /// Check the ranges which can't be expressed in the types
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tap_hold_max_num == 0 || self.tap_hold_max_num > 32 {
            return Err(ConfigError::InvalidValue {
                field: "tap_hold_max_num".to_string(),
                value: self.tap_hold_max_num.to_string(),
                expected: "a number between 1 and 32".to_string(),
            });
        }
        if self.layer_max_num == 0 || self.layer_max_num > 32 {
            return Err(ConfigError::InvalidValue {
                field: "layer_max_num".to_string(),
                value: self.layer_max_num.to_string(),
                expected: "a number between 1 and 32".to_string(),
            });
        }
        // Ticks are 16 bit, a longer term can never elapse
        if self.tapping_term.0 == 0 || self.tapping_term.0 > u16::MAX as u64 / 2 {
            return Err(ConfigError::InvalidValue {
                field: "tapping_term".to_string(),
                value: format!("{}ms", self.tapping_term.0),
                expected: format!("a duration between 1ms and {}ms", u16::MAX / 2),
            });
        }
        Ok(())
    }
}

/// Configurations for alpkb keyboard.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct KeyboardTomlConfig {
    /// Tunable constants
    alpkb: Option<ConstantsConfig>,
}

impl KeyboardTomlConfig {
    pub fn from_toml_str(config: &str) -> Result<Self, ConfigError> {
        toml::from_str::<KeyboardTomlConfig>(config).map_err(|e| ConfigError::TomlParse {
            path: "<str>".to_string(),
            message: e.message().to_string(),
        })
    }

    pub fn from_path<P: AsRef<Path>>(config_toml_path: P) -> Result<Self, ConfigError> {
        let path = config_toml_path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&s).map_err(|e| match e {
            ConfigError::TomlParse { message, .. } => ConfigError::TomlParse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Validated constants, falling back to defaults when `[alpkb]` is absent
    pub fn constants(&self) -> Result<ConstantsConfig, ConfigError> {
        let constants = self.alpkb.clone().unwrap_or_default();
        constants.validate()?;
        Ok(constants)
    }
}

/// Duration in milliseconds
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct DurationMillis(#[serde(deserialize_with = "parse_duration_millis")] pub u64);

fn parse_duration_millis<'de, D: de::Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let input: String = de::Deserialize::deserialize(deserializer)?;
    let num = input.trim_end_matches(|c: char| !c.is_numeric());
    let unit = &input[num.len()..];
    let num: u64 = num.parse().map_err(|_| {
        de::Error::custom(format!(
            "Invalid number \"{num}\" in duration: number part must be a u64"
        ))
    })?;

    match unit {
        "s" => Ok(num * 1000),
        "ms" => Ok(num),
        other => Err(de::Error::custom(format!(
            "Invalid duration unit \"{other}\": unit part must be either \"s\" or \"ms\""
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = KeyboardTomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.constants().unwrap(), ConstantsConfig::default());
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let config = KeyboardTomlConfig::from_toml_str(
            r#"
            [alpkb]
            debounce_time = 8
            tapping_term = "250ms"
            "#,
        )
        .unwrap();
        let constants = config.constants().unwrap();
        assert_eq!(constants.debounce_time, 8);
        assert_eq!(constants.tapping_term, DurationMillis(250));
        assert_eq!(constants.select_delay_ns, 250);
        assert_eq!(constants.unselect_delay_us, 30);
        assert_eq!(constants.tap_hold_max_num, 4);
    }

    #[test]
    fn tapping_term_in_seconds() {
        let config = KeyboardTomlConfig::from_toml_str("[alpkb]\ntapping_term = \"1s\"\n").unwrap();
        assert_eq!(config.constants().unwrap().tapping_term, DurationMillis(1000));
    }

    #[test]
    fn bad_duration_unit_is_rejected() {
        let err = KeyboardTomlConfig::from_toml_str("[alpkb]\ntapping_term = \"200us\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse { .. }));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(KeyboardTomlConfig::from_toml_str("[alpkb]\ncombo_max_num = 3\n").is_err());
    }

    #[test]
    fn out_of_range_session_count() {
        let config = KeyboardTomlConfig::from_toml_str("[alpkb]\ntap_hold_max_num = 0\n").unwrap();
        let err = config.constants().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "tap_hold_max_num"));
    }

    #[test]
    fn tapping_term_must_fit_in_ticks() {
        let config = KeyboardTomlConfig::from_toml_str("[alpkb]\ntapping_term = \"40s\"\n").unwrap();
        assert!(config.constants().is_err());
    }
}
