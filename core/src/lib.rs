//! libshuangpin-core
//!
//! Syllable inventory, character dictionary and trainer configuration shared
//! by the shuangpin scheme crate.
//!
//! Public API:
//! - `Syllable` - A (lead, follow) pair with its canonical spelling
//! - `SyllableInventory` - Canonical set of valid syllables; ground truth
//!   for every code a scheme derives
//! - `CharacterDict` - Character ↔ pronunciation dictionary lookup
//! - `Config` - Trainer configuration and feature flags

use serde::{Deserialize, Serialize};

pub mod syllable;
pub use syllable::Syllable;

pub mod inventory;
pub use inventory::{InventorySummary, SyllableInventory};

pub mod dictionary;
pub use dictionary::{CharacterDict, DictTable};

/// Trainer configuration.
///
/// These fields mirror the persisted user settings of the trainer UI. The
/// codec itself is configuration-free; the hosting layer reads `scheme` to
/// decide which scheme to request from the registry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Config {
    /// Name of the active shuangpin scheme (registry falls back to the
    /// first built-in when the name is unknown).
    pub scheme: String,

    /// Clear the input display after each completed syllable.
    pub enable_auto_clear: bool,

    /// Highlight the keys that can still complete the current syllable.
    pub enable_key_hint: bool,

    /// Show the full-pinyin spelling of the current target.
    pub enable_pinyin_hint: bool,

    /// UI theme ("auto", "light" or "dark").
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme: "XiaoHe".to_string(),
            enable_auto_clear: true,
            enable_key_hint: true,
            enable_pinyin_hint: true,
            theme: "auto".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_toml_round_trip() {
        let mut config = Config::default();
        config.scheme = "Microsoft".to_string();
        config.theme = "dark".to_string();

        let text = config.to_toml_string().unwrap();
        let back = Config::from_toml_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn config_defaults_to_first_builtin_scheme() {
        let config = Config::default();
        assert_eq!(config.scheme, "XiaoHe");
        assert!(config.enable_key_hint);
    }

    #[test]
    fn normalize_trims_and_recomposes() {
        // "e" + combining acute accent should recompose to a single char
        assert_eq!(utils::normalize("  e\u{0301}  "), "\u{00e9}");
    }
}
