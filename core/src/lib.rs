//! libhangul-core
//!
//! Hangul syllable composition and IME plumbing shared by layout crates
//! (libdubeolsik).
//!
//! Public API:
//! - `compose` - Append one jamo to a text buffer, recomposing its last syllable
//! - `Syllable` - Lead/vowel/trail indices of a composed syllable
//! - `InputBuffer` - Composed text accumulated between commits
//! - `ImeEngine` - Key event processing on top of an `ImeSession`
//! - `Assistant` - Text generation collaborator with fixed fallbacks
//! - `Config` - Configuration and feature flags
use serde::{Deserialize, Serialize};

pub mod jamo;

pub mod syllable;
pub use syllable::Syllable;

pub mod composer;
pub use composer::{compose, compose_all, compose_with_action, Action};

pub mod input_buffer;
pub use input_buffer::InputBuffer;

pub mod context;
pub use context::ImeContext;

pub mod session;
pub use session::{ImeSession, InputMode};

pub mod ime_engine;
pub use ime_engine::{ImeEngine, KeyEvent, KeyResult};

pub mod assistant;
pub use assistant::{Assistant, AssistantConfig, Generator};

/// Generic configuration for IME core functionality.
///
/// Layout-specific options (key maps and the like) belong in the layout
/// crate's config, which flattens this one.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    // Full/Half Width Settings
    /// Convert ASCII passthrough characters to full-width forms
    pub full_width_enabled: bool,

    /// Enter commits the buffer; when false Enter inserts a newline
    pub commit_on_enter: bool,

    /// NFC-normalize committed text
    pub normalize_commit: bool,

    /// Text generation collaborator settings
    pub assistant: AssistantConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            full_width_enabled: false,
            commit_on_enter: true,
            normalize_commit: true,
            assistant: AssistantConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
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

    // ========== Full/Half Width Management ==========

    /// Toggle full-width mode on/off.
    pub fn toggle_fullwidth(&mut self) {
        self.full_width_enabled = !self.full_width_enabled;
    }

    /// Set full-width mode explicitly.
    pub fn set_fullwidth(&mut self, enabled: bool) {
        self.full_width_enabled = enabled;
    }

    /// Check if full-width mode is enabled.
    pub fn is_fullwidth(&self) -> bool {
        self.full_width_enabled
    }
}

/// Utility helpers.
pub mod utils {
    use unicode_normalization::UnicodeNormalization;

    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        nfc(s).trim().to_string()
    }

    /// NFC-normalize without trimming.
    pub fn nfc(s: &str) -> String {
        s.nfc().collect::<String>()
    }

    /// Convert one ASCII character to its full-width equivalent.
    ///
    /// Space becomes the ideographic space; non-ASCII passes through.
    pub fn fullwidth_char(ch: char) -> char {
        match ch {
            ' ' => '\u{3000}',
            // ASCII printable range (0x21-0x7E) -> Full-width (0xFF01-0xFF5E)
            '!'..='~' => char::from_u32(ch as u32 - 0x21 + 0xFF01).unwrap_or(ch),
            _ => ch,
        }
    }

    /// Convert ASCII characters to full-width equivalents.
    pub fn to_fullwidth(s: &str) -> String {
        s.chars().map(fullwidth_char).collect()
    }

    /// Convert full-width characters back to ASCII (half-width).
    pub fn to_halfwidth(s: &str) -> String {
        s.chars()
            .map(|ch| match ch {
                // Ideographic space -> ASCII space
                '\u{3000}' => ' ',
                // Full-width range (0xFF01-0xFF5E) -> ASCII (0x21-0x7E)
                '\u{FF01}'..='\u{FF5E}' => {
                    char::from_u32(ch as u32 - 0xFF01 + 0x21).unwrap_or(ch)
                }
                _ => ch,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_toml_roundtrip() {
        let mut cfg = Config::default();
        cfg.full_width_enabled = true;
        cfg.assistant.temperature = 0.5;
        let text = cfg.to_toml_string().unwrap();
        let back = Config::from_toml_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn config_partial_toml_uses_defaults() {
        let cfg = Config::from_toml_str("commit_on_enter = false\n").unwrap();
        assert!(!cfg.commit_on_enter);
        assert!(cfg.normalize_commit);
        assert_eq!(cfg.assistant, AssistantConfig::default());
    }

    #[test]
    fn config_file_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "libhangul_core_config_{}.toml",
            std::process::id()
        ));
        let mut cfg = Config::default();
        cfg.toggle_fullwidth();
        cfg.save_toml(&path).expect("save config");
        let loaded = Config::load_toml(&path).expect("load config");
        let _ = std::fs::remove_file(&path);
        assert!(loaded.is_fullwidth());
    }

    #[test]
    fn fullwidth_conversions() {
        assert_eq!(utils::to_fullwidth("a1 !"), "ａ１\u{3000}！");
        assert_eq!(utils::to_halfwidth("ａ１\u{3000}！"), "a1 !");
        assert_eq!(utils::to_fullwidth("한글"), "한글");
    }

    #[test]
    fn normalize_composes_conjoining_jamo() {
        // U+1112 U+1161 U+11AB is the conjoining spelling of 한
        assert_eq!(utils::normalize(" \u{1112}\u{1161}\u{11AB} "), "한");
        assert_eq!(utils::nfc("가 "), "가 ");
    }
}
