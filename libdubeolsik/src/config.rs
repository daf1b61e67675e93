/// Dubeolsik-specific configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic options from `libhangul_core::Config` (flattened via serde)
/// - Whether QWERTY keys are translated through the Dubeolsik key map
/// - The input mode a new engine starts in
///
/// # Example
///
/// ```rust
/// use libdubeolsik::DubeolsikConfig;
///
/// let config = DubeolsikConfig::default();
/// let base_config = config.into_base();
/// assert!(base_config.commit_on_enter);
/// ```
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DubeolsikConfig {
    /// Base configuration fields (full width, commit behaviour, assistant)
    #[serde(flatten)]
    pub base: libhangul_core::Config,

    /// Translate Latin key presses (e.g. 'r') to jamo (ㄱ) in Hangul mode
    pub latin_keys: bool,

    /// Start in Hangul mode rather than Latin mode
    pub start_in_hangul: bool,
}

impl Default for DubeolsikConfig {
    fn default() -> Self {
        Self {
            base: libhangul_core::Config::default(),
            latin_keys: true,
            start_in_hangul: true,
        }
    }
}

impl DubeolsikConfig {
    /// Convert this config into the base config
    pub fn into_base(self) -> libhangul_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libhangul_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libhangul_core::Config {
        &mut self.base
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
