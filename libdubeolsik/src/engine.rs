//! Dubeolsik keyboard engine for libdubeolsik
//!
//! Wraps the core `ImeEngine` and translates physical QWERTY key presses to
//! jamo through the Dubeolsik key map while in Hangul mode.

use libhangul_core::{ImeContext, ImeEngine, InputMode, KeyEvent, KeyResult};
use tracing::debug;

use crate::config::DubeolsikConfig;
use crate::keymap;

/// Public engine for libdubeolsik
#[derive(Debug, Clone)]
pub struct Engine {
    ime: ImeEngine,
    latin_keys: bool,
}

impl Engine {
    /// Construct an Engine from a layout config.
    pub fn new(config: DubeolsikConfig) -> Self {
        let mode = if config.start_in_hangul {
            InputMode::Hangul
        } else {
            InputMode::Latin
        };
        let latin_keys = config.latin_keys;
        Self {
            ime: ImeEngine::with_mode(config.into_base(), mode),
            latin_keys,
        }
    }

    /// Get a reference to the context for reading IME state.
    pub fn context(&self) -> &ImeContext {
        self.ime.context()
    }

    /// Get the wrapped core engine.
    pub fn ime(&self) -> &ImeEngine {
        &self.ime
    }

    pub fn ime_mut(&mut self) -> &mut ImeEngine {
        &mut self.ime
    }

    pub fn mode(&self) -> InputMode {
        self.ime.mode()
    }

    /// Process a key event, translating QWERTY characters in Hangul mode.
    pub fn process_key(&mut self, key: KeyEvent) -> KeyResult {
        let key = match key {
            KeyEvent::Char(ch) if self.latin_keys && self.ime.mode() == InputMode::Hangul => {
                match keymap::jamo_for_key(ch) {
                    Some(jamo) => {
                        debug!(key = %ch, %jamo, "key mapped");
                        KeyEvent::Char(jamo)
                    }
                    None => key,
                }
            }
            _ => key,
        };
        self.ime.process_key(key)
    }

    /// Feed a string of key presses. Space and newline become the Space and
    /// Enter keys, backspace (U+0008) the Backspace key.
    pub fn type_keys(&mut self, keys: &str) {
        for ch in keys.chars() {
            let key = match ch {
                ' ' => KeyEvent::Space,
                '\n' => KeyEvent::Enter,
                '\u{8}' => KeyEvent::Backspace,
                _ => KeyEvent::Char(ch),
            };
            self.process_key(key);
        }
    }

    /// Commit the uncommitted text and return it.
    pub fn commit(&mut self) -> String {
        self.ime.commit()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DubeolsikConfig::default())
    }
}
