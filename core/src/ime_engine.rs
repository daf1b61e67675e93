//! IME engine with session management and key event processing.
//!
//! The `ImeEngine` owns an `ImeSession` and translates key events into buffer
//! edits: typed symbols go through the composer, while backspace, space,
//! enter and escape are handled here, outside the composer.

use tracing::debug;

use crate::context::ImeContext;
use crate::session::{ImeSession, InputMode};
use crate::{utils, Config};

/// Key event types that the IME can process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Character input (jamo, punctuation, etc.)
    Char(char),
    /// Space key (finishes the current syllable)
    Space,
    /// Backspace key (removes the last character)
    Backspace,
    /// Enter/Return key (commit)
    Enter,
    /// Escape key (discard uncommitted text)
    Escape,
    /// 한/영 key (toggle Hangul and Latin input)
    ToggleMode,
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key was handled by the IME
    Handled,
    /// Key was not handled (pass through to application)
    NotHandled,
}

/// IME engine with session management.
///
/// # Example
///
/// ```
/// use libhangul_core::{Config, ImeEngine, KeyEvent};
///
/// let mut ime = ImeEngine::new(Config::default());
/// for ch in "ㅎㅏㄴㄱㅡㄹ".chars() {
///     ime.process_key(KeyEvent::Char(ch));
/// }
/// assert_eq!(ime.context().text, "한글");
///
/// ime.process_key(KeyEvent::Enter);
/// assert_eq!(ime.context().commit_text, "한글");
/// ```
#[derive(Debug, Clone)]
pub struct ImeEngine {
    session: ImeSession,
    context: ImeContext,
    config: Config,
}

impl ImeEngine {
    /// Create an engine starting in Hangul mode.
    pub fn new(config: Config) -> Self {
        Self::with_mode(config, InputMode::Hangul)
    }

    /// Create an engine starting in the given mode.
    pub fn with_mode(config: Config, mode: InputMode) -> Self {
        let session = ImeSession::with_mode(mode);
        let mut context = ImeContext::new();
        session.sync_to_context(&mut context);
        Self {
            session,
            context,
            config,
        }
    }

    /// Get a reference to the context for reading IME state.
    pub fn context(&self) -> &ImeContext {
        &self.context
    }

    /// Get a mutable reference to the context.
    pub fn context_mut(&mut self) -> &mut ImeContext {
        &mut self.context
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &ImeSession {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Current input mode.
    pub fn mode(&self) -> InputMode {
        self.session.mode()
    }

    /// Discard uncommitted text and any pending commit.
    pub fn reset(&mut self) {
        self.session.clear();
        self.context.commit_text.clear();
        self.session.sync_to_context(&mut self.context);
    }

    /// Move the buffer into `commit_text` and return it.
    pub fn commit(&mut self) -> String {
        let raw = self.session.input_buffer_mut().take();
        let text = if self.config.normalize_commit {
            utils::nfc(&raw)
        } else {
            raw
        };
        debug!(chars = text.chars().count(), "commit");
        self.context.commit_text = text.clone();
        self.session.sync_to_context(&mut self.context);
        text
    }

    /// Process a key event and update IME state.
    ///
    /// After calling this, the platform should read `context()` to update
    /// the UI. Returns `KeyResult::NotHandled` when the key should reach the
    /// application instead (e.g. backspace on an empty buffer).
    pub fn process_key(&mut self, key: KeyEvent) -> KeyResult {
        // Clear commit text from previous key
        self.context.commit_text.clear();

        let result = match key {
            KeyEvent::ToggleMode => {
                let mode = self.session.toggle_mode();
                debug!(?mode, "input mode switched");
                KeyResult::Handled
            }
            KeyEvent::Char(ch) => {
                self.insert(ch);
                KeyResult::Handled
            }
            KeyEvent::Space => {
                self.insert(' ');
                KeyResult::Handled
            }
            KeyEvent::Backspace => match self.session.input_buffer_mut().backspace() {
                Some(_) => KeyResult::Handled,
                None => KeyResult::NotHandled,
            },
            KeyEvent::Enter if !self.config.commit_on_enter => {
                self.session.input_buffer_mut().push_raw('\n');
                KeyResult::Handled
            }
            KeyEvent::Enter => {
                if self.session.input_buffer().is_empty() {
                    KeyResult::NotHandled
                } else {
                    self.commit();
                    KeyResult::Handled
                }
            }
            KeyEvent::Escape => {
                if self.session.input_buffer().is_empty() {
                    KeyResult::NotHandled
                } else {
                    self.session.clear();
                    KeyResult::Handled
                }
            }
        };

        self.session.sync_to_context(&mut self.context);
        result
    }

    fn insert(&mut self, ch: char) {
        let ch = if self.config.full_width_enabled && ch != ' ' {
            utils::fullwidth_char(ch)
        } else {
            ch
        };
        match self.session.mode() {
            InputMode::Hangul => {
                let action = self.session.input_buffer_mut().push(ch);
                debug!(%ch, %action, "key composed");
            }
            InputMode::Latin => self.session.input_buffer_mut().push_raw(ch),
        }
    }
}

impl Default for ImeEngine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_all(ime: &mut ImeEngine, keys: &str) {
        for ch in keys.chars() {
            let key = if ch == ' ' {
                KeyEvent::Space
            } else {
                KeyEvent::Char(ch)
            };
            assert_eq!(ime.process_key(key), KeyResult::Handled);
        }
    }

    #[test]
    fn composes_typed_jamo() {
        let mut ime = ImeEngine::default();
        type_all(&mut ime, "ㅇㅏㄴㄴㅕㅇ ㅎㅏㅅㅔㅇㅛ");
        assert_eq!(ime.context().text, "안녕 하세요");
        assert_eq!(ime.context().auxiliary_text, "한");
    }

    #[test]
    fn enter_commits_buffer() {
        let mut ime = ImeEngine::default();
        type_all(&mut ime, "ㄱㅏ");
        assert_eq!(ime.process_key(KeyEvent::Enter), KeyResult::Handled);
        assert_eq!(ime.context().commit_text, "가");
        assert!(ime.context().text.is_empty());

        // Next key clears the pending commit
        ime.process_key(KeyEvent::Char('ㄴ'));
        assert!(ime.context().commit_text.is_empty());
        assert_eq!(ime.process_key(KeyEvent::Escape), KeyResult::Handled);
        assert_eq!(ime.process_key(KeyEvent::Enter), KeyResult::NotHandled);
    }

    #[test]
    fn enter_inserts_newline_without_commit_on_enter() {
        let mut cfg = Config::default();
        cfg.commit_on_enter = false;
        let mut ime = ImeEngine::new(cfg);
        type_all(&mut ime, "ㄱㅏ");
        ime.process_key(KeyEvent::Enter);
        assert_eq!(ime.context().text, "가\n");
        assert!(ime.context().commit_text.is_empty());
    }

    #[test]
    fn backspace_removes_last_character() {
        let mut ime = ImeEngine::default();
        type_all(&mut ime, "ㄷㅏㄹㄱ");
        assert_eq!(ime.context().text, "닭");
        assert_eq!(ime.process_key(KeyEvent::Backspace), KeyResult::Handled);
        assert_eq!(ime.context().text, "");
        assert_eq!(ime.process_key(KeyEvent::Backspace), KeyResult::NotHandled);
    }

    #[test]
    fn latin_mode_appends_verbatim() {
        let mut ime = ImeEngine::default();
        assert_eq!(ime.process_key(KeyEvent::ToggleMode), KeyResult::Handled);
        assert_eq!(ime.mode(), InputMode::Latin);
        assert_eq!(ime.context().auxiliary_text, "A");
        type_all(&mut ime, "ㄱㅏ");
        assert_eq!(ime.context().text, "ㄱㅏ");

        ime.process_key(KeyEvent::ToggleMode);
        type_all(&mut ime, "ㄴㅏ");
        assert_eq!(ime.context().text, "ㄱㅏ나");
    }

    #[test]
    fn full_width_passthrough() {
        let mut cfg = Config::default();
        cfg.set_fullwidth(true);
        let mut ime = ImeEngine::new(cfg);
        type_all(&mut ime, "ㄱㅏ!a");
        assert_eq!(ime.context().text, "가！ａ");
    }

    #[test]
    fn escape_discards_buffer() {
        let mut ime = ImeEngine::default();
        type_all(&mut ime, "ㅎㅏ");
        assert_eq!(ime.process_key(KeyEvent::Escape), KeyResult::Handled);
        assert!(ime.context().text.is_empty());
        assert_eq!(ime.process_key(KeyEvent::Escape), KeyResult::NotHandled);
    }
}
