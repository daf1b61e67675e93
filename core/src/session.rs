//! IME session management.
//!
//! The `ImeSession` struct combines the input buffer with the current input
//! mode and tracks that state across multiple key events.

use crate::context::ImeContext;
use crate::input_buffer::InputBuffer;

/// Current input mode of the IME session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Typed jamo are composed into syllables
    #[default]
    Hangul,
    /// Keys are appended verbatim (한/영 toggled off)
    Latin,
}

impl InputMode {
    /// Short indicator shown in the UI.
    pub fn indicator(self) -> &'static str {
        match self {
            InputMode::Hangul => "한",
            InputMode::Latin => "A",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            InputMode::Hangul => InputMode::Latin,
            InputMode::Latin => InputMode::Hangul,
        }
    }
}

/// IME session state.
///
/// The session is separate from the key handling in `ImeEngine`: the engine
/// decides what a key means, the session holds the resulting state.
#[derive(Debug, Clone, Default)]
pub struct ImeSession {
    /// Uncommitted, composed text
    input_buffer: InputBuffer,

    /// Current input mode
    mode: InputMode,
}

impl ImeSession {
    /// Create a new empty session in Hangul mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty session in the given mode.
    pub fn with_mode(mode: InputMode) -> Self {
        Self {
            input_buffer: InputBuffer::new(),
            mode,
        }
    }

    /// Get the input buffer.
    pub fn input_buffer(&self) -> &InputBuffer {
        &self.input_buffer
    }

    /// Get a mutable reference to the input buffer.
    pub fn input_buffer_mut(&mut self) -> &mut InputBuffer {
        &mut self.input_buffer
    }

    /// Get the current input mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Set the input mode.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// Switch between Hangul and Latin mode, returning the new mode.
    pub fn toggle_mode(&mut self) -> InputMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Discard uncommitted text. The mode is kept.
    pub fn clear(&mut self) {
        self.input_buffer.clear();
    }

    /// Sync session state to an ImeContext for platform communication.
    pub fn sync_to_context(&self, context: &mut ImeContext) {
        context.text.clear();
        context.text.push_str(self.input_buffer.text());
        context.auxiliary_text.clear();
        context.auxiliary_text.push_str(self.mode.indicator());
    }
}
