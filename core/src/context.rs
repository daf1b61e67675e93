//! IME context for platform communication.
//!
//! The `ImeContext` struct is a simple data container with public fields that
//! platforms use to communicate with the IME. After calling `process_key()`,
//! the platform reads these fields to update the UI.

/// IME context for platform communication.
///
/// - `text`: the uncommitted buffer, last character possibly still composing
/// - `commit_text`: text to commit to the application (consume and clear)
/// - `auxiliary_text`: mode indicator ("한" or "A")
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImeContext {
    /// Uncommitted text
    pub text: String,

    /// Text to commit to the application
    pub commit_text: String,

    /// Auxiliary text for UI hints
    pub auxiliary_text: String,
}

impl ImeContext {
    /// Create a new empty IME context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the visible state. Does NOT clear commit_text (platform should
    /// consume it first).
    pub fn clear(&mut self) {
        self.text.clear();
        self.auxiliary_text.clear();
    }

    /// Take the commit text, leaving it empty.
    pub fn take_commit(&mut self) -> String {
        std::mem::take(&mut self.commit_text)
    }

    /// Check if there's text to commit.
    pub fn has_commit(&self) -> bool {
        !self.commit_text.is_empty()
    }
}
