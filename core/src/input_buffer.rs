//! Text buffer driven by the composer.
//!
//! The buffer holds everything typed since the last commit (e.g. "안녕ㅎ").
//! Typed symbols go through [`compose`](crate::composer::compose), which only
//! ever touches the last character, so editing is append/truncate at the end.

use crate::composer::{compose_with_action, Action};

/// Input buffer holding composed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    /// Create a new empty input buffer.
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a buffer that continues from existing text.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    /// Get the composed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the buffer in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Compose `ch` into the buffer and return the rule that applied.
    pub fn push(&mut self, ch: char) -> Action {
        let (text, action) = compose_with_action(&self.text, ch);
        self.text = text;
        action
    }

    /// Append `ch` without composing it.
    pub fn push_raw(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Remove the last character (backspace).
    /// Returns the removed character, if any.
    pub fn backspace(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Take the text out, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_composes() {
        let mut buf = InputBuffer::new();
        assert_eq!(buf.push('ㄱ'), Action::Start);
        assert_eq!(buf.push('ㅏ'), Action::LeadVowel);
        assert_eq!(buf.push('ㅇ'), Action::Trail);
        assert_eq!(buf.text(), "강");
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn push_raw_skips_composition() {
        let mut buf = InputBuffer::from_text("ㄱ");
        buf.push_raw('ㅏ');
        assert_eq!(buf.text(), "ㄱㅏ");
    }

    #[test]
    fn backspace_truncates_whole_character() {
        let mut buf = InputBuffer::from_text("한글");
        assert_eq!(buf.backspace(), Some('글'));
        assert_eq!(buf.text(), "한");
        assert_eq!(buf.backspace(), Some('한'));
        assert_eq!(buf.backspace(), None);
        assert!(buf.is_empty());
    }

    #[test]
    fn take_and_clear() {
        let mut buf = InputBuffer::from_text("가나");
        assert_eq!(buf.take(), "가나");
        assert!(buf.is_empty());

        buf.push('ㄷ');
        buf.clear();
        assert_eq!(buf.text(), "");
    }
}
