//! Dubeolsik syllable composer.
//!
//! `compose(buffer, input)` appends one typed symbol to `buffer`, folding it
//! into the buffer's last character when the two form a (larger) Hangul
//! syllable. Only the last character is ever rewritten; everything before it
//! is copied through untouched.
//!
//! There is no composer state beyond the buffer itself: the last character is
//! decoded on every call, which puts the composer in one of four conceptual
//! states (empty, bare jamo, syllable without trail, syllable with trail).
//!
//! Decision order:
//!
//! 1. space is appended verbatim;
//! 2. an empty buffer becomes the input;
//! 3. a bare lead consonant followed by a vowel becomes an open syllable;
//! 4. a vowel after a closed syllable moves the trailing consonant into a new
//!    syllable (the trailing glyph is composed again with the vowel);
//! 5. a vowel after an open syllable may form a compound vowel;
//! 6. a consonant after an open syllable becomes its trailing consonant;
//! 7. a consonant after a closed syllable may form a compound trail;
//! 8. anything else is appended verbatim.

use serde::Serialize;
use tracing::trace;

use crate::jamo;
use crate::syllable::Syllable;

/// Which rule produced a composition step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Space appended; the current syllable is finished.
    Space,
    /// Buffer was empty; the input starts it.
    Start,
    /// Bare lead consonant + vowel became an open syllable.
    LeadVowel,
    /// Two vowels folded into a compound vowel.
    CompoundVowel,
    /// Consonant attached as trailing consonant.
    Trail,
    /// Two trailing consonants folded into a cluster.
    CompoundTrail,
    /// Trailing consonant moved to lead a new syllable.
    Migrate,
    /// No combination; input appended verbatim.
    Append,
}

impl Action {
    /// Whether the input was merged into the previous character.
    pub fn is_combination(self) -> bool {
        matches!(
            self,
            Action::LeadVowel
                | Action::CompoundVowel
                | Action::Trail
                | Action::CompoundTrail
                | Action::Migrate
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Space => "space",
            Action::Start => "start",
            Action::LeadVowel => "lead_vowel",
            Action::CompoundVowel => "compound_vowel",
            Action::Trail => "trail",
            Action::CompoundTrail => "compound_trail",
            Action::Migrate => "migrate",
            Action::Append => "append",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append `input` to `buffer`, composing it into the trailing syllable when
/// possible.
///
/// ```
/// use libhangul_core::compose;
///
/// assert_eq!(compose("ㄱ", 'ㅏ'), "가");
/// assert_eq!(compose("가", 'ㅇ'), "강");
/// assert_eq!(compose("고", 'ㅏ'), "과");
/// ```
pub fn compose(buffer: &str, input: char) -> String {
    compose_with_action(buffer, input).0
}

/// Like [`compose`], also reporting which rule fired.
pub fn compose_with_action(buffer: &str, input: char) -> (String, Action) {
    if input == ' ' {
        return (appended(buffer, input), Action::Space);
    }

    let Some(last) = buffer.chars().next_back() else {
        return (input.to_string(), Action::Start);
    };
    let head = &buffer[..buffer.len() - last.len_utf8()];

    let combined = match Syllable::decompose(last) {
        None => compose_bare(head, last, input),
        Some(syllable) => compose_syllable(head, syllable, input),
    };
    let (text, action) = combined.unwrap_or_else(|| (appended(buffer, input), Action::Append));

    trace!(%input, %action, "composed");
    (text, action)
}

/// Feed every input through [`compose`] in order.
pub fn compose_all<I>(buffer: &str, inputs: I) -> String
where
    I: IntoIterator<Item = char>,
{
    inputs
        .into_iter()
        .fold(buffer.to_string(), |text, input| compose(&text, input))
}

fn compose_bare(head: &str, last: char, input: char) -> Option<(String, Action)> {
    let lead = jamo::lead_index(last)?;
    let vowel = jamo::vowel_index(input)?;
    let syllable = Syllable::new(lead as u32, vowel as u32, 0)?;
    Some((appended(head, syllable.to_char()), Action::LeadVowel))
}

fn compose_syllable(head: &str, syllable: Syllable, input: char) -> Option<(String, Action)> {
    if jamo::is_vowel(input) {
        if let Some(trail) = syllable.trail_glyph() {
            // The bare trailing glyph seeds a fresh composition. Clusters such
            // as ㄳ are not leads, so they are left as they are.
            let mut text = appended(head, syllable.without_trail().to_char());
            text.push_str(&compose(&trail.to_string(), input));
            return Some((text, Action::Migrate));
        }
        let vowel = jamo::compound_vowel(syllable.vowel_glyph(), input)?;
        let updated = syllable.with_vowel(jamo::vowel_index(vowel)? as u32)?;
        return Some((appended(head, updated.to_char()), Action::CompoundVowel));
    }

    if jamo::is_lead(input) {
        let (trail, action) = match syllable.trail_glyph() {
            None => (input, Action::Trail),
            Some(current) => (jamo::compound_trail(current, input)?, Action::CompoundTrail),
        };
        let updated = syllable.with_trail(jamo::trail_index(trail)? as u32)?;
        return Some((appended(head, updated.to_char()), action));
    }

    None
}

fn appended(buffer: &str, input: char) -> String {
    let mut text = String::with_capacity(buffer.len() + input.len_utf8());
    text.push_str(buffer);
    text.push(input);
    text
}
