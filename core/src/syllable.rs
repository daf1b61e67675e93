//! Composed Hangul syllable blocks (U+AC00..U+D7A3).
//!
//! A syllable is never stored; it is decoded from the buffer's last character
//! whenever the composer needs to look at it and encoded again afterwards.

use crate::jamo::{LEAD, TRAIL, VOWEL};

/// First composed syllable, 가.
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Last composed syllable, 힣.
pub const SYLLABLE_LAST: u32 = 0xD7A3;

pub const LEAD_COUNT: u32 = 19;
pub const VOWEL_COUNT: u32 = 21;
pub const TRAIL_COUNT: u32 = 28;

/// Whether `ch` is a precomposed Hangul syllable.
pub fn is_syllable(ch: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(ch as u32))
}

/// Table indices of one syllable block.
///
/// Only constructed through [`Syllable::new`] or [`Syllable::decompose`], so
/// every index is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Syllable {
    lead: u32,
    vowel: u32,
    /// 0 when the syllable has no trailing consonant.
    trail: u32,
}

impl Syllable {
    /// Build a syllable from table indices; `None` if any index is out of range.
    pub fn new(lead: u32, vowel: u32, trail: u32) -> Option<Self> {
        if lead >= LEAD_COUNT || vowel >= VOWEL_COUNT || trail >= TRAIL_COUNT {
            return None;
        }
        Some(Self { lead, vowel, trail })
    }

    /// Split a composed syllable into its indices.
    pub fn decompose(ch: char) -> Option<Self> {
        if !is_syllable(ch) {
            return None;
        }
        let code = ch as u32 - SYLLABLE_BASE;
        Some(Self {
            lead: code / TRAIL_COUNT / VOWEL_COUNT,
            vowel: (code / TRAIL_COUNT) % VOWEL_COUNT,
            trail: code % TRAIL_COUNT,
        })
    }

    /// Encode back into a composed syllable character.
    pub fn to_char(self) -> char {
        let code = SYLLABLE_BASE + (self.lead * VOWEL_COUNT + self.vowel) * TRAIL_COUNT + self.trail;
        // Indices are range checked on construction, so the code is always
        // inside the syllable block.
        char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    pub fn lead(self) -> u32 {
        self.lead
    }

    pub fn vowel(self) -> u32 {
        self.vowel
    }

    /// Trail index; 0 means no trailing consonant.
    pub fn trail(self) -> u32 {
        self.trail
    }

    pub fn has_trail(self) -> bool {
        self.trail != 0
    }

    pub fn with_vowel(self, vowel: u32) -> Option<Self> {
        Self::new(self.lead, vowel, self.trail)
    }

    pub fn with_trail(self, trail: u32) -> Option<Self> {
        Self::new(self.lead, self.vowel, trail)
    }

    pub fn without_trail(self) -> Self {
        Self { trail: 0, ..self }
    }

    pub fn lead_glyph(self) -> char {
        LEAD[self.lead as usize]
    }

    pub fn vowel_glyph(self) -> char {
        VOWEL[self.vowel as usize]
    }

    pub fn trail_glyph(self) -> Option<char> {
        TRAIL[self.trail as usize]
    }
}
