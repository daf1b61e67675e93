//! Dubeolsik (두벌식) keyboard layout
//!
//! The standard Korean layout puts consonants on the left hand and vowels on
//! the right. Each key produces exactly one compatibility jamo; Shift gives
//! the tense consonants (ㅃ ㅉ ㄸ ㄲ ㅆ) and the two extra vowels (ㅒ ㅖ).
//! Other shifted letters produce the same jamo as the unshifted key.
//!
//! ```text
//!  q ㅂ  w ㅈ  e ㄷ  r ㄱ  t ㅅ  y ㅛ  u ㅕ  i ㅑ  o ㅐ  p ㅔ
//!   a ㅁ  s ㄴ  d ㅇ  f ㄹ  g ㅎ  h ㅗ  j ㅓ  k ㅏ  l ㅣ
//!    z ㅋ  x ㅌ  c ㅊ  v ㅍ  b ㅠ  n ㅜ  m ㅡ
//! ```
//!
//! Compound vowels and consonant clusters have no key of their own; they are
//! typed as two keys and folded by the composer (h + k → ㅘ, r + t → ㄳ).

use libhangul_core::jamo;
use libhangul_core::{compose_all, Syllable};
use phf::phf_map;

/// Keyboard rows, for printing the layout.
pub const ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

static KEYMAP: phf::Map<char, char> = phf_map! {
    'q' => 'ㅂ', 'w' => 'ㅈ', 'e' => 'ㄷ', 'r' => 'ㄱ', 't' => 'ㅅ',
    'y' => 'ㅛ', 'u' => 'ㅕ', 'i' => 'ㅑ', 'o' => 'ㅐ', 'p' => 'ㅔ',
    'a' => 'ㅁ', 's' => 'ㄴ', 'd' => 'ㅇ', 'f' => 'ㄹ', 'g' => 'ㅎ',
    'h' => 'ㅗ', 'j' => 'ㅓ', 'k' => 'ㅏ', 'l' => 'ㅣ',
    'z' => 'ㅋ', 'x' => 'ㅌ', 'c' => 'ㅊ', 'v' => 'ㅍ', 'b' => 'ㅠ',
    'n' => 'ㅜ', 'm' => 'ㅡ',
    // Shift layer
    'Q' => 'ㅃ', 'W' => 'ㅉ', 'E' => 'ㄸ', 'R' => 'ㄲ', 'T' => 'ㅆ',
    'Y' => 'ㅛ', 'U' => 'ㅕ', 'I' => 'ㅑ', 'O' => 'ㅒ', 'P' => 'ㅖ',
    'A' => 'ㅁ', 'S' => 'ㄴ', 'D' => 'ㅇ', 'F' => 'ㄹ', 'G' => 'ㅎ',
    'H' => 'ㅗ', 'J' => 'ㅓ', 'K' => 'ㅏ', 'L' => 'ㅣ',
    'Z' => 'ㅋ', 'X' => 'ㅌ', 'C' => 'ㅊ', 'V' => 'ㅍ', 'B' => 'ㅠ',
    'N' => 'ㅜ', 'M' => 'ㅡ',
};

/// Jamo produced by a QWERTY key, if any.
pub fn jamo_for_key(key: char) -> Option<char> {
    KEYMAP.get(&key).copied()
}

/// The key that types `jamo` directly. Unshifted keys are preferred.
pub fn key_for_jamo(jamo: char) -> Option<char> {
    let mut shifted = None;
    for (&key, &value) in KEYMAP.entries() {
        if value != jamo {
            continue;
        }
        if key.is_ascii_lowercase() {
            return Some(key);
        }
        shifted = Some(key);
    }
    shifted
}

/// Keystrokes that type `jamo`, splitting compound vowels and clusters into
/// their two parts.
pub fn keys_for_jamo(jamo: char) -> Option<String> {
    if let Some(key) = key_for_jamo(jamo) {
        return Some(key.to_string());
    }
    let (first, second) = jamo::split_vowel(jamo).or_else(|| jamo::split_trail(jamo))?;
    let mut keys = String::with_capacity(2);
    keys.push(key_for_jamo(first)?);
    keys.push(key_for_jamo(second)?);
    Some(keys)
}

/// Translate QWERTY keystrokes to jamo and compose them.
/// Characters without a key mapping are fed to the composer unchanged.
pub fn keys_to_hangul(keys: &str) -> String {
    compose_all("", keys.chars().map(|k| jamo_for_key(k).unwrap_or(k)))
}

/// Reverse of [`keys_to_hangul`]: the keystrokes that type `text`.
/// Characters that are not Hangul pass through unchanged.
pub fn hangul_to_keys(text: &str) -> String {
    let mut keys = String::with_capacity(text.len());
    for ch in text.chars() {
        match Syllable::decompose(ch) {
            Some(s) => {
                for part in [Some(s.lead_glyph()), Some(s.vowel_glyph()), s.trail_glyph()]
                    .into_iter()
                    .flatten()
                {
                    push_keys(&mut keys, part);
                }
            }
            None => push_keys(&mut keys, ch),
        }
    }
    keys
}

fn push_keys(out: &mut String, ch: char) {
    match keys_for_jamo(ch) {
        Some(keys) => out.push_str(&keys),
        None => out.push(ch),
    }
}
