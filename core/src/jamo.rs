//! Jamo tables for the Dubeolsik composer.
//!
//! The three ordered tables (`LEAD`, `VOWEL`, `TRAIL`) hold Unicode
//! compatibility jamo (U+3131..U+3163). Their order is the index order of the
//! Hangul syllable block, so an index taken from here can be fed straight into
//! the syllable formula in [`crate::syllable`].
//!
//! The two combination tables map a pair of glyphs to a single compound
//! glyph. They are keyed by the two glyphs concatenated ("ㅗㅏ" → 'ㅘ').
//! A missing key only means the pair does not combine.

use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Syllable-leading consonants (choseong), index 0..18.
pub const LEAD: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Syllable vowels (jungseong), index 0..20.
pub const VOWEL: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Syllable-trailing consonants (jongseong). Index 0 is "no trailing
/// consonant" and has no glyph.
pub const TRAIL: [Option<char>; 28] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

/// Vowel pairs typed one after another that fold into a single vowel.
///
/// The first seven are the standard Dubeolsik combinations. The last four
/// build ㅐ ㅒ ㅔ ㅖ from their stem vowel plus ㅣ, following the letter
/// shapes; the layout has dedicated keys for them, so these only apply to
/// jamo fed in directly.
pub const COMPOUND_VOWEL_PAIRS: [(char, char, char); 11] = [
    ('ㅗ', 'ㅏ', 'ㅘ'),
    ('ㅗ', 'ㅐ', 'ㅙ'),
    ('ㅗ', 'ㅣ', 'ㅚ'),
    ('ㅜ', 'ㅓ', 'ㅝ'),
    ('ㅜ', 'ㅔ', 'ㅞ'),
    ('ㅜ', 'ㅣ', 'ㅟ'),
    ('ㅡ', 'ㅣ', 'ㅢ'),
    ('ㅏ', 'ㅣ', 'ㅐ'),
    ('ㅑ', 'ㅣ', 'ㅒ'),
    ('ㅓ', 'ㅣ', 'ㅔ'),
    ('ㅕ', 'ㅣ', 'ㅖ'),
];

/// Consonant pairs that fold into a compound trailing consonant.
pub const COMPOUND_TRAIL_PAIRS: [(char, char, char); 11] = [
    ('ㄱ', 'ㅅ', 'ㄳ'),
    ('ㄴ', 'ㅈ', 'ㄵ'),
    ('ㄴ', 'ㅎ', 'ㄶ'),
    ('ㄹ', 'ㄱ', 'ㄺ'),
    ('ㄹ', 'ㅁ', 'ㄻ'),
    ('ㄹ', 'ㅂ', 'ㄼ'),
    ('ㄹ', 'ㅅ', 'ㄽ'),
    ('ㄹ', 'ㅌ', 'ㄾ'),
    ('ㄹ', 'ㅍ', 'ㄿ'),
    ('ㄹ', 'ㅎ', 'ㅀ'),
    ('ㅂ', 'ㅅ', 'ㅄ'),
];

static COMPOUND_VOWELS: Lazy<AHashMap<String, char>> =
    Lazy::new(|| pair_table(&COMPOUND_VOWEL_PAIRS));

static COMPOUND_TRAILS: Lazy<AHashMap<String, char>> =
    Lazy::new(|| pair_table(&COMPOUND_TRAIL_PAIRS));

fn pair_table(pairs: &[(char, char, char)]) -> AHashMap<String, char> {
    pairs
        .iter()
        .map(|&(first, second, combined)| (pair_key(first, second), combined))
        .collect()
}

fn pair_key(first: char, second: char) -> String {
    let mut key = String::with_capacity(first.len_utf8() + second.len_utf8());
    key.push(first);
    key.push(second);
    key
}

/// Index of `ch` in the `LEAD` table.
pub fn lead_index(ch: char) -> Option<usize> {
    LEAD.iter().position(|&c| c == ch)
}

/// Index of `ch` in the `VOWEL` table.
pub fn vowel_index(ch: char) -> Option<usize> {
    VOWEL.iter().position(|&c| c == ch)
}

/// Index of `ch` in the `TRAIL` table. Never returns 0, since the empty slot
/// has no glyph.
pub fn trail_index(ch: char) -> Option<usize> {
    TRAIL.iter().position(|&c| c == Some(ch))
}

pub fn is_lead(ch: char) -> bool {
    lead_index(ch).is_some()
}

pub fn is_vowel(ch: char) -> bool {
    vowel_index(ch).is_some()
}

/// Whether `ch` appears in any of the three tables.
pub fn is_jamo(ch: char) -> bool {
    is_lead(ch) || is_vowel(ch) || trail_index(ch).is_some()
}

/// Combine a vowel already in a syllable with the next typed vowel.
pub fn compound_vowel(current: char, incoming: char) -> Option<char> {
    COMPOUND_VOWELS.get(&pair_key(current, incoming)).copied()
}

/// Combine a trailing consonant already in a syllable with the next typed
/// consonant.
pub fn compound_trail(current: char, incoming: char) -> Option<char> {
    COMPOUND_TRAILS.get(&pair_key(current, incoming)).copied()
}

/// Split a compound vowel back into the two vowels that form it.
pub fn split_vowel(compound: char) -> Option<(char, char)> {
    COMPOUND_VOWEL_PAIRS
        .iter()
        .find(|&&(_, _, c)| c == compound)
        .map(|&(a, b, _)| (a, b))
}

/// Split a compound trailing consonant back into its two consonants.
pub fn split_trail(compound: char) -> Option<(char, char)> {
    COMPOUND_TRAIL_PAIRS
        .iter()
        .find(|&&(_, _, c)| c == compound)
        .map(|&(a, b, _)| (a, b))
}
