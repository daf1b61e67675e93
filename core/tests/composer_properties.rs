// core/tests/composer_properties.rs
//
// Property-style tests for the Dubeolsik composer.
//
// Tests cover:
// - The six reference keystroke scenarios
// - Space passthrough and determinism
// - Syllable encode/decode over the whole block
// - Every compound vowel and compound trailing consonant
// - Trailing consonant migration for every simple trail

use libhangul_core::jamo::{self, COMPOUND_TRAIL_PAIRS, COMPOUND_VOWEL_PAIRS, LEAD, TRAIL, VOWEL};
use libhangul_core::{compose, compose_with_action, Action, Syllable};

fn syllable(lead: usize, vowel: usize, trail: usize) -> char {
    Syllable::new(lead as u32, vowel as u32, trail as u32)
        .expect("indices in range")
        .to_char()
}

#[test]
fn reference_scenarios() {
    assert_eq!(compose("", 'ㄱ'), "ㄱ");
    assert_eq!(compose("ㄱ", 'ㅏ'), "가");
    assert_eq!(compose("가", 'ㅇ'), "강");
    assert_eq!(compose("강", 'ㅏ'), "가아");
    assert_eq!(compose("고", 'ㅏ'), "과");
    assert_eq!(compose("각", 'ㅅ'), "갃");
}

#[test]
fn space_is_plain_append() {
    for buffer in ["", "ㄱ", "가", "강", "닭", "abc", "가 "] {
        assert_eq!(compose(buffer, ' '), format!("{} ", buffer));
    }
}

#[test]
fn composition_is_deterministic() {
    let inputs = ['ㄱ', 'ㅏ', 'ㅇ', 'ㅗ', 'ㅅ', 'x', ' '];
    for buffer in ["", "ㄱ", "가", "각", "고", "강", "갃", "x"] {
        for &input in inputs.iter() {
            assert_eq!(compose(buffer, input), compose(buffer, input));
        }
    }
}

#[test]
fn syllable_formula_roundtrip() {
    let mut count = 0;
    for lead in 0..LEAD.len() {
        for vowel in 0..VOWEL.len() {
            for trail in 0..TRAIL.len() {
                let ch = syllable(lead, vowel, trail);
                let back = Syllable::decompose(ch).expect("composed syllable");
                assert_eq!(
                    (back.lead(), back.vowel(), back.trail()),
                    (lead as u32, vowel as u32, trail as u32)
                );
                count += 1;
            }
        }
    }
    assert_eq!(count, 11172);
    assert_eq!(syllable(18, 20, 27), '힣');
}

#[test]
fn every_compound_vowel_folds() {
    for &(first, second, combined) in COMPOUND_VOWEL_PAIRS.iter() {
        let vowel = jamo::vowel_index(first).unwrap();
        let target = jamo::vowel_index(combined).unwrap();
        for lead in [0, 11, 18] {
            let start = syllable(lead, vowel, 0).to_string();
            let (out, action) = compose_with_action(&start, second);
            assert_eq!(action, Action::CompoundVowel, "{} + {}", start, second);
            assert_eq!(out, syllable(lead, target, 0).to_string());
        }
    }
}

#[test]
fn stem_vowel_plus_i_folds() {
    assert_eq!(compose("가", 'ㅣ'), "개");
    assert_eq!(compose("야", 'ㅣ'), "얘");
    assert_eq!(compose("거", 'ㅣ'), "게");
    assert_eq!(compose("겨", 'ㅣ'), "계");
    // A syllable with a trail migrates instead of folding.
    assert_eq!(compose("각", 'ㅣ'), "가기");
}

#[test]
fn every_compound_trail_folds() {
    for &(first, second, combined) in COMPOUND_TRAIL_PAIRS.iter() {
        let trail = jamo::trail_index(first).unwrap();
        let target = jamo::trail_index(combined).unwrap();
        for (lead, vowel) in [(0, 0), (3, 8), (18, 20)] {
            let start = syllable(lead, vowel, trail).to_string();
            let (out, action) = compose_with_action(&start, second);
            assert_eq!(action, Action::CompoundTrail, "{} + {}", start, second);
            assert_eq!(out, syllable(lead, vowel, target).to_string());
        }
    }
}

#[test]
fn simple_trail_migrates_to_next_syllable() {
    for (trail, glyph) in TRAIL.iter().enumerate().skip(1) {
        let glyph = glyph.unwrap();
        let Some(lead) = jamo::lead_index(glyph) else {
            continue;
        };
        for (vowel2, &v2) in VOWEL.iter().enumerate() {
            let start = syllable(5, 0, trail).to_string();
            let (out, action) = compose_with_action(&start, v2);
            assert_eq!(action, Action::Migrate);
            let expected: String = [syllable(5, 0, 0), syllable(lead, vowel2, 0)]
                .iter()
                .collect();
            assert_eq!(out, expected);
        }
    }
}

#[test]
fn cluster_trail_migrates_without_splitting() {
    for &(_, _, cluster) in COMPOUND_TRAIL_PAIRS.iter() {
        let trail = jamo::trail_index(cluster).unwrap();
        let start = syllable(0, 0, trail).to_string();
        assert_eq!(compose(&start, 'ㅏ'), format!("가{}ㅏ", cluster));
    }
}

#[test]
fn characters_outside_tables_append() {
    for buffer in ["", "ㄱ", "가", "강", "가ㅏ"] {
        for input in ['a', '7', '.', '?', '漢'] {
            let (out, action) = compose_with_action(buffer, input);
            assert_eq!(out, format!("{}{}", buffer, input));
            if !buffer.is_empty() {
                assert_eq!(action, Action::Append);
                assert!(!action.is_combination());
            }
        }
    }
}

#[test]
fn composing_is_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let keys = if i % 2 == 0 { "ㅎㅏㄴㄱㅡㄹ" } else { "ㄷㅏㄹㄱ" };
                keys.chars().fold(String::new(), |buf, ch| compose(&buf, ch))
            })
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["한글", "닭", "한글", "닭"]);
}
