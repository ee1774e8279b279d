//! Pattern analysis - counts sequential, repetitive and keyboard-row runs.
//!
//! All counters slide a window of three characters and count overlapping
//! matches independently: `"1234"` holds two ascending runs.

use super::composition::is_digit;
use crate::keyboard::KeyboardLayout;

const RUN_WIDTH: usize = 3;

/// Lowercase form of a letter, or the letter itself when it does not
/// lowercase to exactly one char.
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn ascending(a: char, b: char, c: char) -> bool {
    b as u32 == a as u32 + 1 && c as u32 == b as u32 + 1
}

/// Counts windows of three ascending digits (`"123"`) or three ascending
/// letters compared case-insensitively (`"aBc"`).
pub(crate) fn count_sequential_runs(chars: &[char]) -> usize {
    chars
        .windows(RUN_WIDTH)
        .filter(|w| {
            let (a, b, c) = (w[0], w[1], w[2]);
            if is_digit(a) && is_digit(b) && is_digit(c) {
                ascending(a, b, c)
            } else if a.is_alphabetic() && b.is_alphabetic() && c.is_alphabetic() {
                ascending(fold_case(a), fold_case(b), fold_case(c))
            } else {
                false
            }
        })
        .count()
}

/// Counts windows of three identical characters.
pub(crate) fn count_repeated_runs(chars: &[char]) -> usize {
    chars
        .windows(RUN_WIDTH)
        .filter(|w| w[0] == w[1] && w[1] == w[2])
        .count()
}

/// Counts the keyboard-row 3-grams present anywhere in `lowered`.
///
/// Each 3-gram counts at most once regardless of how often it occurs, and
/// matches are not deduplicated across 3-grams.
pub(crate) fn count_keyboard_patterns(lowered: &str, layout: &KeyboardLayout) -> usize {
    layout
        .trigrams()
        .filter(|trigram| lowered.contains(*trigram))
        .count()
}
