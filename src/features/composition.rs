//! Character-class composition - counts uppercase, lowercase, digits, special chars.

use std::cmp::Ordering;
use std::collections::HashSet;

/// Code point ranges (inclusive) whose Unicode numeric type is Digit or
/// Decimal, Unicode 14.0.
#[rustfmt::skip]
const DIGIT_RANGES: [(u32, u32); 81] = [
    (0x0030, 0x0039), (0x00B2, 0x00B3), (0x00B9, 0x00B9), (0x0660, 0x0669), (0x06F0, 0x06F9),
    (0x07C0, 0x07C9), (0x0966, 0x096F), (0x09E6, 0x09EF), (0x0A66, 0x0A6F), (0x0AE6, 0x0AEF),
    (0x0B66, 0x0B6F), (0x0BE6, 0x0BEF), (0x0C66, 0x0C6F), (0x0CE6, 0x0CEF), (0x0D66, 0x0D6F),
    (0x0DE6, 0x0DEF), (0x0E50, 0x0E59), (0x0ED0, 0x0ED9), (0x0F20, 0x0F29), (0x1040, 0x1049),
    (0x1090, 0x1099), (0x1369, 0x1371), (0x17E0, 0x17E9), (0x1810, 0x1819), (0x1946, 0x194F),
    (0x19D0, 0x19DA), (0x1A80, 0x1A89), (0x1A90, 0x1A99), (0x1B50, 0x1B59), (0x1BB0, 0x1BB9),
    (0x1C40, 0x1C49), (0x1C50, 0x1C59), (0x2070, 0x2070), (0x2074, 0x2079), (0x2080, 0x2089),
    (0x2460, 0x2468), (0x2474, 0x247C), (0x2488, 0x2490), (0x24EA, 0x24EA), (0x24F5, 0x24FD),
    (0x24FF, 0x24FF), (0x2776, 0x277E), (0x2780, 0x2788), (0x278A, 0x2792), (0xA620, 0xA629),
    (0xA8D0, 0xA8D9), (0xA900, 0xA909), (0xA9D0, 0xA9D9), (0xA9F0, 0xA9F9), (0xAA50, 0xAA59),
    (0xABF0, 0xABF9), (0xFF10, 0xFF19), (0x104A0, 0x104A9), (0x10A40, 0x10A43), (0x10D30, 0x10D39),
    (0x10E60, 0x10E68), (0x11052, 0x1105A), (0x11066, 0x1106F), (0x110F0, 0x110F9),
    (0x11136, 0x1113F), (0x111D0, 0x111D9), (0x112F0, 0x112F9), (0x11450, 0x11459),
    (0x114D0, 0x114D9), (0x11650, 0x11659), (0x116C0, 0x116C9), (0x11730, 0x11739),
    (0x118E0, 0x118E9), (0x11950, 0x11959), (0x11C50, 0x11C59), (0x11D50, 0x11D59),
    (0x11DA0, 0x11DA9), (0x16A60, 0x16A69), (0x16AC0, 0x16AC9), (0x16B50, 0x16B59),
    (0x1D7CE, 0x1D7FF), (0x1E140, 0x1E149), (0x1E2F0, 0x1E2F9), (0x1E950, 0x1E959),
    (0x1F100, 0x1F10A), (0x1FBF0, 0x1FBF9),
];

/// Digits in any script: every decimal `0`-`9` block plus superscript and
/// enclosed digits.
pub(crate) fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    let cp = c as u32;
    DIGIT_RANGES
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

pub(crate) fn is_special(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Per-class character counts of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Composition {
    pub length: usize,
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    pub special: usize,
    pub distinct: usize,
}

impl Composition {
    pub fn of(chars: &[char]) -> Self {
        let distinct: HashSet<char> = chars.iter().copied().collect();
        Self {
            length: chars.len(),
            uppercase: chars.iter().filter(|c| c.is_uppercase()).count(),
            lowercase: chars.iter().filter(|c| c.is_lowercase()).count(),
            digits: chars.iter().filter(|&&c| is_digit(c)).count(),
            special: chars.iter().filter(|&&c| is_special(c)).count(),
            distinct: distinct.len(),
        }
    }

    /// `count / max(length, 1)`.
    pub fn ratio(&self, count: usize) -> f64 {
        count as f64 / self.length.max(1) as f64
    }

    pub fn has_uppercase(&self) -> bool {
        self.uppercase > 0
    }

    pub fn has_lowercase(&self) -> bool {
        self.lowercase > 0
    }

    pub fn has_digits(&self) -> bool {
        self.digits > 0
    }

    pub fn has_special(&self) -> bool {
        self.special > 0
    }

    /// Number of character classes present (0-4).
    pub fn class_count(&self) -> usize {
        [
            self.has_uppercase(),
            self.has_lowercase(),
            self.has_digits(),
            self.has_special(),
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composition(s: &str) -> Composition {
        let chars: Vec<char> = s.chars().collect();
        Composition::of(&chars)
    }

    #[test]
    fn test_composition_all_classes() {
        let c = composition("HasAll123!@#");
        assert_eq!(c.length, 12);
        assert_eq!(c.uppercase, 2);
        assert_eq!(c.lowercase, 4);
        assert_eq!(c.digits, 3);
        assert_eq!(c.special, 3);
        assert_eq!(c.class_count(), 4);
    }

    #[test]
    fn test_composition_empty() {
        let c = composition("");
        assert_eq!(c, Composition::default());
        assert_eq!(c.ratio(c.uppercase), 0.0);
        assert_eq!(c.class_count(), 0);
    }

    #[test]
    fn test_composition_counts_chars_not_bytes() {
        let c = composition("Ünïcødé");
        assert_eq!(c.length, 7);
        assert_eq!(c.uppercase, 1);
        assert_eq!(c.lowercase, 6);
        assert_eq!(c.special, 0);
    }

    #[test]
    fn test_composition_distinct_chars() {
        assert_eq!(composition("password").distinct, 7);
        assert_eq!(composition("aaaa").distinct, 1);
    }

    #[test]
    fn test_composition_whitespace_is_special() {
        let c = composition("a b");
        assert_eq!(c.special, 1);
        assert!(c.has_special());
    }

    #[test]
    fn test_composition_unicode_digits() {
        // Arabic-Indic three, four, five
        let c = composition("\u{663}\u{664}\u{665}");
        assert_eq!(c.digits, 3);
        assert_eq!(c.special, 0);
        assert_eq!(c.class_count(), 1);

        assert!(is_digit('\u{0967}'));
        assert!(is_digit('²'));
        assert!(is_digit('\u{1D7CE}'));
        assert!(!is_digit('½'));
        assert!(!is_digit('a'));
        // Arabic percent sign sits right after the Arabic-Indic digits
        assert!(!is_digit('\u{66A}'));
    }

    #[test]
    fn test_composition_ratio() {
        let c = composition("ab12");
        assert_eq!(c.ratio(c.digits), 0.5);
        assert_eq!(c.ratio(c.lowercase), 0.5);
    }
}
