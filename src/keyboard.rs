//! Keyboard layout used for adjacency pattern detection.

/// Rows of a standard QWERTY keyboard, plus the digit row.
pub const QWERTY_ROWS: [&str; 4] = ["qwertyuiop", "asdfghjkl", "zxcvbnm", "1234567890"];

const TRIGRAM_LEN: usize = 3;

/// Immutable set of keyboard rows and their contiguous 3-key runs.
///
/// Rows are lowercased on construction, since patterns are matched against the
/// lowercased password. Rows shorter than three keys contribute no runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    rows: Vec<String>,
    trigrams: Vec<String>,
}

impl KeyboardLayout {
    /// Builds a layout from rows of adjacent keys, left to right.
    pub fn new<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<String> = rows
            .into_iter()
            .map(|r| r.as_ref().to_lowercase())
            .collect();

        let trigrams = rows
            .iter()
            .flat_map(|row| {
                let keys: Vec<char> = row.chars().collect();
                keys.windows(TRIGRAM_LEN)
                    .map(|w| w.iter().collect::<String>())
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { rows, trigrams }
    }

    /// The [`QWERTY_ROWS`] layout.
    pub fn qwerty() -> Self {
        Self::new(QWERTY_ROWS)
    }

    /// Lowercased rows, in construction order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Every contiguous 3-key run, row by row.
    pub fn trigrams(&self) -> impl Iterator<Item = &str> {
        self.trigrams.iter().map(String::as_str)
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::qwerty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qwerty_trigram_count() {
        // 8 + 7 + 5 + 8
        assert_eq!(KeyboardLayout::qwerty().trigrams().count(), 28);
    }

    #[test]
    fn test_trigrams_are_contiguous() {
        let layout = KeyboardLayout::new(["zxcvbnm"]);
        let trigrams: Vec<&str> = layout.trigrams().collect();
        assert_eq!(trigrams, vec!["zxc", "xcv", "cvb", "vbn", "bnm"]);
    }

    #[test]
    fn test_rows_are_lowercased() {
        let layout = KeyboardLayout::new(["QWE"]);
        assert_eq!(layout.rows(), &["qwe".to_string()]);
        assert_eq!(layout.trigrams().collect::<Vec<_>>(), vec!["qwe"]);
    }

    #[test]
    fn test_short_rows_have_no_trigrams() {
        let layout = KeyboardLayout::new(["ab", ""]);
        assert_eq!(layout.rows().len(), 2);
        assert_eq!(layout.trigrams().count(), 0);
    }

    #[test]
    fn test_default_is_qwerty() {
        assert_eq!(KeyboardLayout::default(), KeyboardLayout::qwerty());
    }
}
