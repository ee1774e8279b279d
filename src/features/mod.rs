//! Password feature schema and the computations behind each feature.
//!
//! Every password maps to a [`FeatureVector`] with the same [`FEATURE_COUNT`]
//! columns in the same order, so it can be fed to a classifier trained on a
//! fixed-width numeric input.

mod complexity;
mod composition;
mod entropy;
mod patterns;

use std::fmt;
use std::ops::Index;

pub(crate) use complexity::{Penalties, complexity_score};
pub(crate) use composition::{Composition, is_digit};
pub(crate) use entropy::shannon_entropy;
pub(crate) use patterns::{count_keyboard_patterns, count_repeated_runs, count_sequential_runs};

/// Number of columns in a [`FeatureVector`].
pub const FEATURE_COUNT: usize = 26;

/// A single feature column. Discriminants are the column positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    Length,
    LogLength,
    NumUppercase,
    NumLowercase,
    NumDigits,
    NumSpecial,
    RatioUppercase,
    RatioLowercase,
    RatioDigits,
    RatioSpecial,
    HasUppercase,
    HasLowercase,
    HasDigits,
    HasSpecial,
    CharTypeCount,
    Entropy,
    NormalizedEntropy,
    ComplexityScore,
    SequentialChars,
    RepeatedChars,
    KeyboardPatterns,
    IsCommon,
    HasSequence,
    HasRepetition,
    StartsWithUppercase,
    EndsWithDigit,
}

impl Feature {
    /// All features in column order.
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Length,
        Feature::LogLength,
        Feature::NumUppercase,
        Feature::NumLowercase,
        Feature::NumDigits,
        Feature::NumSpecial,
        Feature::RatioUppercase,
        Feature::RatioLowercase,
        Feature::RatioDigits,
        Feature::RatioSpecial,
        Feature::HasUppercase,
        Feature::HasLowercase,
        Feature::HasDigits,
        Feature::HasSpecial,
        Feature::CharTypeCount,
        Feature::Entropy,
        Feature::NormalizedEntropy,
        Feature::ComplexityScore,
        Feature::SequentialChars,
        Feature::RepeatedChars,
        Feature::KeyboardPatterns,
        Feature::IsCommon,
        Feature::HasSequence,
        Feature::HasRepetition,
        Feature::StartsWithUppercase,
        Feature::EndsWithDigit,
    ];

    /// Column name as used by training data and classifiers.
    pub const fn name(self) -> &'static str {
        match self {
            Feature::Length => "length",
            Feature::LogLength => "log_length",
            Feature::NumUppercase => "num_uppercase",
            Feature::NumLowercase => "num_lowercase",
            Feature::NumDigits => "num_digits",
            Feature::NumSpecial => "num_special",
            Feature::RatioUppercase => "ratio_uppercase",
            Feature::RatioLowercase => "ratio_lowercase",
            Feature::RatioDigits => "ratio_digits",
            Feature::RatioSpecial => "ratio_special",
            Feature::HasUppercase => "has_uppercase",
            Feature::HasLowercase => "has_lowercase",
            Feature::HasDigits => "has_digits",
            Feature::HasSpecial => "has_special",
            Feature::CharTypeCount => "char_type_count",
            Feature::Entropy => "entropy",
            Feature::NormalizedEntropy => "normalized_entropy",
            Feature::ComplexityScore => "complexity_score",
            Feature::SequentialChars => "sequential_chars",
            Feature::RepeatedChars => "repeated_chars",
            Feature::KeyboardPatterns => "keyboard_patterns",
            Feature::IsCommon => "is_common",
            Feature::HasSequence => "has_sequence",
            Feature::HasRepetition => "has_repetition",
            Feature::StartsWithUppercase => "starts_with_uppercase",
            Feature::EndsWithDigit => "ends_with_digit",
        }
    }

    /// Looks up a feature by its column name.
    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// Column position of this feature.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Column names in order.
pub fn feature_names() -> impl Iterator<Item = &'static str> {
    Feature::ALL.iter().map(|f| f.name())
}

/// Fixed-schema numeric summary of a password.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub(crate) fn zeroed() -> Self {
        Self {
            values: [0.0; FEATURE_COUNT],
        }
    }

    pub(crate) fn set(&mut self, feature: Feature, value: f64) {
        self.values[feature.index()] = value;
    }

    /// Value of one feature.
    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    /// Value of the feature with column name `name`, if there is one.
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        Feature::from_name(name).map(|f| self.get(f))
    }

    /// Values in column order, ready to be used as a classifier row.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// `(name, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        Feature::ALL.iter().map(|f| (f.name(), self.get(*f)))
    }

    /// Always [`FEATURE_COUNT`].
    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Index<Feature> for FeatureVector {
    type Output = f64;

    fn index(&self, feature: Feature) -> &f64 {
        &self.values[feature.index()]
    }
}

pub(crate) fn flag(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_feature_positions_match_all() {
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i, "{} is out of place", feature);
        }
    }

    #[test]
    fn test_feature_names_are_unique() {
        let names: HashSet<&str> = feature_names().collect();
        assert_eq!(names.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_feature_from_name() {
        assert_eq!(Feature::from_name("entropy"), Some(Feature::Entropy));
        assert_eq!(Feature::from_name("ends_with_digit"), Some(Feature::EndsWithDigit));
        assert_eq!(Feature::from_name("Entropy"), None);
        assert_eq!(Feature::from_name("strength_label"), None);
    }

    #[test]
    fn test_vector_set_and_get() {
        let mut vector = FeatureVector::zeroed();
        vector.set(Feature::KeyboardPatterns, 3.0);

        assert_eq!(vector.get(Feature::KeyboardPatterns), 3.0);
        assert_eq!(vector[Feature::KeyboardPatterns], 3.0);
        assert_eq!(vector.get_by_name("keyboard_patterns"), Some(3.0));
        assert_eq!(vector.get_by_name("unknown"), None);
        assert_eq!(vector.as_slice()[Feature::KeyboardPatterns.index()], 3.0);
    }

    #[test]
    fn test_vector_iter_follows_column_order() {
        let vector = FeatureVector::zeroed();
        let names: Vec<&str> = vector.iter().map(|(name, _)| name).collect();
        let expected: Vec<&str> = feature_names().collect();
        assert_eq!(names, expected);
        assert_eq!(vector.len(), FEATURE_COUNT);
    }
}
