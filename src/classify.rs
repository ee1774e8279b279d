//! Strength tiers and the seam to a trained classifier.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::extractor::FeatureExtractor;
use crate::schema::{SchemaError, validate_columns};

const BAR_WIDTH: usize = 30;

/// Ordinal strength classes, labelled 0, 1, 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown strength label: {0}")]
pub struct UnknownLabel(pub i64);

impl StrengthTier {
    pub const ALL: [StrengthTier; 3] = [
        StrengthTier::Weak,
        StrengthTier::Medium,
        StrengthTier::Strong,
    ];

    /// Integer class label used in training data.
    pub const fn label(self) -> i64 {
        self as i64
    }

    /// Display name: `Weak`, `Medium` or `Strong`.
    pub const fn name(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
        }
    }
}

impl TryFrom<i64> for StrengthTier {
    type Error = UnknownLabel;

    fn try_from(label: i64) -> Result<Self, Self::Error> {
        match label {
            0 => Ok(StrengthTier::Weak),
            1 => Ok(StrengthTier::Medium),
            2 => Ok(StrengthTier::Strong),
            other => Err(UnknownLabel(other)),
        }
    }
}

impl StrengthTier {
    /// Tier with the highest probability. Ties go to the weaker tier.
    pub fn most_probable(probabilities: &[f64; 3]) -> StrengthTier {
        let mut best = StrengthTier::Weak;
        for tier in StrengthTier::ALL {
            if probabilities[tier.label() as usize] > probabilities[best.label() as usize] {
                best = tier;
            }
        }
        best
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A trained model mapping feature rows to strength tiers.
///
/// Any feature scaling the model was trained with is applied by the
/// implementor inside `predict_proba`.
pub trait StrengthClassifier {
    /// Ordered feature columns the model was trained on.
    fn feature_columns(&self) -> &[String];

    /// Per-tier probabilities, indexed by [`StrengthTier::label`].
    fn predict_proba(&self, row: &[f64]) -> [f64; 3];

    /// Most probable tier. Ties go to the weaker tier.
    fn predict(&self, row: &[f64]) -> StrengthTier {
        StrengthTier::most_probable(&self.predict_proba(row))
    }
}

/// Outcome of classifying one password. Never carries the password itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub tier: StrengthTier,
    pub probabilities: [f64; 3],
}

impl Classification {
    /// Probability assigned to `tier`.
    pub fn probability(&self, tier: StrengthTier) -> f64 {
        self.probabilities[tier.label() as usize]
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Strength: {}", self.tier)?;
        writeln!(f, "Confidence Probabilities:")?;
        for tier in StrengthTier::ALL {
            let prob = self.probability(tier);
            let filled = ((prob * BAR_WIDTH as f64) as usize).min(BAR_WIDTH);
            writeln!(
                f,
                "  {:<8}: {}{} {:5.2}%",
                tier.name(),
                "█".repeat(filled),
                "░".repeat(BAR_WIDTH - filled),
                prob * 100.0
            )?;
        }
        Ok(())
    }
}

/// Extracts features from `password` and runs them through `classifier`.
///
/// The model runs once; `tier` is the most probable entry of the returned
/// probabilities.
///
/// # Errors
///
/// Returns a [`SchemaError`] without running the model when the classifier's
/// feature columns differ from the extractor's schema.
pub fn classify<C: StrengthClassifier + ?Sized>(
    extractor: &FeatureExtractor,
    classifier: &C,
    password: &SecretString,
) -> Result<Classification, SchemaError> {
    if let Err(e) = validate_columns(classifier.feature_columns()) {
        #[cfg(feature = "tracing")]
        tracing::error!("Classifier feature columns rejected: {}", e);
        return Err(e);
    }

    let features = extractor.extract(password.expose_secret());
    let probabilities = classifier.predict_proba(features.as_slice());

    Ok(Classification {
        tier: StrengthTier::most_probable(&probabilities),
        probabilities,
    })
}
