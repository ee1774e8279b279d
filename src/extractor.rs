//! Password feature extractor - main extraction logic.

use std::sync::OnceLock;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::common::{CommonPasswords, CommonPasswordsError};
use crate::features::{
    Composition, Feature, FeatureVector, Penalties, complexity_score, count_keyboard_patterns,
    count_repeated_runs, count_sequential_runs, flag, is_digit, shannon_entropy,
};
use crate::keyboard::KeyboardLayout;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("Extraction cancelled after {completed} passwords")]
    Cancelled { completed: usize },
}

/// Maps passwords to [`FeatureVector`]s.
///
/// Holds only immutable configuration, so one extractor can be shared across
/// threads and `extract` can be called concurrently.
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    common: CommonPasswords,
    keyboard: KeyboardLayout,
}

impl FeatureExtractor {
    /// Builds an extractor from an explicit common password set and layout.
    pub fn new(common: CommonPasswords, keyboard: KeyboardLayout) -> Self {
        Self { common, keyboard }
    }

    /// Builds an extractor with the common password set selected by
    /// `PWD_COMMON_PASSWORDS_PATH` and the QWERTY layout.
    pub fn from_env() -> Result<Self, CommonPasswordsError> {
        Ok(Self::new(CommonPasswords::from_env()?, KeyboardLayout::qwerty()))
    }

    /// Common password set used for `is_common`.
    pub fn common_passwords(&self) -> &CommonPasswords {
        &self.common
    }

    /// Keyboard rows used for `keyboard_patterns`.
    pub fn keyboard_layout(&self) -> &KeyboardLayout {
        &self.keyboard
    }

    /// Extracts all features from a password.
    ///
    /// Total over every string, including the empty one: ratios and
    /// normalizations divide by `max(length, 1)`.
    pub fn extract(&self, password: &str) -> FeatureVector {
        let chars: Vec<char> = password.chars().collect();
        let lowered = password.to_lowercase();

        let composition = Composition::of(&chars);
        let entropy = shannon_entropy(&chars);
        let sequential = count_sequential_runs(&chars);
        let repeated = count_repeated_runs(&chars);
        let keyboard = count_keyboard_patterns(&lowered, &self.keyboard);
        let is_common = self.common.contains_lowercased(&lowered);
        let complexity = complexity_score(
            &composition,
            Penalties {
                sequence: sequential > 0,
                repetition: repeated > 0,
                common: is_common,
            },
        );

        let length = composition.length;
        let mut v = FeatureVector::zeroed();

        v.set(Feature::Length, length as f64);
        v.set(Feature::LogLength, ((length + 1) as f64).ln());

        v.set(Feature::NumUppercase, composition.uppercase as f64);
        v.set(Feature::NumLowercase, composition.lowercase as f64);
        v.set(Feature::NumDigits, composition.digits as f64);
        v.set(Feature::NumSpecial, composition.special as f64);

        v.set(Feature::RatioUppercase, composition.ratio(composition.uppercase));
        v.set(Feature::RatioLowercase, composition.ratio(composition.lowercase));
        v.set(Feature::RatioDigits, composition.ratio(composition.digits));
        v.set(Feature::RatioSpecial, composition.ratio(composition.special));

        v.set(Feature::HasUppercase, flag(composition.has_uppercase()));
        v.set(Feature::HasLowercase, flag(composition.has_lowercase()));
        v.set(Feature::HasDigits, flag(composition.has_digits()));
        v.set(Feature::HasSpecial, flag(composition.has_special()));
        v.set(Feature::CharTypeCount, composition.class_count() as f64);

        v.set(Feature::Entropy, entropy);
        v.set(Feature::NormalizedEntropy, entropy / length.max(1) as f64);

        v.set(Feature::ComplexityScore, complexity);
        v.set(Feature::SequentialChars, sequential as f64);
        v.set(Feature::RepeatedChars, repeated as f64);
        v.set(Feature::KeyboardPatterns, keyboard as f64);

        v.set(Feature::IsCommon, flag(is_common));
        v.set(Feature::HasSequence, flag(sequential > 0));
        v.set(Feature::HasRepetition, flag(repeated > 0));

        v.set(
            Feature::StartsWithUppercase,
            flag(chars.first().is_some_and(|c| c.is_uppercase())),
        );
        v.set(
            Feature::EndsWithDigit,
            flag(chars.last().is_some_and(|&c| is_digit(c))),
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(length, complexity, is_common, "password features extracted");

        v
    }

    /// Extracts features from every password, preserving input order.
    ///
    /// # Arguments
    /// * `passwords` - The passwords to extract from
    /// * `token` - Optional cancellation token (async feature only), checked
    ///   before each password
    pub fn extract_batch(
        &self,
        passwords: &[SecretString],
        #[cfg(feature = "async")] token: Option<CancellationToken>,
    ) -> Result<Vec<FeatureVector>, BatchError> {
        let mut vectors = Vec::with_capacity(passwords.len());

        for password in passwords {
            #[cfg(feature = "async")]
            {
                if let Some(ref t) = token {
                    if t.is_cancelled() {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(
                            "Batch extraction cancelled after {} of {} passwords",
                            vectors.len(),
                            passwords.len()
                        );
                        return Err(BatchError::Cancelled {
                            completed: vectors.len(),
                        });
                    }
                }
            }

            vectors.push(self.extract(password.expose_secret()));
        }

        Ok(vectors)
    }
}

static DEFAULT_EXTRACTOR: OnceLock<FeatureExtractor> = OnceLock::new();

/// Shared extractor with the built-in common password set and QWERTY layout.
pub fn default_extractor() -> &'static FeatureExtractor {
    DEFAULT_EXTRACTOR.get_or_init(FeatureExtractor::default)
}

/// Extracts features from a password with the [`default_extractor`].
pub fn extract_password_features(password: &SecretString) -> FeatureVector {
    default_extractor().extract(password.expose_secret())
}

/// Delay before extracting, so keystrokes arriving in quick succession can
/// cancel stale work.
#[cfg(feature = "async")]
pub const EXTRACTION_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async version that sends the feature vector via channel.
///
/// Nothing is sent if `token` is cancelled during the debounce.
#[cfg(feature = "async")]
pub async fn extract_password_features_tx(
    extractor: &FeatureExtractor,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<FeatureVector>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("feature extraction is about to start...");

    tokio::time::sleep(EXTRACTION_DEBOUNCE).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Feature extraction cancelled before start");
        return;
    }

    let features = extractor.extract(password.expose_secret());

    if let Err(e) = tx.send(features).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password features: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::features::Feature;

    #[test]
    fn test_extract_batch_cancelled() {
        let extractor = FeatureExtractor::default();
        let passwords: Vec<SecretString> = ["one", "two"]
            .iter()
            .map(|p| SecretString::new(p.to_string().into()))
            .collect();

        let token = CancellationToken::new();
        token.cancel();

        let result = extractor.extract_batch(&passwords, Some(token));
        assert_eq!(result, Err(BatchError::Cancelled { completed: 0 }));
    }

    #[test]
    fn test_extract_batch_with_live_token() {
        let extractor = FeatureExtractor::default();
        let passwords = vec![SecretString::new("Aa1!".to_string().into())];

        let result = extractor.extract_batch(&passwords, Some(CancellationToken::new()));
        assert_eq!(result.map(|v| v.len()), Ok(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_extract_password_features_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let extractor = FeatureExtractor::default();
        let pwd = SecretString::new("TestPass123!".to_string().into());

        extract_password_features_tx(&extractor, &pwd, CancellationToken::new(), tx).await;

        let features = rx.recv().await.expect("Should receive features");
        assert_eq!(features[Feature::Length], 12.0);
        assert_eq!(features[Feature::EndsWithDigit], 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_extract_password_features_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let extractor = FeatureExtractor::default();
        let pwd = SecretString::new("TestPass123!".to_string().into());

        let token = CancellationToken::new();
        token.cancel();

        extract_password_features_tx(&extractor, &pwd, token, tx).await;

        // Sender dropped without sending
        assert!(rx.recv().await.is_none());
    }
}
