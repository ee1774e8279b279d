//! Password feature extraction library
//!
//! This library maps passwords to fixed-schema numeric feature vectors
//! for password strength classification.
//!
//! # Features
//!
//! - `async` (default): Enables batch cancellation and channel-based extraction
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_COMMON_PASSWORDS_PATH`: Custom common password file
//!   (default: built-in set)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_features::{Feature, FeatureExtractor};
//!
//! // Build once at startup, share freely
//! let extractor = FeatureExtractor::from_env().expect("Failed to load common passwords");
//!
//! let features = extractor.extract("MyP@ssw0rd!");
//!
//! println!("Entropy: {}", features[Feature::Entropy]);
//! for (name, value) in features.iter() {
//!     println!("{name}: {value}");
//! }
//! ```

// Internal modules
mod classify;
mod common;
mod extractor;
mod features;
mod keyboard;
mod schema;

// Public API
pub use classify::{Classification, StrengthClassifier, StrengthTier, UnknownLabel, classify};
pub use common::{
    COMMON_PASSWORDS_ENV, CommonPasswords, CommonPasswordsError, common_passwords_path,
};
pub use extractor::{BatchError, FeatureExtractor, default_extractor, extract_password_features};
pub use features::{FEATURE_COUNT, Feature, FeatureVector, feature_names};
pub use keyboard::{KeyboardLayout, QWERTY_ROWS};
pub use schema::{SchemaError, validate_columns};

#[cfg(feature = "async")]
pub use extractor::{EXTRACTION_DEBOUNCE, extract_password_features_tx};
