//! Feature column validation.
//!
//! A classifier trained on feature vectors records the ordered column list it
//! was trained with. Inference is only valid when that list equals the
//! extractor's schema in both set and order, so mismatches are rejected
//! before any row is built.

use std::collections::HashSet;
use thiserror::Error;

use crate::features::{FEATURE_COUNT, Feature};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Unknown feature column: {0}")]
    Unknown(String),
    #[error("Duplicate feature column: {0}")]
    Duplicate(String),
    #[error("Missing feature column: {0}")]
    Missing(&'static str),
    #[error("Feature column {position} is {found}, expected {expected}")]
    OutOfOrder {
        position: usize,
        expected: &'static str,
        found: String,
    },
}

/// Checks that `columns` lists exactly the extractor's features, in order.
///
/// # Errors
///
/// Reports the first problem found, checking in this order:
/// - a column the extractor does not produce
/// - a column listed twice
/// - a feature absent from `columns`
/// - a column at the wrong position
pub fn validate_columns<S: AsRef<str>>(columns: &[S]) -> Result<(), SchemaError> {
    let mut seen: HashSet<Feature> = HashSet::with_capacity(FEATURE_COUNT);

    for column in columns {
        let name = column.as_ref();
        let feature =
            Feature::from_name(name).ok_or_else(|| SchemaError::Unknown(name.to_string()))?;
        if !seen.insert(feature) {
            return Err(SchemaError::Duplicate(name.to_string()));
        }
    }

    if let Some(missing) = Feature::ALL.iter().find(|f| !seen.contains(*f)) {
        return Err(SchemaError::Missing(missing.name()));
    }

    for (position, (column, expected)) in columns.iter().zip(Feature::ALL).enumerate() {
        if column.as_ref() != expected.name() {
            return Err(SchemaError::OutOfOrder {
                position,
                expected: expected.name(),
                found: column.as_ref().to_string(),
            });
        }
    }

    Ok(())
}
