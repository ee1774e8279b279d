//! Common password set
//!
//! Handles loading and querying the set of known-weak passwords.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a common-password file.
pub const COMMON_PASSWORDS_ENV: &str = "PWD_COMMON_PASSWORDS_PATH";

const BUILTIN_COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "123456789",
    "12345678",
    "12345",
    "1234567",
    "1234567890",
    "qwerty",
    "abc123",
    "password1",
    "admin",
    "letmein",
    "welcome",
    "monkey",
];

#[derive(Error, Debug)]
pub enum CommonPasswordsError {
    #[error("Common password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common password file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common password file is empty")]
    EmptyFile,
}

/// Returns the common password file path from `PWD_COMMON_PASSWORDS_PATH`,
/// or `None` when the built-in set should be used.
pub fn common_passwords_path() -> Option<PathBuf> {
    std::env::var_os(COMMON_PASSWORDS_ENV).map(PathBuf::from)
}

/// Immutable set of known-weak passwords, stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPasswords {
    entries: HashSet<String>,
}

impl CommonPasswords {
    /// The built-in set of well-known weak passwords.
    pub fn builtin() -> Self {
        BUILTIN_COMMON_PASSWORDS.iter().collect()
    }

    /// Loads a newline-separated password file.
    ///
    /// Entries are trimmed and lowercased; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CommonPasswordsError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password load FAILED: FileNotFound {}", path.display());
            return Err(CommonPasswordsError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let set: Self = content.lines().collect();

        if set.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password load FAILED: Empty file {}", path.display());
            return Err(CommonPasswordsError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Common passwords loaded: {} entries from {:?}", set.len(), path);

        Ok(set)
    }

    /// Loads the file named by `PWD_COMMON_PASSWORDS_PATH`, falling back to
    /// [`CommonPasswords::builtin`] when the variable is unset.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// unsafe { std::env::set_var("PWD_COMMON_PASSWORDS_PATH", "/etc/myapp/common.txt"); }
    /// let common = pwd_features::CommonPasswords::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, CommonPasswordsError> {
        match common_passwords_path() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.contains_lowercased(&password.to_lowercase())
    }

    pub(crate) fn contains_lowercased(&self, lowered: &str) -> bool {
        self.entries.contains(lowered)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowercased entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for CommonPasswords {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CommonPasswords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|l| l.as_ref().trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Self { entries }
    }
}
