//! Typed error definitions for declutter.
//! Only the failures that stop a run before anything moves live here; per-file
//! and per-group problems are recorded as skips in the reports instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("Not a directory or does not exist: {0}")]
    InvalidDirectory(PathBuf),

    #[error("Cannot list directory {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Search text must not be empty")]
    EmptyPattern,

    #[error("No files found containing '{0}'")]
    NoMatch(String),

    #[error("No common name tokens detected")]
    NoTokensDetected,
}

impl OrganizeError {
    /// Stable numeric code for logs and scripts.
    ///
    /// `NoMatch` and `NoTokensDetected` carry codes for library callers only;
    /// the `declutter` binary treats them as nothing to do and exits 0.
    pub fn code(&self) -> u8 {
        match self {
            OrganizeError::InvalidDirectory(_) => 2,
            OrganizeError::Scan { .. } => 3,
            OrganizeError::EmptyPattern => 4,
            OrganizeError::NoMatch(_) => 10,
            OrganizeError::NoTokensDetected => 11,
        }
    }

    /// True for outcomes that mean "nothing to do" rather than a failure.
    pub fn is_nothing_to_do(&self) -> bool {
        matches!(
            self,
            OrganizeError::NoMatch(_) | OrganizeError::NoTokensDetected
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_do_outcomes_are_told_apart_from_failures() {
        assert!(OrganizeError::NoMatch("x".into()).is_nothing_to_do());
        assert!(OrganizeError::NoTokensDetected.is_nothing_to_do());
        assert!(!OrganizeError::EmptyPattern.is_nothing_to_do());
        assert!(!OrganizeError::InvalidDirectory(PathBuf::from("/nope")).is_nothing_to_do());
        assert_eq!(OrganizeError::NoMatch("x".into()).code(), 10);
        assert_eq!(OrganizeError::NoTokensDetected.code(), 11);
    }
}
