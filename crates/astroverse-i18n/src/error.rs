//! Error type for the fallible entry points.

use std::fmt;

/// Errors from i18n operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// A language tag did not name a supported locale.
    InvalidLocale(String),
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLocale(tag) => write!(f, "unsupported locale: {tag:?}"),
        }
    }
}

impl std::error::Error for I18nError {}
