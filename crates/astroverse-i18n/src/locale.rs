//! Supported locales, tag parsing, and environment detection.
//!
//! The locale set is closed: [`Locale::Zh`] and [`Locale::En`]. Anything that
//! arrives as free-form text goes through [`Locale::parse`] (strict) or
//! [`Locale::resolve`] (lenient, falls back to [`Locale::DEFAULT`]).

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::I18nError;

/// Environment variables consulted by [`Locale::from_env`], in order.
pub const LOCALE_ENV_VARS: [&str; 4] = ["ASTROVERSE_LANG", "LC_ALL", "LC_MESSAGES", "LANG"];

/// A supported site locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// Simplified Chinese (`zh`).
    Zh,
    /// English (`en`).
    En,
}

impl Locale {
    /// Locale used for every tag outside the supported set.
    pub const DEFAULT: Self = Self::En;

    /// All supported locales.
    pub const ALL: [Self; 2] = [Self::Zh, Self::En];

    /// Short language code (`"zh"` or `"en"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// Strictly parse a language tag.
    ///
    /// Accepts `zh`, `zh-CN`, `zh_TW.UTF-8`, `EN-us` and similar. Only the
    /// primary subtag decides; `C`, `POSIX`, empty input and other languages
    /// are rejected.
    pub fn parse(tag: &str) -> Result<Self, I18nError> {
        let trimmed = tag.trim();
        let without_encoding = trimmed.split_once('.').map_or(trimmed, |(lang, _)| lang);
        let primary = without_encoding
            .split(['-', '_', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "zh" => Ok(Self::Zh),
            "en" => Ok(Self::En),
            _ => Err(I18nError::InvalidLocale(tag.to_string())),
        }
    }

    /// Parse a language tag, falling back to [`Locale::DEFAULT`].
    #[must_use]
    pub fn resolve(tag: &str) -> Self {
        match Self::parse(tag) {
            Ok(locale) => locale,
            Err(_) => {
                tracing::debug!(tag, fallback = Self::DEFAULT.code(), "unsupported locale tag");
                Self::DEFAULT
            }
        }
    }

    /// Detect the locale using a custom environment lookup.
    ///
    /// Walks [`LOCALE_ENV_VARS`] and returns the first value that parses.
    /// Unset or unparseable variables are skipped.
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for var in LOCALE_ENV_VARS {
            let Some(value) = get_env(var) else {
                continue;
            };
            if let Ok(locale) = Self::parse(&value) {
                tracing::debug!(var, locale = locale.code(), "locale selected from environment");
                return locale;
            }
        }
        Self::DEFAULT
    }

    /// Locale detected from the process environment (cached).
    #[must_use]
    pub fn from_env() -> Self {
        static ENV_LOCALE: OnceLock<Locale> = OnceLock::new();
        *ENV_LOCALE.get_or_init(|| Self::from_env_with(|key| std::env::var(key).ok()))
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
