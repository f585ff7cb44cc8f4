//! Runtime-keyed view of the site strings and page templates.
//!
//! The built-in catalog holds every [`LocalizationRecord`] field under its
//! upper-case key plus the listing-page templates (`TAG_TITLE`,
//! `TAG_DESCRIPTION`, `CATEGORY_TITLE`, `CATEGORY_DESCRIPTION`). Templates
//! use `{name}` placeholders filled by [`StringCatalog::format`].
//!
//! # Invariants
//!
//! 1. A lookup tries the requested locale, then the fallback locale once.
//! 2. Interpolation is single-pass: substituted values are never re-scanned.
//! 3. The catalog is immutable once built and shared as `&'static` through
//!    [`StringCatalog::global`].

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::locale::Locale;
use crate::metadata::{PageKind, PageMetadata};
use crate::record::{LocalizationRecord, get_constants};

/// Strings for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record fields and listing-page templates for `locale`.
    #[must_use]
    pub fn builtin(locale: Locale) -> Self {
        let mut strings = Self::from_record(get_constants(locale));
        for kind in PageKind::ALL {
            let template = kind.template(locale);
            strings.insert(kind.title_key(), template.title);
            strings.insert(kind.description_key(), template.description);
        }
        strings
    }

    /// Every field of a record, keyed by its upper-case name.
    #[must_use]
    pub fn from_record(record: &LocalizationRecord) -> Self {
        let mut strings = Self::new();
        for (key, value) in record.fields() {
            strings.insert(key, value);
        }
        strings
    }

    /// Insert a string, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// String catalog keyed by [`Locale`].
///
/// ```
/// use astroverse_i18n::{Locale, StringCatalog};
///
/// let catalog = StringCatalog::global();
/// assert_eq!(catalog.get(Locale::Zh, "GO_TO_HOMEPAGE"), Some("返回首页"));
/// assert_eq!(catalog.get_by_tag("fr-FR", "TAGS_HEADING"), Some("Tags"));
/// assert_eq!(
///     catalog.format(Locale::En, "TAG_TITLE", &[("tag", "rust")]),
///     Some("All articles on 'rust' in astroVerse".into())
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: HashMap<Locale, LocaleStrings>,
    fallback: Option<Locale>,
}

impl StringCatalog {
    /// Empty catalog with no fallback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog over the built-in strings, falling back to [`Locale::DEFAULT`].
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for locale in Locale::ALL {
            catalog.add_locale(locale, LocaleStrings::builtin(locale));
        }
        catalog.set_fallback(Some(Locale::DEFAULT));
        catalog
    }

    /// Process-wide built-in catalog, constructed on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<StringCatalog> = OnceLock::new();
        GLOBAL.get_or_init(Self::builtin)
    }

    /// Add (or replace) the strings for a locale.
    pub fn add_locale(&mut self, locale: Locale, strings: LocaleStrings) {
        self.locales.insert(locale, strings);
    }

    pub fn set_fallback(&mut self, fallback: Option<Locale>) {
        self.fallback = fallback;
    }

    #[must_use]
    pub fn fallback(&self) -> Option<Locale> {
        self.fallback
    }

    /// Look up `key` in `locale`, then in the fallback locale.
    #[must_use]
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        let lookup = |l: Locale| self.locales.get(&l).and_then(|ls| ls.get(key));
        let found = lookup(locale).or_else(|| {
            self.fallback
                .filter(|&fb| fb != locale)
                .and_then(lookup)
        });
        if found.is_none() {
            tracing::trace!(locale = locale.code(), key, "catalog miss");
        }
        found
    }

    /// [`get`](Self::get) for a free-form language tag.
    ///
    /// Unsupported tags resolve to [`Locale::DEFAULT`].
    #[must_use]
    pub fn get_by_tag(&self, tag: &str, key: &str) -> Option<&str> {
        self.get(Locale::resolve(tag), key)
    }

    /// Look up a template and fill its `{name}` placeholders from `args`.
    ///
    /// Placeholders without a matching arg are left as-is.
    #[must_use]
    pub fn format(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(locale, key).map(|template| interpolate(template, args))
    }

    /// Fill `term` into the title and description templates of `kind`.
    ///
    /// A catalog without the template keys (e.g. a hand-built one) uses the
    /// built-in template for `locale`.
    #[must_use]
    pub fn metadata(&self, locale: Locale, kind: PageKind, term: &str) -> PageMetadata {
        let args = [(kind.placeholder(), term)];
        let builtin = kind.template(locale);
        let fill = |key: &str, default: &str| {
            self.format(locale, key, &args)
                .unwrap_or_else(|| interpolate(default, &args))
        };
        PageMetadata {
            title: fill(kind.title_key(), builtin.title),
            description: fill(kind.description_key(), builtin.description),
        }
    }

    /// Registered locales, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.locales.keys().copied().collect();
        locales.sort_unstable();
        locales
    }
}

/// Replace each `{name}` in `template` with its value from `args`.
///
/// Unknown names and an unclosed trailing `{` are copied through unchanged.
pub(crate) fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..close];
        match args.iter().find(|(arg, _)| *arg == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..=open + close + 1]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
