#![forbid(unsafe_code)]

//! Localized site strings for astroVerse.
//!
//! Holds one immutable [`LocalizationRecord`] per supported [`Locale`]
//! (Chinese and English) and formats the title/description pairs of tag and
//! category listing pages.
//!
//! # Role in astroVerse
//! The site generator asks this crate for display text and page metadata;
//! rendering, routing and content loading stay on the generator's side.
//!
//! # Default locale
//! [`Locale`] is closed, so every typed entry point is total. Free-form
//! language tags go through [`Locale::resolve`], which maps anything
//! unsupported to [`Locale::DEFAULT`] (English).
//!
//! ```
//! use astroverse_i18n::{get_constants, get_constants_for_tag, get_tag_metadata, Locale};
//!
//! assert_eq!(get_constants(Locale::Zh).site_title, "星界");
//! assert_eq!(get_constants_for_tag("fr").site_title, "astroVerse");
//! assert!(get_tag_metadata("rust", Locale::En).title.contains("'rust'"));
//! ```

pub mod catalog;
pub mod error;
pub mod locale;
pub mod metadata;
pub mod record;

pub use catalog::{LocaleStrings, StringCatalog};
pub use error::I18nError;
pub use locale::Locale;
pub use metadata::{
    MetadataTemplate, PageKind, PageMetadata, get_category_metadata, get_category_metadata_for_tag,
    get_tag_metadata, get_tag_metadata_for_tag,
};
#[cfg(feature = "serde")]
pub use record::to_json;
pub use record::{AboutBlock, LocalizationRecord, get_constants, get_constants_for_tag};
