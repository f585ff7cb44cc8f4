//! Title/description pairs for tag and category listing pages.
//!
//! Each locale carries one template pair per [`PageKind`], registered in the
//! built-in [`StringCatalog`] under `TAG_TITLE`, `TAG_DESCRIPTION`,
//! `CATEGORY_TITLE` and `CATEGORY_DESCRIPTION`. The caller's term is filled
//! in verbatim: no escaping, trimming, or case changes, and the filled value
//! is never re-scanned for placeholders.

use crate::catalog::StringCatalog;
use crate::locale::Locale;

/// Page `<title>` and meta description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

/// Listing pages that get generated metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Tag,
    Category,
}

/// A title/description template pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataTemplate {
    pub title: &'static str,
    pub description: &'static str,
}

const TAG_ZH: MetadataTemplate = MetadataTemplate {
    title: "星界中'{tag}'主题的所有文章",
    description: "浏览星界关于{tag}的文章。",
};

const TAG_EN: MetadataTemplate = MetadataTemplate {
    title: "All articles on '{tag}' in astroVerse",
    description: "Browse articles about {tag} on astroVerse.",
};

const CATEGORY_ZH: MetadataTemplate = MetadataTemplate {
    title: "星界'{category}'相关的文章",
    description: "在星界中浏览有关{category}主题的所有文章",
};

const CATEGORY_EN: MetadataTemplate = MetadataTemplate {
    title: "Articles related to '{category}' on astroVerse",
    description: "Browse all articles on {category} in astroVerse",
};

impl PageKind {
    pub const ALL: [Self; 2] = [Self::Tag, Self::Category];

    /// Placeholder name used in this kind's templates, without braces.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Category => "category",
        }
    }

    /// Catalog key of the title template.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::Tag => "TAG_TITLE",
            Self::Category => "CATEGORY_TITLE",
        }
    }

    /// Catalog key of the description template.
    #[must_use]
    pub const fn description_key(self) -> &'static str {
        match self {
            Self::Tag => "TAG_DESCRIPTION",
            Self::Category => "CATEGORY_DESCRIPTION",
        }
    }

    /// Built-in template pair for `locale`.
    #[must_use]
    pub fn template(self, locale: Locale) -> &'static MetadataTemplate {
        match (self, locale) {
            (Self::Tag, Locale::Zh) => &TAG_ZH,
            (Self::Tag, Locale::En) => &TAG_EN,
            (Self::Category, Locale::Zh) => &CATEGORY_ZH,
            (Self::Category, Locale::En) => &CATEGORY_EN,
        }
    }
}

/// Metadata for the listing page of `tag`.
///
/// ```
/// use astroverse_i18n::{get_tag_metadata, Locale};
///
/// let meta = get_tag_metadata("travel", Locale::En);
/// assert_eq!(meta.title, "All articles on 'travel' in astroVerse");
/// assert_eq!(meta.description, "Browse articles about travel on astroVerse.");
/// ```
#[must_use]
pub fn get_tag_metadata(tag: &str, locale: Locale) -> PageMetadata {
    StringCatalog::global().metadata(locale, PageKind::Tag, tag)
}

/// Metadata for the listing page of `category`.
///
/// ```
/// use astroverse_i18n::{get_category_metadata, Locale};
///
/// let meta = get_category_metadata("旅行", Locale::Zh);
/// assert_eq!(meta.title, "星界'旅行'相关的文章");
/// assert_eq!(meta.description, "在星界中浏览有关旅行主题的所有文章");
/// ```
#[must_use]
pub fn get_category_metadata(category: &str, locale: Locale) -> PageMetadata {
    StringCatalog::global().metadata(locale, PageKind::Category, category)
}

/// [`get_tag_metadata`] for a free-form language tag (unsupported tags use English).
#[must_use]
pub fn get_tag_metadata_for_tag(tag: &str, lang: &str) -> PageMetadata {
    get_tag_metadata(tag, Locale::resolve(lang))
}

/// [`get_category_metadata`] for a free-form language tag (unsupported tags use English).
#[must_use]
pub fn get_category_metadata_for_tag(category: &str, lang: &str) -> PageMetadata {
    get_category_metadata(category, Locale::resolve(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_metadata_english() {
        let meta = get_tag_metadata("travel", Locale::En);
        assert_eq!(
            meta,
            PageMetadata {
                title: "All articles on 'travel' in astroVerse".into(),
                description: "Browse articles about travel on astroVerse.".into(),
            }
        );
    }

    #[test]
    fn tag_metadata_chinese() {
        let meta = get_tag_metadata("摄影", Locale::Zh);
        assert_eq!(meta.title, "星界中'摄影'主题的所有文章");
        assert_eq!(meta.description, "浏览星界关于摄影的文章。");
    }

    #[test]
    fn category_metadata_chinese() {
        let meta = get_category_metadata("旅行", Locale::Zh);
        assert_eq!(meta.title, "星界'旅行'相关的文章");
        assert_eq!(meta.description, "在星界中浏览有关旅行主题的所有文章");
    }

    #[test]
    fn category_metadata_english() {
        let meta = get_category_metadata("Rust", Locale::En);
        assert_eq!(meta.title, "Articles related to 'Rust' on astroVerse");
        assert_eq!(meta.description, "Browse all articles on Rust in astroVerse");
    }

    #[test]
    fn term_is_inserted_verbatim() {
        let odd = "  <b>Mixed Case</b> & 'quotes' ";
        let meta = get_tag_metadata(odd, Locale::En);
        assert_eq!(meta.title, format!("All articles on '{odd}' in astroVerse"));
        assert!(meta.description.contains(odd));
    }

    #[test]
    fn empty_term() {
        let meta = get_tag_metadata("", Locale::En);
        assert_eq!(meta.title, "All articles on '' in astroVerse");
        let meta = get_category_metadata("", Locale::Zh);
        assert_eq!(meta.description, "在星界中浏览有关主题的所有文章");
    }

    #[test]
    fn placeholder_in_term_is_not_expanded() {
        let meta = get_tag_metadata("{tag}", Locale::En);
        assert_eq!(meta.title, "All articles on '{tag}' in astroVerse");
        let meta = get_category_metadata("{category}", Locale::En);
        assert_eq!(meta.description, "Browse all articles on {category} in astroVerse");
    }

    #[test]
    fn tags_and_categories_use_distinct_templates() {
        for locale in Locale::ALL {
            assert_ne!(
                get_tag_metadata("x", locale),
                get_category_metadata("x", locale)
            );
        }
    }

    #[test]
    fn templates_carry_their_placeholder() {
        for locale in Locale::ALL {
            for kind in PageKind::ALL {
                let template = kind.template(locale);
                let token = format!("{{{}}}", kind.placeholder());
                assert!(template.title.contains(&token));
                assert!(template.description.contains(&token));
            }
        }
    }

    #[test]
    fn string_tag_variants_fall_back_to_english() {
        assert_eq!(
            get_tag_metadata_for_tag("travel", "fr"),
            get_tag_metadata("travel", Locale::En)
        );
        assert_eq!(
            get_category_metadata_for_tag("旅行", "zh_CN.UTF-8"),
            get_category_metadata("旅行", Locale::Zh)
        );
    }

    #[test]
    fn repeated_calls_are_equal() {
        for locale in Locale::ALL {
            assert_eq!(get_tag_metadata("a", locale), get_tag_metadata("a", locale));
            assert_eq!(
                get_category_metadata("b", locale),
                get_category_metadata("b", locale)
            );
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_for_the_site_generator() {
        let value = serde_json::to_value(get_tag_metadata("x", Locale::En)).unwrap();
        assert_eq!(value["title"], "All articles on 'x' in astroVerse");
        assert_eq!(value["description"], "Browse articles about x on astroVerse.");
        assert_eq!(serde_json::to_value(Locale::Zh).unwrap(), "zh");
    }
}
