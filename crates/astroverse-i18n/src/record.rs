//! Per-locale string records.
//!
//! # Invariants
//!
//! 1. **One shape**: both locales are instances of the same
//!    [`LocalizationRecord`] type, so they cannot diverge in field set.
//! 2. **Non-empty**: every field of every record holds visible text
//!    (checked by tests, not at runtime).
//! 3. **Immutable**: records are `static` and only handed out by shared
//!    reference.

use crate::locale::Locale;

macro_rules! localization_record {
    ($( $(#[$doc:meta])* $field:ident => $key:literal, )+) => {
        /// Every user-facing string the site needs for one locale.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub struct LocalizationRecord {
            $(
                $(#[$doc])*
                #[cfg_attr(feature = "serde", serde(rename = $key))]
                pub $field: &'static str,
            )+
        }

        impl LocalizationRecord {
            /// Number of fields in a record.
            pub const FIELD_COUNT: usize = [$($key),+].len();

            /// Upper-case keys of all fields, in declaration order.
            pub const KEYS: [&'static str; Self::FIELD_COUNT] = [$($key),+];

            /// `(key, value)` pairs in declaration order.
            #[must_use]
            pub fn fields(&self) -> [(&'static str, &'static str); Self::FIELD_COUNT] {
                [$(($key, self.$field)),+]
            }

            /// Look up a field by its upper-case key.
            #[must_use]
            pub fn get(&self, key: &str) -> Option<&'static str> {
                match key {
                    $($key => Some(self.$field),)+
                    _ => None,
                }
            }
        }
    };
}

localization_record! {
    /// Site name.
    site_title => "SITE_TITLE",
    /// Default meta description.
    site_description => "SITE_DESCRIPTION",
    /// Tag index page title.
    tags_title => "TAGS_TITLE",
    tags_description => "TAGS_DESCRIPTION",
    search_page_title => "SEARCH_PAGE_TITLE",
    search_page_description => "SEARCH_PAGE_DESCRIPTION",
    /// Navigation label back to the home page.
    go_to_homepage => "GO_TO_HOMEPAGE",
    error_404_submessage => "ERROR_404_SUBMESSAGE",
    error_404_message => "ERROR_404_MESSAGE",
    error_404_description => "ERROR_404_DESCRIPTION",
    error_404_title => "ERROR_404_TITLE",
    about_three_image_alt => "ABOUT_Three_IMAGE_ALT",
    about_three_content => "ABOUT_Three_CONTENT",
    about_three_title => "ABOUT_Three_TITLE",
    about_two_image_alt => "ABOUT_Two_IMAGE_ALT",
    about_two_content => "ABOUT_Two_CONTENT",
    about_two_title => "ABOUT_Two_TITLE",
    about_one_image_alt => "ABOUT_One_IMAGE_ALT",
    about_one_content => "ABOUT_One_CONTENT",
    about_one_title => "ABOUT_One_TITLE",
    about_description => "ABOUT_DESCRIPTION",
    about_title => "ABOUT_TITLE",
    /// Label before a post's last-modified date.
    updated_on => "UPDATED_ON",
    /// Label before a post's publication date.
    published_on => "PUBLISHED_ON",
    tags_heading => "TAGS_HEADING",
}

/// One of the three blocks on the about page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutBlock {
    pub title: &'static str,
    pub content: &'static str,
    pub image_alt: &'static str,
}

impl LocalizationRecord {
    /// About-page blocks in display order (one, two, three).
    #[must_use]
    pub fn about_blocks(&self) -> [AboutBlock; 3] {
        [
            AboutBlock {
                title: self.about_one_title,
                content: self.about_one_content,
                image_alt: self.about_one_image_alt,
            },
            AboutBlock {
                title: self.about_two_title,
                content: self.about_two_content,
                image_alt: self.about_two_image_alt,
            },
            AboutBlock {
                title: self.about_three_title,
                content: self.about_three_content,
                image_alt: self.about_three_image_alt,
            },
        ]
    }
}

const ZH_TAGLINE: &str = "增强版astro主题，适用于视觉博客，多语言支持助力全球受众。";
const EN_TAGLINE: &str =
    "Enhanced astro theme for impactful visual blogging, now with multilingual support for a global audience.";

/// Simplified Chinese strings.
pub static ZH: LocalizationRecord = LocalizationRecord {
    site_title: "星界",
    site_description: "星界 - 增强版astro主题，适用于视觉博客，多语言支持助力全球受众。",
    tags_title: "星界 - 所有标签",
    tags_description: "星界 - 增强版astro主题，适用于视觉博客，多语言支持助力全球受众。",
    search_page_title: "星界 - 站内搜索",
    search_page_description: "搜索星界全站内容",
    go_to_homepage: "返回首页",
    error_404_submessage: "您查找的页面不存在或已被移动。",
    error_404_message: "页面未找到",
    error_404_description: "404 - 页面未找到",
    error_404_title: "404 - 页面未找到",
    about_three_image_alt: "关于某甲",
    about_three_content: ZH_TAGLINE,
    about_three_title: "某甲",
    about_two_image_alt: "关于某乙",
    about_two_content: ZH_TAGLINE,
    about_two_title: "某乙",
    about_one_image_alt: "关于某丙",
    about_one_content: ZH_TAGLINE,
    about_one_title: "某丙",
    about_description: "关于星界- 增强版astro主题，适用于视觉博客，多语言支持助力全球受众。",
    about_title: "关于星界",
    updated_on: "更新于",
    published_on: "发布于",
    tags_heading: "标签",
};

/// English strings.
pub static EN: LocalizationRecord = LocalizationRecord {
    site_title: "astroVerse",
    site_description: "astroVerse - Enhanced astro theme for impactful visual blogging, now with multilingual support for a global audience.",
    tags_title: "astroVerse - All Tags",
    tags_description: "astroVerse - Enhanced astro theme for impactful visual blogging, now with multilingual support for a global audience.",
    search_page_title: "astroVerse - Site Search",
    search_page_description: "Search all content on astroVerse",
    go_to_homepage: "Go to Homepage",
    error_404_submessage: "The page you're looking for doesn't exist or has been moved.",
    error_404_message: "Page not found",
    error_404_description: "404 - Page not found",
    error_404_title: "404 - Page Not Found",
    about_three_image_alt: "About Three",
    about_three_content: EN_TAGLINE,
    about_three_title: "Three",
    about_two_image_alt: "About Two",
    about_two_content: EN_TAGLINE,
    about_two_title: "Two",
    about_one_image_alt: "About One",
    about_one_content: EN_TAGLINE,
    about_one_title: "One",
    about_description: "About astroVerse - Enhanced astro theme for impactful visual blogging, now with multilingual support for a global audience.",
    about_title: "About astroVerse",
    updated_on: "Updated on",
    published_on: "Published on",
    tags_heading: "Tags",
};

/// The string record for `locale`.
///
/// ```
/// use astroverse_i18n::{get_constants, Locale};
///
/// assert_eq!(get_constants(Locale::En).site_title, "astroVerse");
/// assert_eq!(get_constants(Locale::Zh).tags_heading, "标签");
/// ```
#[must_use]
pub fn get_constants(locale: Locale) -> &'static LocalizationRecord {
    match locale {
        Locale::Zh => &ZH,
        Locale::En => &EN,
    }
}

/// The string record for a free-form language tag.
///
/// Unsupported tags get the [`Locale::DEFAULT`] record.
#[must_use]
pub fn get_constants_for_tag(tag: &str) -> &'static LocalizationRecord {
    get_constants(Locale::resolve(tag))
}

/// The record for `locale` as pretty-printed JSON, keyed by upper-case field names.
#[cfg(feature = "serde")]
pub fn to_json(locale: Locale) -> serde_json::Result<String> {
    serde_json::to_string_pretty(get_constants(locale))
}
