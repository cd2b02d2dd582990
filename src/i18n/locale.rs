// SPDX-License-Identifier: MPL-2.0
//! The closed set of supported locales.

use crate::config::DEFAULT_LOCALE_CODE;
use std::fmt;
use unic_langid::{CharacterDirection, LanguageIdentifier};

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// HTML `dir` attribute value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::LeftToRight => "ltr",
            Direction::RightToLeft => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supported locale.
///
/// Values only come from [`SUPPORTED_LOCALES`], so holding a `Locale`
/// proves membership in the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    code: &'static str,
    display_name: &'static str,
    glyph: &'static str,
}

/// Supported locales, in display order. The first entry is the default.
pub const SUPPORTED_LOCALES: [Locale; 7] = [
    Locale::define("en", "English", "🇺🇸"),
    Locale::define("fr", "Français", "🇫🇷"),
    Locale::define("es", "Español", "🇪🇸"),
    Locale::define("de", "Deutsch", "🇩🇪"),
    Locale::define("ar", "العربية", "🇸🇦"),
    Locale::define("zh", "中文", "🇨🇳"),
    Locale::define("ja", "日本語", "🇯🇵"),
];

/// The locale whose table is complete.
pub const DEFAULT_LOCALE: Locale = SUPPORTED_LOCALES[0];

impl Locale {
    const fn define(code: &'static str, display_name: &'static str, glyph: &'static str) -> Self {
        Self {
            code,
            display_name,
            glyph,
        }
    }

    /// Finds a supported locale by exact code.
    #[must_use]
    pub fn find(code: &str) -> Option<Locale> {
        SUPPORTED_LOCALES.iter().copied().find(|l| l.code == code)
    }

    /// Finds a supported locale matching the language subtag of `langid`.
    ///
    /// `fr-CA` maps to `fr`; region and script are ignored.
    #[must_use]
    pub fn for_language(langid: &LanguageIdentifier) -> Option<Locale> {
        Self::find(langid.language.as_str())
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Flag glyph shown next to the name in language pickers.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        self.glyph
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.code == DEFAULT_LOCALE_CODE
    }

    #[must_use]
    pub fn language_identifier(&self) -> LanguageIdentifier {
        self.code.parse().unwrap_or_default()
    }

    /// Text direction, derived from the language code.
    #[must_use]
    pub fn direction(&self) -> Direction {
        match self.language_identifier().character_direction() {
            CharacterDirection::RTL => Direction::RightToLeft,
            _ => Direction::LeftToRight,
        }
    }
}

/// The supported locale matching the operating system's language, if any.
#[must_use]
pub fn system_locale() -> Option<Locale> {
    let os_locale = sys_locale::get_locale()?;
    let langid = os_locale.parse::<LanguageIdentifier>().ok()?;
    let locale = Locale::for_language(&langid);
    tracing::debug!(
        os_locale = %os_locale,
        matched = ?locale.map(|l| l.code()),
        "detected system locale"
    );
    locale
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_matches_configured_code() {
        assert_eq!(DEFAULT_LOCALE.code(), DEFAULT_LOCALE_CODE);
        assert!(DEFAULT_LOCALE.is_default());
        assert_eq!(Locale::default(), DEFAULT_LOCALE);
    }

    #[test]
    fn codes_are_unique() {
        for (i, a) in SUPPORTED_LOCALES.iter().enumerate() {
            for b in &SUPPORTED_LOCALES[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn find_is_exact() {
        assert_eq!(Locale::find("fr").map(|l| l.display_name()), Some("Français"));
        assert!(Locale::find("FR").is_none());
        assert!(Locale::find(" fr").is_none());
        assert!(Locale::find("xx").is_none());
    }

    #[test]
    fn arabic_is_right_to_left() {
        let ar = Locale::find("ar").expect("ar supported");
        assert_eq!(ar.direction(), Direction::RightToLeft);
        assert_eq!(ar.direction().as_str(), "rtl");
    }

    #[test]
    fn other_locales_are_left_to_right() {
        for locale in SUPPORTED_LOCALES.iter().filter(|l| l.code() != "ar") {
            assert_eq!(locale.direction(), Direction::LeftToRight, "{}", locale);
        }
    }

    #[test]
    fn for_language_ignores_region() {
        let langid: LanguageIdentifier = "fr-CA".parse().expect("valid tag");
        assert_eq!(Locale::for_language(&langid), Locale::find("fr"));

        let langid: LanguageIdentifier = "pt-BR".parse().expect("valid tag");
        assert!(Locale::for_language(&langid).is_none());
    }

    #[test]
    fn system_locale_is_supported_when_detected() {
        if let Some(locale) = system_locale() {
            assert!(SUPPORTED_LOCALES.contains(&locale));
        }
    }

    #[test]
    fn language_identifier_round_trips_code() {
        for locale in SUPPORTED_LOCALES {
            assert_eq!(locale.language_identifier().to_string(), locale.code());
        }
    }
}
