// SPDX-License-Identifier: MPL-2.0
//! Key to display string resolution.
//!
//! Resolution chain, in order:
//!
//! 1. the active locale's table,
//! 2. the default locale's table,
//! 3. the key itself.
//!
//! Lookups are exact string matches and never fail. Values are returned as
//! stored; no placeholder substitution happens here.

use super::catalog::Catalog;
use super::locale::{Locale, DEFAULT_LOCALE};
use super::store::LocaleStore;
use std::rc::Rc;

/// Which tier of the resolution chain produced a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Active,
    Default,
    Key,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub text: &'a str,
    pub source: Source,
}

#[derive(Debug)]
pub struct Resolver {
    store: Rc<LocaleStore>,
    catalog: Catalog,
}

impl Resolver {
    pub fn new(store: Rc<LocaleStore>, catalog: Catalog) -> Self {
        Self { store, catalog }
    }

    /// Resolves `key` under the active locale.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        self.lookup(key).text.to_string()
    }

    /// Resolves `key` under the active locale, reporting which tier answered.
    #[must_use]
    pub fn lookup<'a>(&'a self, key: &'a str) -> Resolution<'a> {
        self.lookup_in(self.store.active_locale(), key)
    }

    /// Resolves `key` as if `locale` were active.
    #[must_use]
    pub fn lookup_in<'a>(&'a self, locale: Locale, key: &'a str) -> Resolution<'a> {
        if let Some(text) = self.catalog.get(locale, key) {
            return Resolution {
                text,
                source: Source::Active,
            };
        }

        if locale != DEFAULT_LOCALE {
            if let Some(text) = self.catalog.get(DEFAULT_LOCALE, key) {
                tracing::trace!(key, locale = locale.code(), "using default translation");
                return Resolution {
                    text,
                    source: Source::Default,
                };
            }
        }

        tracing::debug!(key, locale = locale.code(), "no translation, echoing key");
        Resolution {
            text: key,
            source: Source::Key,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn store(&self) -> &Rc<LocaleStore> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::persistence::MemoryPreference;

    const EN: &str = r#"
"nav.home" = "Home"
"testimonials.fiverr" = "5.0 on Fiverr"
"common.loading" = "Loading..."
"#;

    const FR: &str = r#"
"nav.home" = "Accueil"
"common.loading" = ""
"#;

    const DE: &str = r#"
"nav.home" = "Startseite"
"#;

    fn resolver(active: &str) -> Resolver {
        let catalog = Catalog::from_sources([("en", EN), ("fr", FR), ("de", DE)])
            .expect("valid catalog");
        let store = Rc::new(LocaleStore::open(MemoryPreference::with_value(active)));
        Resolver::new(store, catalog)
    }

    #[test]
    fn active_table_wins() {
        let resolver = resolver("fr");
        assert_eq!(resolver.resolve("nav.home"), "Accueil");
        assert_eq!(resolver.lookup("nav.home").source, Source::Active);
    }

    #[test]
    fn missing_key_falls_back_to_default_table() {
        let resolver = resolver("de");
        let resolution = resolver.lookup("testimonials.fiverr");
        assert_eq!(resolution.text, "5.0 on Fiverr");
        assert_eq!(resolution.source, Source::Default);
    }

    #[test]
    fn empty_translation_falls_back_to_default_table() {
        let resolver = resolver("fr");
        assert_eq!(resolver.resolve("common.loading"), "Loading...");
    }

    #[test]
    fn locale_without_table_uses_default_table() {
        let resolver = resolver("ja");
        assert_eq!(resolver.resolve("nav.home"), "Home");
    }

    #[test]
    fn unknown_key_is_echoed() {
        let resolver = resolver("ja");
        let resolution = resolver.lookup("does.not.exist");
        assert_eq!(resolution.text, "does.not.exist");
        assert_eq!(resolution.source, Source::Key);
    }

    #[test]
    fn default_locale_consults_one_table() {
        let resolver = resolver("en");
        assert_eq!(resolver.lookup("nav.home").source, Source::Active);
        assert_eq!(resolver.lookup("nope").source, Source::Key);
    }

    #[test]
    fn lookup_is_exact() {
        let resolver = resolver("fr");
        assert_eq!(resolver.resolve("NAV.HOME"), "NAV.HOME");
        assert_eq!(resolver.resolve(" nav.home"), " nav.home");
        assert_eq!(resolver.resolve(""), "");
    }

    #[test]
    fn resolution_follows_locale_changes() {
        let resolver = resolver("en");
        assert_eq!(resolver.resolve("nav.home"), "Home");
        resolver.store().set_active_locale("de");
        assert_eq!(resolver.resolve("nav.home"), "Startseite");
    }

    #[test]
    fn resolve_does_not_touch_store() {
        let pref = MemoryPreference::with_value("fr");
        let store = Rc::new(LocaleStore::open(pref.clone()));
        let catalog = Catalog::from_sources([("en", EN), ("fr", FR)]).expect("valid catalog");
        let resolver = Resolver::new(Rc::clone(&store), catalog);

        for key in ["nav.home", "testimonials.fiverr", "missing"] {
            let _ = resolver.resolve(key);
        }
        assert_eq!(store.active_locale().code(), "fr");
        assert_eq!(pref.writes(), 0);
    }

    #[test]
    fn default_keys_never_resolve_empty() {
        let resolver = resolver("en");
        let keys: Vec<String> = resolver
            .catalog()
            .table(DEFAULT_LOCALE)
            .expect("default table")
            .keys()
            .cloned()
            .collect();

        for locale in resolver.store().supported_locales() {
            for key in &keys {
                assert!(!resolver.lookup_in(*locale, key).text.is_empty(), "{} {}", locale, key);
            }
        }
    }
}
