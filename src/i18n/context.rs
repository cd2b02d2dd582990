// SPDX-License-Identifier: MPL-2.0
//! The handle presentational code receives.
//!
//! [`I18n`] bundles the shared [`LocaleStore`] with the [`Resolver`] and is
//! passed explicitly to whatever renders text. Components read through it and
//! change the locale through it; they never touch the tables directly.

use super::catalog::Catalog;
use super::locale::{system_locale, Locale, DEFAULT_LOCALE};
use super::persistence::{PreferenceBackend, SettingsFile};
use super::resolver::{Resolution, Resolver};
use super::store::{LocaleChange, LocaleStore, SubscriptionId};
use crate::error::Result;
use std::rc::Rc;

#[derive(Debug)]
pub struct I18n {
    store: Rc<LocaleStore>,
    resolver: Resolver,
}

impl I18n {
    pub fn new(store: Rc<LocaleStore>, catalog: Catalog) -> Self {
        let resolver = Resolver::new(Rc::clone(&store), catalog);
        Self { store, resolver }
    }

    /// Opens a store on `backend` and pairs it with `catalog`.
    pub fn open(backend: impl PreferenceBackend + 'static, catalog: Catalog) -> Self {
        Self::new(Rc::new(LocaleStore::open(backend)), catalog)
    }

    /// Standard setup: embedded tables, preference kept in `settings`.
    ///
    /// When the settings enable `detect_system_locale`, a first run starts on
    /// the operating system's language if it is supported.
    pub fn from_settings(settings: SettingsFile) -> Result<Self> {
        let config = match settings.config() {
            Ok(config) => config.unwrap_or_default(),
            Err(error) => {
                tracing::warn!(
                    path = %settings.path().display(),
                    %error,
                    "ignoring unreadable settings"
                );
                Default::default()
            }
        };
        let first_run = if config.detect_system_locale() {
            system_locale().unwrap_or(DEFAULT_LOCALE)
        } else {
            DEFAULT_LOCALE
        };
        let catalog = Catalog::embedded()?;
        let store = LocaleStore::open_with_fallback(settings, first_run);
        Ok(Self::new(Rc::new(store), catalog))
    }

    /// Translates `key` under the active locale.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.resolver.resolve(key)
    }

    #[must_use]
    pub fn lookup<'a>(&'a self, key: &'a str) -> Resolution<'a> {
        self.resolver.lookup(key)
    }

    #[must_use]
    pub fn active_locale(&self) -> Locale {
        self.store.active_locale()
    }

    pub fn set_locale(&self, code: &str) -> LocaleChange {
        self.store.set_active_locale(code)
    }

    #[must_use]
    pub fn supported_locales(&self) -> &'static [Locale] {
        self.store.supported_locales()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Locale) + 'static,
    {
        self.store.subscribe(callback)
    }

    /// Shared handle to the store, for components that only watch the locale.
    #[must_use]
    pub fn store(&self) -> Rc<LocaleStore> {
        Rc::clone(&self.store)
    }

    #[must_use]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }
}
