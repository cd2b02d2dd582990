// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! # Features
//!
//! - A closed set of supported locales with display name, flag and direction
//! - Persistence of the selected locale in `settings.toml`
//! - Change notification for re-rendering and document attributes
//! - Key lookup with fallback: active locale, then default locale, then the key
//!
//! # Example
//!
//! ```
//! use folio_i18n::i18n::{Catalog, I18n, MemoryPreference};
//!
//! let catalog = Catalog::embedded().expect("embedded tables");
//! let i18n = I18n::open(MemoryPreference::new(), catalog);
//!
//! assert_eq!(i18n.tr("nav.home"), "Home");
//! i18n.set_locale("fr");
//! assert_eq!(i18n.tr("nav.home"), "Accueil");
//! assert_eq!(i18n.tr("no.such.key"), "no.such.key");
//! ```

pub mod catalog;
pub mod context;
pub mod document;
pub mod locale;
pub mod persistence;
pub mod resolver;
pub mod store;

pub use catalog::{Catalog, Coverage};
pub use context::I18n;
pub use document::DocumentAttributes;
pub use locale::{system_locale, Direction, Locale, DEFAULT_LOCALE, SUPPORTED_LOCALES};
pub use persistence::{MemoryPreference, PreferenceBackend, SettingsFile};
pub use resolver::{Resolution, Resolver, Source};
pub use store::{LocaleChange, LocaleStore, SubscriptionId};
