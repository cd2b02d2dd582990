// SPDX-License-Identifier: MPL-2.0
//! Per-locale translation tables.
//!
//! Each locale ships as one TOML asset (`assets/i18n/<code>.toml`) embedded at
//! build time. Nested tables are flattened with `.`, so these are equivalent:
//!
//! ```toml
//! "nav.home" = "Home"
//!
//! [nav]
//! home = "Home"
//! ```
//!
//! A [`Catalog`] is immutable once built.

use super::locale::{Locale, DEFAULT_LOCALE, SUPPORTED_LOCALES};
use crate::error::{CatalogError, CompletenessIssue, Error, Result};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Flat key to display string mapping for one locale.
pub type Table = HashMap<String, String>;

/// How much of the default table a locale translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    pub translated: usize,
    pub total: usize,
}

impl Coverage {
    /// Fraction of default keys translated, in `0.0..=1.0`.
    #[must_use]
    pub fn ratio(self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.translated as f32 / self.total as f32
        }
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.translated == self.total
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<Locale, Table>,
}

impl Catalog {
    /// Loads the tables embedded in the binary.
    pub fn embedded() -> Result<Self> {
        let mut catalog = Self::default();
        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(code) = filename.strip_suffix(".toml") else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let text = String::from_utf8_lossy(content.data.as_ref());
                catalog.add_source(code, &text)?;
            }
        }
        catalog.require_default()?;
        Ok(catalog)
    }

    /// Builds a catalog from `(locale code, TOML text)` pairs.
    ///
    /// Sources for unsupported codes are skipped. A later source for the same
    /// locale is merged over an earlier one.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut catalog = Self::default();
        for (code, text) in sources {
            catalog.add_source(code, text)?;
        }
        catalog.require_default()?;
        Ok(catalog)
    }

    fn add_source(&mut self, code: &str, text: &str) -> Result<()> {
        let Some(locale) = Locale::find(code) else {
            tracing::warn!(code, "skipping translations for unsupported locale");
            return Ok(());
        };

        let parsed: toml::Table = toml::from_str(text).map_err(|e| CatalogError::Parse {
            locale: code.to_string(),
            message: e.to_string(),
        })?;

        let table = self.tables.entry(locale).or_default();
        flatten_into(code, None, parsed, table)?;
        tracing::debug!(code, keys = table.len(), "loaded translation table");
        Ok(())
    }

    fn require_default(&self) -> Result<()> {
        if self.tables.contains_key(&DEFAULT_LOCALE) {
            Ok(())
        } else {
            Err(CatalogError::MissingDefault(DEFAULT_LOCALE.code().to_string()).into())
        }
    }

    /// Looks up `key` in one locale's table. Empty values count as absent.
    #[must_use]
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables
            .get(&locale)?
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    #[must_use]
    pub fn table(&self, locale: Locale) -> Option<&Table> {
        self.tables.get(&locale)
    }

    /// Locales that have a table, in supported order.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        SUPPORTED_LOCALES
            .iter()
            .copied()
            .filter(|locale| self.tables.contains_key(locale))
    }

    /// Reports how much of the default table `locale` translates.
    #[must_use]
    pub fn coverage(&self, locale: Locale) -> Coverage {
        let Some(default_table) = self.tables.get(&DEFAULT_LOCALE) else {
            return Coverage {
                translated: 0,
                total: 0,
            };
        };
        let keys = default_table
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, _)| key);

        let mut coverage = Coverage {
            translated: 0,
            total: 0,
        };
        for key in keys {
            coverage.total += 1;
            if self.get(locale, key).is_some() {
                coverage.translated += 1;
            }
        }
        coverage
    }

    /// Verifies that the default table covers every key any locale defines
    /// and holds no empty values.
    pub fn check_completeness(&self) -> Result<()> {
        let issues = self.completeness_issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Error::IncompleteDefault(issues))
        }
    }

    /// Issues sorted by locale order, then key.
    #[must_use]
    pub fn completeness_issues(&self) -> Vec<CompletenessIssue> {
        let empty = Table::new();
        let default_table = self.tables.get(&DEFAULT_LOCALE).unwrap_or(&empty);
        let mut issues = Vec::new();

        let mut empty_keys: Vec<&String> = default_table
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(key, _)| key)
            .collect();
        empty_keys.sort();
        issues.extend(
            empty_keys
                .into_iter()
                .map(|key| CompletenessIssue::EmptyDefault { key: key.clone() }),
        );

        for locale in self.locales().filter(|l| !l.is_default()) {
            let Some(table) = self.tables.get(&locale) else {
                continue;
            };
            let mut missing: Vec<&String> = table
                .keys()
                .filter(|key| !default_table.contains_key(*key))
                .collect();
            missing.sort();
            issues.extend(missing.into_iter().map(|key| {
                CompletenessIssue::MissingInDefault {
                    locale: locale.code().to_string(),
                    key: key.clone(),
                }
            }));
        }

        issues
    }
}

fn flatten_into(
    code: &str,
    prefix: Option<&str>,
    source: toml::Table,
    out: &mut Table,
) -> std::result::Result<(), CatalogError> {
    for (name, value) in source {
        let key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, name),
            None => name,
        };
        match value {
            toml::Value::String(text) => {
                if out.insert(key.clone(), text).is_some() {
                    tracing::warn!(code, key = %key, "duplicate translation key, keeping last");
                }
            }
            toml::Value::Table(inner) => flatten_into(code, Some(&key), inner, out)?,
            _ => {
                return Err(CatalogError::NonStringValue {
                    locale: code.to_string(),
                    key,
                })
            }
        }
    }
    Ok(())
}
