// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    /// The default locale's table does not cover every key used by the other locales.
    IncompleteDefault(Vec<CompletenessIssue>),
}

/// Problems found while building a translation catalog from its assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The asset is not valid TOML.
    Parse { locale: String, message: String },
    /// A value other than a string or table was found at `key`.
    NonStringValue { locale: String, key: String },
    /// No table was provided for the default locale.
    MissingDefault(String),
}

/// A single gap between a locale table and the default table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletenessIssue {
    /// `key` is translated in `locale` but absent from the default table.
    MissingInDefault { locale: String, key: String },
    /// The default table maps `key` to an empty string.
    EmptyDefault { key: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse { locale, message } => {
                write!(f, "invalid table for '{}': {}", locale, message)
            }
            CatalogError::NonStringValue { locale, key } => {
                write!(f, "value of '{}' in '{}' is not a string", key, locale)
            }
            CatalogError::MissingDefault(locale) => {
                write!(f, "no table for default locale '{}'", locale)
            }
        }
    }
}

impl fmt::Display for CompletenessIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletenessIssue::MissingInDefault { locale, key } => {
                write!(f, "'{}' (from '{}') missing in default table", key, locale)
            }
            CompletenessIssue::EmptyDefault { key } => {
                write!(f, "'{}' is empty in default table", key)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::IncompleteDefault(issues) => {
                write!(f, "Incomplete default table: {} issue(s)", issues.len())
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
