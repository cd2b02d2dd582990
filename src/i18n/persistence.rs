// SPDX-License-Identifier: MPL-2.0
//! Storage for the active locale preference.
//!
//! The preference is a single value (`language`) holding a locale code.
//! Backends only move strings; validating the code is the store's job.

use crate::config::{self, Config};
use crate::error::Result;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Durable home of the `language` preference.
pub trait PreferenceBackend {
    /// Returns the stored locale code, or `None` when nothing is stored.
    ///
    /// An error means something is stored but cannot be read; callers must
    /// not overwrite it blindly.
    fn read(&self) -> Result<Option<String>>;

    /// Stores `code`, replacing any previous value.
    fn write(&mut self, code: &str) -> Result<()>;
}

/// The `[general] language` entry of `settings.toml`.
///
/// Writing keeps every other setting in the file intact.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file inside the resolved config directory.
    ///
    /// See [`crate::paths`] for the resolution order.
    pub fn in_config_dir(base_dir: Option<PathBuf>) -> Option<Self> {
        config::get_config_path_with_override(base_dir).map(Self::new)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current file contents; `None` when the file does not exist yet.
    pub fn config(&self) -> Result<Option<Config>> {
        config::load_existing(&self.path)
    }
}

impl PreferenceBackend for SettingsFile {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.config()?.and_then(|cfg| cfg.general.language))
    }

    /// Fails without touching the file when the existing contents are invalid.
    fn write(&mut self, code: &str) -> Result<()> {
        let mut cfg = self.config()?.unwrap_or_default();
        cfg.general.language = Some(code.to_string());
        config::save_to_path(&cfg, &self.path)
    }
}

/// In-memory preference, shared between clones.
///
/// Counts writes so callers can observe when persistence happened.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreference {
    value: Rc<RefCell<Option<String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryPreference {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `code` already stored, as if written by an earlier run.
    pub fn with_value(code: impl Into<String>) -> Self {
        let pref = Self::default();
        *pref.value.borrow_mut() = Some(code.into());
        pref
    }

    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceBackend for MemoryPreference {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.value())
    }

    fn write(&mut self, code: &str) -> Result<()> {
        *self.value.borrow_mut() = Some(code.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
