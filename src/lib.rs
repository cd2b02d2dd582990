// SPDX-License-Identifier: MPL-2.0
//! `folio_i18n` resolves the display strings of a multilingual portfolio site.
//!
//! It keeps the visitor's locale choice, persists it across restarts, and
//! turns lookup keys into text with graceful fallback when a translation is
//! missing.

pub mod config;
pub mod error;
pub mod i18n;
pub mod paths;
