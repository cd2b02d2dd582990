// SPDX-License-Identifier: MPL-2.0
//! Default values shared by configuration and locale handling.

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Code of the default locale. Its table is the complete one.
pub const DEFAULT_LOCALE_CODE: &str = "en";

/// Name of the persisted preference holding the active locale code.
pub const LANGUAGE_PREFERENCE_KEY: &str = "language";

/// Whether the OS locale seeds the first-run selection.
pub const DEFAULT_DETECT_SYSTEM_LOCALE: bool = false;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Filter used by the binary when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
