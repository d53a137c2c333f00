// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for manual-finder.
//!
//! Two fixed locales, Japanese (primary) and English (secondary).
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | ja   | Japanese | 日本語       |
//! | en   | English  | English     |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"link.manuals"`,
//! `"results.empty"`. Lookups fall back to English when a key is missing in
//! Japanese; a key missing everywhere yields an empty string.
//!
//! [`LocaleSwitch`] owns the current locale and the visibility of the
//! locale-tagged static text built from the catalog.

mod catalog;
mod switch;

pub use catalog::{t, Lang};
pub use switch::{LocaleControl, LocaleNode, LocaleSwitch, STATIC_TEXT_KEYS};

/// Environment variables consulted for the reported language preference,
/// in POSIX precedence order.
const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// The user's reported language preference, if the environment carries one.
pub fn system_language_preference() -> Option<String> {
    language_preference_from(|var| std::env::var(var).ok())
}

/// First non-blank value among [`LOCALE_ENV_VARS`] as seen through `lookup`.
fn language_preference_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|&var| lookup(var))
        .find(|value| !value.trim().is_empty())
}
