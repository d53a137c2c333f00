// SPDX-License-Identifier: PMPL-1.0-or-later

//! Manual-Finder: bilingual manufacturer manual catalog browser.
//!
//! Loads a static list of manufacturer/manual records once, filters it by
//! free-text keyword, category and quick-select brand, and renders the
//! matches as cards in Japanese or English.
//!
//! PIPELINE:
//! 1. **Loader**: one-shot background fetch of the JSON record array.
//! 2. **Store**: the immutable record set plus the derived filtered subset.
//! 3. **Filter**: keyword substring AND exact category, order preserving.
//! 4. **Render**: card models and the results view, for any backend.
//!
//! [`app::App`] owns all of it and is the only mutator.

pub mod app;
pub mod config;
pub mod filter;
pub mod i18n;
pub mod loader;
pub mod render;
pub mod store;
pub mod types;
