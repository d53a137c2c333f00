// SPDX-License-Identifier: PMPL-1.0-or-later

//! Optional YAML configuration.
//!
//! ```yaml
//! data: ./data/manuals.json
//! lang: ja
//! categories: [Printer, Scanner]
//! quick_brands: [Canon, Epson, Brother]
//! ```
//!
//! Every key is optional. CLI flags override whatever the file sets.

use crate::i18n::Lang;
use crate::loader::DEFAULT_DATA_LOCATION;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Data file path or `http(s)://` URL.
    pub data: Option<String>,
    /// Locale code overriding the reported language preference.
    pub lang: Option<String>,
    /// Category selector options, in display order. Empty means "derive
    /// from the loaded records".
    pub categories: Vec<String>,
    /// Brands offered as quick-select buttons.
    pub quick_brands: Vec<String>,
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "manual-finder.yaml";

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(raw)?;
        if let Some(code) = &config.lang {
            if Lang::from_code(code).is_none() {
                bail!("unsupported lang '{}' (expected ja or en)", code);
            }
        }
        Ok(config)
    }

    /// Load `explicit` if given (it must exist), else the default path if it
    /// exists, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = PathBuf::from(Self::DEFAULT_PATH);
                if default.is_file() {
                    Self::load(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn data_location(&self) -> &str {
        self.data.as_deref().unwrap_or(DEFAULT_DATA_LOCATION)
    }

    /// Initial locale: the configured one, otherwise the nearest match for
    /// the reported preference.
    pub fn initial_lang(&self, preference: Option<&str>) -> Lang {
        self.lang
            .as_deref()
            .and_then(Lang::from_code)
            .unwrap_or_else(|| Lang::from_preference(preference.unwrap_or("")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.data_location(), "./data/manuals.json");
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::parse(
            "data: https://example.com/manuals.json\nlang: en\ncategories: [Printer, Scanner]\nquick_brands:\n  - Canon\n  - Epson\n",
        )
        .unwrap();
        assert_eq!(config.data_location(), "https://example.com/manuals.json");
        assert_eq!(config.categories, vec!["Printer", "Scanner"]);
        assert_eq!(config.quick_brands, vec!["Canon", "Epson"]);
        assert_eq!(config.initial_lang(Some("ja_JP.UTF-8")), Lang::En);
    }

    #[test]
    fn rejects_unknown_lang_and_keys() {
        assert!(Config::parse("lang: fr\n").is_err());
        assert!(Config::parse("colour: blue\n").is_err());
    }

    #[test]
    fn preference_used_without_configured_lang() {
        let config = Config::default();
        assert_eq!(config.initial_lang(Some("ja-JP")), Lang::Ja);
        assert_eq!(config.initial_lang(None), Lang::En);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::discover(Some(&dir.path().join("absent.yaml"))).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manual-finder.yaml");
        fs::write(&path, "quick_brands: [Acme]\n").unwrap();
        let config = Config::discover(Some(&path)).unwrap();
        assert_eq!(config.quick_brands, vec!["Acme"]);
    }
}
