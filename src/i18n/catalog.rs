// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for manual-finder.
//!
//! Embeds all user-facing static strings for the two supported locales as a
//! compile-time table. Lookup is a linear scan, which is fine for the couple
//! of dozen keys involved.
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add the Japanese entry to `JA` (missing keys fall back to English)

use serde::Serialize;

/// Supported display locales.
///
/// Japanese is the primary locale, English the secondary one. Ordering of
/// [`Lang::all`] is the order of the locale-switch controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ja,
    En,
}

impl Lang {
    pub const PRIMARY: Lang = Lang::Ja;
    pub const SECONDARY: Lang = Lang::En;

    /// ISO 639-1 two-letter code for this locale.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Ja => "ja",
            Lang::En => "en",
        }
    }

    /// Parse a locale tag. Exact, lowercase codes only.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "ja" => Some(Lang::Ja),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// Map a reported language preference to the nearest supported locale.
    ///
    /// Accepts BCP 47 tags (`ja-JP`) and POSIX locale strings
    /// (`ja_JP.UTF-8`). Anything that starts with the primary locale's tag
    /// selects it; everything else, including an empty preference, selects
    /// the secondary locale.
    pub fn from_preference(preference: &str) -> Lang {
        if preference
            .trim()
            .to_lowercase()
            .starts_with(Lang::PRIMARY.code())
        {
            Lang::PRIMARY
        } else {
            Lang::SECONDARY
        }
    }

    /// All supported locales, in control order.
    pub fn all() -> &'static [Lang] {
        &[Lang::Ja, Lang::En]
    }

    /// The other supported locale.
    pub fn toggled(&self) -> Lang {
        match self {
            Lang::Ja => Lang::En,
            Lang::En => Lang::Ja,
        }
    }

    /// Name of the locale written in its own script, for switch controls.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::Ja => "日本語",
            Lang::En => "English",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::PRIMARY
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a translation key in the specified locale.
///
/// Falls back to English if the key is missing in the requested locale and
/// returns `""` if it is missing everywhere. Never panics.
///
/// # Examples
///
/// ```
/// use manual_finder::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "link.manuals"), "Manuals");
/// assert_eq!(t(Lang::Ja, "link.manuals"), "マニュアル");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::En {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    ""
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|&&(k, _)| k == key).map(|&(_, v)| v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::Ja => JA,
        Lang::En => EN,
    }
}

// ─── English (all keys defined here) ────────────────────────────────

const EN: &[(&str, &str)] = &[
    ("app.title", "Manufacturer Manual Finder"),
    ("app.subtitle", "Official manual and support pages, by brand"),
    ("search.label", "Search"),
    ("search.placeholder", "Brand, product name, category or tag"),
    ("category.label", "Category"),
    ("category.all", "All categories"),
    ("quick.label", "Quick brands"),
    ("results.count", "results"),
    ("results.empty", "No manuals matched your search."),
    ("results.loading", "Loading catalog..."),
    ("link.manuals", "Manuals"),
    ("link.support", "Support"),
    ("lang.label", "Language"),
    (
        "tui.controls",
        "Type to search, [Tab/Shift+Tab] Category, [Ctrl+B] Quick brand, [Ctrl+U] Clear, [F2] Language, [Up/Down] Scroll, [Esc] Quit",
    ),
];

// ─── Japanese ───────────────────────────────────────────────────────

const JA: &[(&str, &str)] = &[
    ("app.title", "メーカー取扱説明書ナビ"),
    ("app.subtitle", "ブランド別の公式マニュアル・サポートページ"),
    ("search.label", "検索"),
    ("search.placeholder", "ブランド名・製品名・カテゴリ・タグ"),
    ("category.label", "カテゴリ"),
    ("category.all", "すべてのカテゴリ"),
    ("quick.label", "よく使うメーカー"),
    ("results.count", "件"),
    ("results.empty", "該当するマニュアルが見つかりませんでした。"),
    ("results.loading", "データを読み込んでいます..."),
    ("link.manuals", "マニュアル"),
    ("link.support", "サポートTOP"),
    ("lang.label", "言語"),
    (
        "tui.controls",
        "入力で検索、[Tab/Shift+Tab] カテゴリ、[Ctrl+B] メーカー選択、[Ctrl+U] クリア、[F2] 言語、[↑/↓] スクロール、[Esc] 終了",
    ),
];
