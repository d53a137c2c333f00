// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale switch: the active locale plus every locale-tagged UI fragment.
//!
//! Static text exists once per locale, each copy tagged with its locale code.
//! Switching locale shows the copies whose tag matches and hides the rest,
//! then marks the matching control as selected.

use super::catalog::{t, Lang};
use serde::Serialize;
use tracing::{debug, warn};

/// Catalog keys materialized as locale-tagged static text.
pub const STATIC_TEXT_KEYS: &[&str] = &[
    "app.title",
    "app.subtitle",
    "search.label",
    "search.placeholder",
    "category.label",
    "quick.label",
    "results.count",
    "lang.label",
];

/// One piece of static text carrying a locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleNode {
    pub key: String,
    pub tag: String,
    pub text: String,
    pub visible: bool,
}

/// A locale-switch control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleControl {
    pub lang: Lang,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct LocaleSwitch {
    current: Lang,
    nodes: Vec<LocaleNode>,
    controls: Vec<LocaleControl>,
}

impl LocaleSwitch {
    /// Build the switch with one node per static key and locale, then apply
    /// `initial`.
    pub fn new(initial: Lang) -> Self {
        let nodes = STATIC_TEXT_KEYS
            .iter()
            .flat_map(|key| {
                Lang::all().iter().map(move |lang| LocaleNode {
                    key: key.to_string(),
                    tag: lang.code().to_string(),
                    text: t(*lang, key).to_string(),
                    visible: true,
                })
            })
            .collect();
        let controls = Lang::all()
            .iter()
            .map(|lang| LocaleControl {
                lang: *lang,
                label: lang.native_name(),
                selected: false,
            })
            .collect();

        let mut switch = Self {
            current: initial,
            nodes,
            controls,
        };
        switch.apply(initial);
        switch
    }

    pub fn current(&self) -> Lang {
        self.current
    }

    /// Make `lang` current, show its tagged nodes, hide the others and mark
    /// its control selected.
    pub fn apply(&mut self, lang: Lang) {
        self.current = lang;
        let tag = lang.code();
        for node in &mut self.nodes {
            node.visible = node.tag == tag;
        }
        for control in &mut self.controls {
            control.selected = control.lang == lang;
        }
        debug!(locale = tag, "locale applied");
    }

    /// Apply a raw locale tag as carried by a control.
    ///
    /// Tags that name no supported locale match no node: nothing is hidden
    /// and the current locale stays. Returns the applied locale.
    pub fn set_locale_tag(&mut self, tag: &str) -> Option<Lang> {
        match Lang::from_code(tag) {
            Some(lang) => {
                self.apply(lang);
                Some(lang)
            }
            None => {
                warn!(tag, "ignoring unsupported locale tag");
                None
            }
        }
    }

    pub fn nodes(&self) -> &[LocaleNode] {
        &self.nodes
    }

    pub fn controls(&self) -> &[LocaleControl] {
        &self.controls
    }

    /// Text of the visible node for `key`, or `""` when none is visible.
    pub fn text(&self, key: &str) -> &str {
        self.nodes
            .iter()
            .find(|node| node.visible && node.key == key)
            .map(|node| node.text.as_str())
            .unwrap_or("")
    }
}

impl Default for LocaleSwitch {
    fn default() -> Self {
        Self::new(Lang::default())
    }
}
