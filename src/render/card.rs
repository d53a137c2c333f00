// SPDX-License-Identifier: PMPL-1.0-or-later

//! Card models: the backend-independent description of one result.

use crate::i18n::{t, Lang};
use crate::types::{present, Record};
use serde::Serialize;

/// Source indicator shown on every card, in every locale.
pub const OFFICIAL_BADGE: &str = "Official";

/// `rel` carried by every external link.
pub const EXTERNAL_LINK_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Manual,
    Support,
}

impl LinkKind {
    fn label_key(self) -> &'static str {
        match self {
            LinkKind::Manual => "link.manuals",
            LinkKind::Support => "link.support",
        }
    }
}

/// An external link. Always opened in a new browsing context that gets no
/// opener handle and no referrer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkModel {
    pub kind: LinkKind,
    pub href: String,
    pub label: String,
    pub new_context: bool,
    pub rel: String,
}

impl LinkModel {
    pub fn external(kind: LinkKind, href: &str, lang: Lang) -> Self {
        Self {
            kind,
            href: href.to_string(),
            label: t(lang, kind.label_key()).to_string(),
            new_context: true,
            rel: EXTERNAL_LINK_REL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardModel {
    pub heading: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub badge: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub links: Vec<LinkModel>,
}

/// Heading text for a record.
///
/// `"ja / en"` when both localized names exist and the Japanese name is not
/// just the brand again; otherwise the first present of brand, Japanese
/// name, English name.
pub fn card_heading(record: &Record) -> String {
    let brand = present(&record.brand);
    let ja = record.name(Lang::Ja);
    let en = record.name(Lang::En);
    match (ja, en) {
        (Some(ja), Some(en)) if Some(ja) != brand => format!("{} / {}", ja, en),
        _ => brand.or(ja).or(en).unwrap_or("").to_string(),
    }
}

pub fn record_to_card_model(record: &Record, lang: Lang) -> CardModel {
    let mut links = Vec::new();
    if let Some(url) = present(&record.manual_url) {
        links.push(LinkModel::external(LinkKind::Manual, url, lang));
    }
    if let Some(url) = present(&record.support_url) {
        links.push(LinkModel::external(LinkKind::Support, url, lang));
    }

    CardModel {
        heading: card_heading(record),
        category: record.category_or_empty().to_string(),
        country: present(&record.country).map(str::to_string),
        badge: OFFICIAL_BADGE.to_string(),
        note: present(&record.note).map(str::to_string),
        links,
    }
}

/// Project records into card models, preserving order.
pub fn records_to_card_models<'a, I>(records: I, lang: Lang) -> Vec<CardModel>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .map(|record| record_to_card_model(record, lang))
        .collect()
}
