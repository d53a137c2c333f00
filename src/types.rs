// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for manual-finder
//!
//! A [`Record`] is one catalog entry as it arrives from the data source.
//! Every field is optional: the payload is not schema-validated, so a record
//! is decoded field by field and anything of the wrong shape is dropped.

use crate::i18n::Lang;
use serde_json::Value;

/// One manufacturer / manual entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub brand: Option<String>,
    pub name_ja: Option<String>,
    pub name_en: Option<String>,
    pub category: Option<String>,
    pub country: Option<String>,
    pub tags: Vec<String>,
    pub note: Option<String>,
    pub manual_url: Option<String>,
    pub support_url: Option<String>,
}

impl Record {
    /// Decode a record from an arbitrary JSON value.
    ///
    /// Never fails. Non-object values become an empty record, string fields
    /// holding anything other than a non-empty string are treated as absent,
    /// and non-string entries inside `tags` are skipped.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Record::default();
        };
        let text = |key: &str| {
            obj.get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let tags = obj
            .get("tags")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Record {
            brand: text("brand"),
            name_ja: text("nameJa"),
            name_en: text("nameEn"),
            category: text("category"),
            country: text("country"),
            tags,
            note: text("note"),
            manual_url: text("manualUrl"),
            support_url: text("supportUrl"),
        }
    }

    /// Localized display name for `lang`, if present and non-empty.
    pub fn name(&self, lang: Lang) -> Option<&str> {
        let name = match lang {
            Lang::Ja => &self.name_ja,
            Lang::En => &self.name_en,
        };
        present(name)
    }

    /// Case-folded text the keyword filter searches.
    ///
    /// Brand, both localized names, category and the space-joined tags,
    /// separated by single spaces. Absent fields contribute an empty string.
    pub fn searchable_identity(&self) -> String {
        let field = |v: &Option<String>| v.as_deref().unwrap_or("").to_string();
        let parts = [
            field(&self.brand),
            field(&self.name_ja),
            field(&self.name_en),
            field(&self.category),
            self.tags.join(" "),
        ];
        parts.join(" ").to_lowercase()
    }

    pub fn category_or_empty(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}

/// `Some` only for non-empty text; empty strings count as absent.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Keyword + category selection driving the filter.
///
/// `keyword` is stored already case-folded; an empty field means "no
/// constraint" on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub keyword: String,
    pub category: String,
}

impl Query {
    pub fn new(keyword: &str, category: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            category: category.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_well_formed_record() {
        let record = Record::from_value(&json!({
            "brand": "Acme",
            "nameJa": "アクメ",
            "nameEn": "Acme Corp",
            "category": "Printer",
            "country": "US",
            "tags": ["laser", "office"],
            "note": "Model list on support page",
            "manualUrl": "https://acme.example/manuals",
            "supportUrl": "https://acme.example/support"
        }));
        assert_eq!(record.brand.as_deref(), Some("Acme"));
        assert_eq!(record.name(Lang::Ja), Some("アクメ"));
        assert_eq!(record.name(Lang::En), Some("Acme Corp"));
        assert_eq!(record.tags, vec!["laser", "office"]);
        assert_eq!(
            record.support_url.as_deref(),
            Some("https://acme.example/support")
        );
    }

    #[test]
    fn wrong_field_types_degrade_to_absent() {
        let record = Record::from_value(&json!({
            "brand": 42,
            "category": "Scanner",
            "tags": "not-a-list",
            "note": null,
            "manualUrl": ""
        }));
        assert_eq!(record.brand, None);
        assert_eq!(record.category.as_deref(), Some("Scanner"));
        assert!(record.tags.is_empty());
        assert_eq!(record.note, None);
        assert_eq!(record.manual_url, None);
    }

    #[test]
    fn non_string_tags_are_skipped() {
        let record = Record::from_value(&json!({ "tags": ["a", 1, null, "b"] }));
        assert_eq!(record.tags, vec!["a", "b"]);
    }

    #[test]
    fn non_object_becomes_empty_record() {
        assert_eq!(Record::from_value(&json!("Acme")), Record::default());
        assert_eq!(Record::from_value(&json!(null)), Record::default());
    }

    #[test]
    fn searchable_identity_concatenates_and_folds() {
        let record = Record {
            brand: Some("Acme".into()),
            name_ja: Some("アクメ".into()),
            category: Some("Printer".into()),
            tags: vec!["Laser".into(), "A4".into()],
            ..Record::default()
        };
        assert_eq!(record.searchable_identity(), "acme アクメ  printer laser a4");
    }

    #[test]
    fn query_folds_keyword_only() {
        let query = Query::new("ACME", "Printer");
        assert_eq!(query.keyword, "acme");
        assert_eq!(query.category, "Printer");
        assert_eq!(Query::new("", ""), Query::default());
    }
}
