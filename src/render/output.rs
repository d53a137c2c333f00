// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported result views

use crate::i18n::Lang;
use crate::render::html;
use crate::render::text::ViewFormatter;
use crate::render::ResultsView;
use anyhow::Result;
use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewOutputFormat {
    Text,
    Json,
    Yaml,
    Html,
}

impl ViewOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(ViewOutputFormat::Text),
            "json" => Some(ViewOutputFormat::Json),
            "yaml" | "yml" => Some(ViewOutputFormat::Yaml),
            "html" | "htm" => Some(ViewOutputFormat::Html),
            _ => None,
        }
    }

    /// Format for an export: the explicit choice, else the one named by the
    /// output file's extension, else text.
    pub fn resolve(explicit: Option<Self>, output: Option<&Path>) -> Self {
        explicit
            .or_else(|| {
                output
                    .and_then(Path::extension)
                    .and_then(|ext| ext.to_str())
                    .and_then(Self::parse)
            })
            .unwrap_or(ViewOutputFormat::Text)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ViewOutputFormat::Text => "txt",
            ViewOutputFormat::Json => "json",
            ViewOutputFormat::Yaml => "yaml",
            ViewOutputFormat::Html => "html",
        }
    }

    pub fn serialize(&self, view: &ResultsView, lang: Lang) -> Result<String> {
        match self {
            ViewOutputFormat::Text => Ok(ViewFormatter::plain().format(view, lang)),
            ViewOutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
            ViewOutputFormat::Yaml => Ok(serde_yaml::to_string(view)?),
            ViewOutputFormat::Html => Ok(html::to_html_document(view, lang)),
        }
    }
}
