// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTML materialization of a results view.
//!
//! All record text is escaped. External links carry
//! `target="_blank" rel="noopener noreferrer"`; hrefs with a scheme other
//! than `http`, `https` or `mailto` are emitted as plain text instead of an
//! anchor.

use crate::i18n::{t, Lang};
use crate::render::{CardModel, LinkModel, ResultsView};
use chrono::Utc;

pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Whether `href` may be emitted as a navigable link.
pub fn is_safe_href(href: &str) -> bool {
    let lower = href.trim_start().to_ascii_lowercase();
    ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}

/// The results container, count and both empty-state messages.
pub fn to_html_fragment(view: &ResultsView) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<span id=\"resultCount\">{}</span>\n",
        html_escape(&view.count)
    ));
    for state in &view.empty_states {
        html.push_str(&format!(
            "<p class=\"empty-message\" data-i18n=\"{}\"{}>{}</p>\n",
            state.lang.code(),
            if state.hidden { " hidden" } else { "" },
            html_escape(&state.text)
        ));
    }

    html.push_str("<div id=\"results\">\n");
    if let Some(message) = view.load_error() {
        html.push_str(&format!(
            "<div class=\"empty-message\">{}</div>\n",
            html_escape(message)
        ));
    }
    for card in view.cards() {
        html.push_str(&card_html(card));
    }
    html.push_str("</div>\n");
    html
}

/// A standalone page around [`to_html_fragment`].
pub fn to_html_document(view: &ResultsView, lang: Lang) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<!-- generated {generated} -->\n<h1>{title}</h1>\n{body}</body>\n</html>\n",
        lang = lang.code(),
        title = html_escape(t(lang, "app.title")),
        generated = Utc::now().to_rfc3339(),
        body = to_html_fragment(view),
    )
}

fn card_html(card: &CardModel) -> String {
    let mut html = String::from("<article class=\"card\">\n<div class=\"card-header\">\n");
    html.push_str(&format!(
        "<div class=\"card-brand\">{}</div>\n<div class=\"card-meta\">\n",
        html_escape(&card.heading)
    ));
    html.push_str(&format!(
        "<div class=\"card-category\">{}</div>\n",
        html_escape(&card.category)
    ));
    if let Some(country) = &card.country {
        html.push_str(&format!(
            "<div class=\"card-country\">{}</div>\n",
            html_escape(country)
        ));
    }
    html.push_str(&format!(
        "<div class=\"tag-official\">{}</div>\n</div>\n</div>\n",
        html_escape(&card.badge)
    ));
    if let Some(note) = &card.note {
        html.push_str(&format!("<p class=\"card-note\">{}</p>\n", html_escape(note)));
    }
    html.push_str("<div class=\"card-links\">");
    for link in &card.links {
        html.push_str(&link_html(link));
    }
    html.push_str("</div>\n</article>\n");
    html
}

fn link_html(link: &LinkModel) -> String {
    if !is_safe_href(&link.href) {
        return format!("<span>{}</span>", html_escape(&link.label));
    }
    let target = if link.new_context { " target=\"_blank\"" } else { "" };
    format!(
        "<a href=\"{}\"{} rel=\"{}\">{}</a>",
        html_escape(&link.href),
        target,
        html_escape(&link.rel),
        html_escape(&link.label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use crate::types::Record;

    fn view_for(record: Record, lang: Lang) -> ResultsView {
        let records = vec![record];
        let mut view = ResultsView::new();
        render(&mut view, records.iter(), lang);
        view
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(html_escape("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }

    #[test]
    fn links_open_isolated() {
        let view = view_for(
            Record {
                brand: Some("Acme".into()),
                manual_url: Some("https://acme.example/m?a=1&b=2".into()),
                ..Record::default()
            },
            Lang::En,
        );
        let html = to_html_fragment(&view);
        assert!(html.contains(
            "<a href=\"https://acme.example/m?a=1&amp;b=2\" target=\"_blank\" rel=\"noopener noreferrer\">Manuals</a>"
        ));
    }

    #[test]
    fn script_hrefs_are_not_anchors() {
        let view = view_for(
            Record {
                brand: Some("Evil".into()),
                support_url: Some("javascript:alert(1)".into()),
                ..Record::default()
            },
            Lang::En,
        );
        let html = to_html_fragment(&view);
        assert!(!html.contains("javascript:"));
        assert!(html.contains("<span>Support</span>"));
    }

    #[test]
    fn record_text_is_escaped() {
        let view = view_for(
            Record {
                brand: Some("<script>x</script>".into()),
                note: Some("a < b".into()),
                ..Record::default()
            },
            Lang::Ja,
        );
        let html = to_html_fragment(&view);
        assert!(!html.contains("<script>"));
        assert!(html.contains("<p class=\"card-note\">a &lt; b</p>"));
    }

    #[test]
    fn empty_state_marks_other_locale_hidden() {
        let mut view = ResultsView::new();
        render(&mut view, std::iter::empty(), Lang::Ja);
        let html = to_html_fragment(&view);
        assert!(html.contains("data-i18n=\"ja\">"));
        assert!(html.contains("data-i18n=\"en\" hidden>"));
    }
}
