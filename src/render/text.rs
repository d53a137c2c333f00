// SPDX-License-Identifier: PMPL-1.0-or-later

//! Plain and colored terminal text for a results view

use crate::i18n::{t, Lang};
use crate::render::{CardModel, ResultsView};
use colored::*;
use std::fmt::Write as _;

pub struct ViewFormatter {
    color: bool,
}

impl ViewFormatter {
    /// Formatter emitting ANSI colors (subject to `colored`'s own overrides).
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Formatter emitting no escape sequences, for files and tests.
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn print(&self, view: &ResultsView, lang: Lang) {
        print!("{}", self.format(view, lang));
    }

    pub fn format(&self, view: &ResultsView, lang: Lang) -> String {
        let mut out = String::new();

        if let Some(message) = view.load_error() {
            let _ = writeln!(out, "{}", self.paint(message, |s| s.red().bold()));
            let _ = writeln!(out, "{} {}", view.count, t(lang, "results.count"));
            return out;
        }

        let _ = writeln!(
            out,
            "{} {}",
            self.paint(&view.count, |s| s.bold().cyan()),
            t(lang, "results.count")
        );
        let _ = writeln!(out);

        if let Some(empty) = view.visible_empty_state() {
            let _ = writeln!(out, "  {}", self.paint(&empty.text, |s| s.yellow()));
            return out;
        }

        for (i, card) in view.cards().iter().enumerate() {
            self.write_card(&mut out, i + 1, card);
        }
        out
    }

    fn write_card(&self, out: &mut String, number: usize, card: &CardModel) {
        let _ = writeln!(
            out,
            "{:>3}. {}",
            number,
            self.paint(&card.heading, |s| s.bold())
        );

        let mut meta = vec![card.category.clone()];
        if let Some(country) = &card.country {
            meta.push(country.clone());
        }
        let _ = writeln!(
            out,
            "     {}  {}",
            self.paint(&meta.join(" · "), |s| s.dimmed()),
            self.paint(&format!("[{}]", card.badge), |s| s.green())
        );

        if let Some(note) = &card.note {
            let _ = writeln!(out, "     {}", note);
        }
        for link in &card.links {
            let _ = writeln!(
                out,
                "     {}: {}",
                link.label,
                self.paint(&link.href, |s| s.blue().underline())
            );
        }
        let _ = writeln!(out);
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for ViewFormatter {
    fn default() -> Self {
        Self::new()
    }
}
