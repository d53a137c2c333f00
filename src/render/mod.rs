// SPDX-License-Identifier: PMPL-1.0-or-later

//! Render engine.
//!
//! [`render`] projects the filtered subset and the current locale into a
//! [`ResultsView`], the backend-independent output surface: the results
//! container, the displayed count and the two locale-tagged empty-state
//! messages. Every pass replaces the container wholesale.
//!
//! Backends materialize a view: [`text`] and [`html`] for exports, [`tui`]
//! and [`gui`] for interactive use.

pub mod card;
pub mod gui;
pub mod html;
pub mod output;
pub mod text;
pub mod tui;

use crate::i18n::{t, Lang};
use crate::types::Record;
use serde::Serialize;
use tracing::debug;

pub use card::{card_heading, records_to_card_models, CardModel, LinkKind, LinkModel};
pub use output::ViewOutputFormat;

/// Contents of the results container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "content")]
pub enum ResultsBody {
    Cards(Vec<CardModel>),
    LoadError(String),
}

/// One of the two locale-tagged empty-state messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub lang: Lang,
    pub text: String,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsView {
    pub body: ResultsBody,
    pub count: String,
    pub empty_states: Vec<EmptyState>,
}

impl ResultsView {
    /// Blank view: no cards, count `0`, both empty-state messages hidden.
    pub fn new() -> Self {
        Self {
            body: ResultsBody::Cards(Vec::new()),
            count: "0".to_string(),
            empty_states: Lang::all()
                .iter()
                .map(|lang| EmptyState {
                    lang: *lang,
                    text: t(*lang, "results.empty").to_string(),
                    hidden: true,
                })
                .collect(),
        }
    }

    pub fn cards(&self) -> &[CardModel] {
        match &self.body {
            ResultsBody::Cards(cards) => cards,
            ResultsBody::LoadError(_) => &[],
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.body {
            ResultsBody::LoadError(message) => Some(message),
            ResultsBody::Cards(_) => None,
        }
    }

    /// The empty-state message currently shown, if any.
    pub fn visible_empty_state(&self) -> Option<&EmptyState> {
        self.empty_states.iter().find(|state| !state.hidden)
    }

    /// Replace the container with a fixed error message and force the count
    /// to zero. No cards remain.
    pub fn show_load_error(&mut self, message: &str) {
        self.body = ResultsBody::LoadError(message.to_string());
        self.count = "0".to_string();
        self.set_empty_state(None);
    }

    fn set_empty_state(&mut self, shown: Option<Lang>) {
        for state in &mut self.empty_states {
            state.hidden = Some(state.lang) != shown;
        }
    }
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `filtered` into `view` for `lang`.
pub fn render<'a, I>(view: &mut ResultsView, filtered: I, lang: Lang)
where
    I: ExactSizeIterator<Item = &'a Record>,
{
    if filtered.len() == 0 {
        view.body = ResultsBody::Cards(Vec::new());
        view.set_empty_state(Some(lang));
        view.count = "0".to_string();
        debug!(locale = %lang, "rendered empty state");
        return;
    }

    view.set_empty_state(None);
    view.count = filtered.len().to_string();
    let cards = records_to_card_models(filtered, lang);
    debug!(locale = %lang, cards = cards.len(), "rendered cards");
    view.body = ResultsBody::Cards(cards);
}
