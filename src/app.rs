// SPDX-License-Identifier: PMPL-1.0-or-later

//! Application state: the single owner of everything the pipeline reads.
//!
//! [`App`] wires the catalog store, the filter engine, the render engine and
//! the locale switch together. User input goes through [`App::set_query`]
//! (and its shorthands for typing, category changes and quick-brand clicks)
//! or [`App::set_locale`]; the load outcome arrives once through
//! [`App::complete_load`]. Every input synchronously filters and/or renders.

use crate::config::Config;
use crate::filter::resolve_keyword;
use crate::i18n::{Lang, LocaleSwitch};
use crate::loader::{LoadError, LOAD_ERROR_MESSAGE};
use crate::render::{self, ResultsView};
use crate::store::CatalogStore;
use crate::types::{Query, Record};
use tracing::{error, warn};

/// Current values of the input controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    /// Text in the search box.
    pub search: String,
    /// Selected category option; empty means "all".
    pub category: String,
}

/// Lifecycle of the one-shot load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed,
}

/// Read-only view of the application state.
#[derive(Debug, Clone, Copy)]
pub struct StateRef<'a> {
    pub status: LoadStatus,
    pub records: &'a [Record],
    pub filtered: &'a [usize],
    pub query: &'a Query,
    pub inputs: &'a Inputs,
    pub locale: Lang,
    pub view: &'a ResultsView,
}

#[derive(Debug)]
pub struct App {
    store: CatalogStore,
    status: LoadStatus,
    inputs: Inputs,
    query: Query,
    locale: LocaleSwitch,
    view: ResultsView,
    categories: Vec<String>,
    quick_brands: Vec<String>,
}

impl App {
    pub fn new(locale: Lang) -> Self {
        Self {
            store: CatalogStore::new(),
            status: LoadStatus::Pending,
            inputs: Inputs::default(),
            query: Query::default(),
            locale: LocaleSwitch::new(locale),
            view: ResultsView::new(),
            categories: Vec::new(),
            quick_brands: Vec::new(),
        }
    }

    pub fn from_config(config: &Config, locale: Lang) -> Self {
        let mut app = Self::new(locale);
        app.categories = config.categories.clone();
        app.quick_brands = config.quick_brands.clone();
        app
    }

    pub fn state(&self) -> StateRef<'_> {
        StateRef {
            status: self.status,
            records: self.store.records(),
            filtered: self.store.filtered_indices(),
            query: &self.query,
            inputs: &self.inputs,
            locale: self.locale.current(),
            view: &self.view,
        }
    }

    pub fn view(&self) -> &ResultsView {
        &self.view
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    pub fn locale(&self) -> Lang {
        self.locale.current()
    }

    pub fn locale_switch(&self) -> &LocaleSwitch {
        &self.locale
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn quick_brands(&self) -> &[String] {
        &self.quick_brands
    }

    /// Category selector options: configured ones, or the distinct
    /// categories of the loaded records.
    pub fn category_options(&self) -> Vec<String> {
        if self.categories.is_empty() {
            self.store.categories()
        } else {
            self.categories.clone()
        }
    }

    /// Deliver the load outcome. Only the first delivery has any effect.
    pub fn complete_load(&mut self, outcome: Result<Vec<Record>, LoadError>) {
        if self.status != LoadStatus::Pending {
            warn!(status = ?self.status, "ignoring repeated load completion");
            return;
        }
        match outcome {
            Ok(records) => {
                if let Err(err) = self.store.populate(records) {
                    warn!(%err, "catalog store rejected records");
                    return;
                }
                self.status = LoadStatus::Loaded;
                self.apply_filter(None);
            }
            Err(err) => {
                error!(%err, "failed to load catalog");
                self.status = LoadStatus::Failed;
                self.view.show_load_error(LOAD_ERROR_MESSAGE);
            }
        }
    }

    /// Set both inputs, then filter and render.
    pub fn set_query(&mut self, search: &str, category: &str) {
        self.inputs.search = search.to_string();
        self.inputs.category = category.to_string();
        self.apply_filter(None);
    }

    /// Typing in the search box.
    pub fn set_search(&mut self, search: &str) {
        self.inputs.search = search.to_string();
        self.apply_filter(None);
    }

    /// Changing the category selector.
    pub fn set_category(&mut self, category: &str) {
        self.inputs.category = category.to_string();
        self.apply_filter(None);
    }

    /// Quick-brand click: the brand replaces the search box text and is
    /// used verbatim as the keyword.
    pub fn select_brand(&mut self, brand: &str) {
        self.inputs.search = brand.to_string();
        self.apply_filter(Some(brand));
    }

    /// Recompute the filtered subset from the inputs, then render.
    pub fn apply_filter(&mut self, explicit_keyword: Option<&str>) {
        self.query = Query {
            keyword: resolve_keyword(explicit_keyword, &self.inputs.search),
            category: self.inputs.category.clone(),
        };
        self.store.refilter(&self.query);
        self.render();
    }

    /// Project the current filtered subset into the view.
    pub fn render(&mut self) {
        render::render(&mut self.view, self.store.filtered(), self.locale.current());
    }

    /// Switch locale and re-render without re-filtering.
    pub fn set_locale(&mut self, lang: Lang) {
        self.locale.apply(lang);
        self.refresh_after_locale_change();
    }

    /// Switch locale from a raw control tag. Unsupported tags change nothing.
    pub fn set_locale_tag(&mut self, tag: &str) -> Option<Lang> {
        let applied = self.locale.set_locale_tag(tag)?;
        self.refresh_after_locale_change();
        Some(applied)
    }

    fn refresh_after_locale_change(&mut self) {
        // A failed load keeps its error view; the message is not localized.
        if self.status != LoadStatus::Failed {
            self.render();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record {
                brand: Some("Acme".into()),
                category: Some("Printer".into()),
                tags: vec!["laser".into()],
                ..Record::default()
            },
            Record {
                brand: Some("Zed".into()),
                category: Some("Scanner".into()),
                ..Record::default()
            },
        ]
    }

    #[test]
    fn input_before_load_shows_empty_state() {
        let mut app = App::new(Lang::Ja);
        assert_eq!(app.status(), LoadStatus::Pending);
        app.set_search("acme");
        assert_eq!(app.view().count, "0");
        assert_eq!(app.view().visible_empty_state().map(|s| s.lang), Some(Lang::Ja));
    }

    #[test]
    fn load_renders_full_set_with_current_inputs() {
        let mut app = App::new(Lang::En);
        app.complete_load(Ok(records()));
        assert_eq!(app.status(), LoadStatus::Loaded);
        assert_eq!(app.view().count, "2");
        assert_eq!(app.state().filtered, &[0, 1]);
    }

    #[test]
    fn second_completion_is_ignored() {
        let mut app = App::new(Lang::En);
        app.complete_load(Ok(records()));
        app.complete_load(Err(LoadError::Interrupted));
        assert_eq!(app.status(), LoadStatus::Loaded);
        assert_eq!(app.view().count, "2");
    }

    #[test]
    fn failure_keeps_error_view_across_locale_switch() {
        let mut app = App::new(Lang::En);
        app.complete_load(Err(LoadError::NotArray { found: "object" }));
        app.set_locale(Lang::Ja);
        assert_eq!(app.view().load_error(), Some(LOAD_ERROR_MESSAGE));
        assert!(app.store().records().is_empty());
    }

    #[test]
    fn category_options_fall_back_to_records() {
        let mut app = App::new(Lang::En);
        app.complete_load(Ok(records()));
        assert_eq!(app.category_options(), vec!["Printer", "Scanner"]);

        let config = Config {
            categories: vec!["Camera".into()],
            ..Config::default()
        };
        let app = App::from_config(&config, Lang::En);
        assert_eq!(app.category_options(), vec!["Camera"]);
    }

    #[test]
    fn quick_brand_mirrors_into_search_input() {
        let mut app = App::new(Lang::En);
        app.complete_load(Ok(records()));
        app.select_brand("Zed");
        assert_eq!(app.inputs().search, "Zed");
        assert_eq!(app.state().query.keyword, "zed");
        assert_eq!(app.view().count, "1");
    }

    #[test]
    fn unsupported_locale_tag_changes_nothing() {
        let mut app = App::new(Lang::En);
        app.complete_load(Ok(records()));
        let before = app.view().clone();
        assert_eq!(app.set_locale_tag("de"), None);
        assert_eq!(app.locale(), Lang::En);
        assert_eq!(app.view(), &before);
    }
}
