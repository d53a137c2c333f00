// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end filter/render behaviour through the application state

use manual_finder::app::{App, LoadStatus};
use manual_finder::filter;
use manual_finder::i18n::Lang;
use manual_finder::loader::{LoadError, LOAD_ERROR_MESSAGE};
use manual_finder::types::Record;

fn records() -> Vec<Record> {
    vec![
        Record {
            brand: Some("Acme".to_string()),
            category: Some("Printer".to_string()),
            tags: vec!["laser".to_string()],
            ..Record::default()
        },
        Record {
            brand: Some("Zed".to_string()),
            category: Some("Scanner".to_string()),
            tags: vec![],
            ..Record::default()
        },
    ]
}

fn loaded(lang: Lang) -> App {
    let mut app = App::new(lang);
    app.complete_load(Ok(records()));
    app
}

fn headings(app: &App) -> Vec<String> {
    app.view().cards().iter().map(|c| c.heading.clone()).collect()
}

#[test]
fn test_keyword_selects_matching_record() {
    let mut app = loaded(Lang::En);
    app.set_search("acme");

    assert_eq!(app.state().filtered, &[0]);
    assert_eq!(app.view().count, "1");
    assert_eq!(headings(&app), vec!["Acme"]);
    assert!(app.view().visible_empty_state().is_none());
}

#[test]
fn test_category_selects_matching_record() {
    let mut app = loaded(Lang::En);
    app.set_query("", "Scanner");

    assert_eq!(app.state().filtered, &[1]);
    assert_eq!(app.view().count, "1");
    assert_eq!(headings(&app), vec!["Zed"]);
}

#[test]
fn test_no_match_shows_current_locale_empty_state() {
    for lang in [Lang::Ja, Lang::En] {
        let mut app = loaded(lang);
        app.set_search("nomatch");

        assert!(app.state().filtered.is_empty());
        assert_eq!(app.view().count, "0");
        assert!(app.view().cards().is_empty());
        let shown: Vec<Lang> = app
            .view()
            .empty_states
            .iter()
            .filter(|s| !s.hidden)
            .map(|s| s.lang)
            .collect();
        assert_eq!(shown, vec![lang]);
    }
}

#[test]
fn test_load_failure_shows_fixed_error() {
    let mut app = App::new(Lang::En);
    app.complete_load(Err(LoadError::Interrupted));

    assert_eq!(app.status(), LoadStatus::Failed);
    assert_eq!(app.view().load_error(), Some(LOAD_ERROR_MESSAGE));
    assert_eq!(app.view().count, "0");
    assert!(app.view().cards().is_empty());
    assert!(app.store().records().is_empty());
}

#[test]
fn test_search_input_is_trimmed_and_case_folded() {
    let mut app = loaded(Lang::En);
    app.set_search("  ACME  ");
    assert_eq!(app.state().query.keyword, "acme");
    assert_eq!(app.view().count, "1");
}

#[test]
fn test_quick_brand_equals_typed_keyword() {
    let mut typed = loaded(Lang::En);
    typed.set_search("acme");

    let mut clicked = loaded(Lang::En);
    clicked.select_brand("Acme");

    assert_eq!(clicked.state().filtered, typed.state().filtered);
    assert_eq!(clicked.view(), typed.view());
    assert_eq!(clicked.inputs().search, "Acme");
}

#[test]
fn test_quick_brand_keeps_category() {
    let mut app = loaded(Lang::En);
    app.set_category("Scanner");
    app.select_brand("Acme");
    assert!(app.state().filtered.is_empty());
    assert_eq!(app.inputs().category, "Scanner");
}

#[test]
fn test_locale_switch_does_not_refilter() {
    let mut app = loaded(Lang::Ja);
    app.set_search("a");
    let before_ptr = app.state().filtered.as_ptr();
    let before = app.state().filtered.to_vec();

    app.set_locale(Lang::En);

    assert_eq!(app.state().filtered.as_ptr(), before_ptr);
    assert_eq!(app.state().filtered, before.as_slice());
}

#[test]
fn test_locale_switch_rebuilds_link_labels() {
    let mut app = App::new(Lang::Ja);
    app.complete_load(Ok(vec![Record {
        brand: Some("Acme".to_string()),
        manual_url: Some("https://acme.example/manuals".to_string()),
        support_url: Some("https://acme.example/support".to_string()),
        ..Record::default()
    }]));
    let labels = |app: &App| -> Vec<String> {
        app.view().cards()[0]
            .links
            .iter()
            .map(|l| l.label.clone())
            .collect()
    };
    assert_eq!(labels(&app), vec!["マニュアル", "サポートTOP"]);

    app.set_locale(Lang::En);
    assert_eq!(labels(&app), vec!["Manuals", "Support"]);
    assert_eq!(app.locale_switch().text("category.label"), "Category");
}

#[test]
fn test_render_twice_is_idempotent() {
    let mut app = loaded(Lang::En);
    app.set_search("e");
    let first = app.view().clone();
    app.render();
    assert_eq!(app.view(), &first);
}

#[test]
fn test_input_while_pending_then_load_applies_inputs() {
    let mut app = App::new(Lang::En);
    app.set_search("zed");
    assert_eq!(app.view().count, "0");
    assert!(app.view().visible_empty_state().is_some());

    app.complete_load(Ok(records()));
    assert_eq!(headings(&app), vec!["Zed"]);
}

#[test]
fn test_filter_function_agrees_with_app() {
    let data = records();
    let mut app = loaded(Lang::En);
    app.set_query("laser", "Printer");
    let direct: Vec<&Record> = filter::filter(&data, "laser", "Printer");
    let state = app.state();
    let via_app: Vec<&Record> = state.filtered.iter().map(|&i| &state.records[i]).collect();
    assert_eq!(direct, via_app);
}
