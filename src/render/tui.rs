// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive terminal browser for the catalog

use crate::app::{App, LoadStatus};
use crate::i18n::t;
use crate::loader::PendingLoad;
use crate::render::text::ViewFormatter;
use anyhow::Result;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::time::Duration;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiAction {
    Quit,
    Insert(char),
    Backspace,
    ClearSearch,
    NextCategory,
    PrevCategory,
    NextBrand,
    ToggleLocale,
    ScrollDown,
    ScrollUp,
}

/// Browser-local position state that is not part of the application state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TuiCursor {
    pub scroll: usize,
    pub brand: Option<usize>,
}

pub fn key_action(key: KeyEvent) -> Option<TuiAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(TuiAction::Quit),
        KeyCode::Char('c') if ctrl => Some(TuiAction::Quit),
        KeyCode::Char('u') if ctrl => Some(TuiAction::ClearSearch),
        KeyCode::Char('b') if ctrl => Some(TuiAction::NextBrand),
        KeyCode::Char('l') if ctrl => Some(TuiAction::ToggleLocale),
        KeyCode::F(2) => Some(TuiAction::ToggleLocale),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(TuiAction::Insert(c))
        }
        KeyCode::Backspace => Some(TuiAction::Backspace),
        KeyCode::Tab => Some(TuiAction::NextCategory),
        KeyCode::BackTab => Some(TuiAction::PrevCategory),
        KeyCode::Down | KeyCode::PageDown => Some(TuiAction::ScrollDown),
        KeyCode::Up | KeyCode::PageUp => Some(TuiAction::ScrollUp),
        _ => None,
    }
}

/// Apply `action` to the application. `Quit` is the caller's business.
pub fn apply_action(app: &mut App, action: TuiAction, cursor: &mut TuiCursor) {
    match action {
        TuiAction::Quit => {}
        TuiAction::Insert(c) => {
            let mut search = app.inputs().search.clone();
            search.push(c);
            app.set_search(&search);
            cursor.scroll = 0;
        }
        TuiAction::Backspace => {
            let mut search = app.inputs().search.clone();
            search.pop();
            app.set_search(&search);
            cursor.scroll = 0;
        }
        TuiAction::ClearSearch => {
            app.set_search("");
            cursor.scroll = 0;
        }
        TuiAction::NextCategory | TuiAction::PrevCategory => {
            // Index 0 is the "all categories" option.
            let mut options = vec![String::new()];
            options.extend(app.category_options());
            let current = options
                .iter()
                .position(|c| *c == app.inputs().category)
                .unwrap_or(0);
            let next = if action == TuiAction::NextCategory {
                (current + 1) % options.len()
            } else {
                (current + options.len() - 1) % options.len()
            };
            app.set_category(&options[next]);
            cursor.scroll = 0;
        }
        TuiAction::NextBrand => {
            let brands = app.quick_brands().to_vec();
            if brands.is_empty() {
                return;
            }
            let next = cursor.brand.map_or(0, |i| (i + 1) % brands.len());
            cursor.brand = Some(next);
            app.select_brand(&brands[next]);
            cursor.scroll = 0;
        }
        TuiAction::ToggleLocale => {
            let next = app.locale().toggled();
            app.set_locale(next);
        }
        TuiAction::ScrollDown => cursor.scroll += 1,
        TuiAction::ScrollUp => cursor.scroll = cursor.scroll.saturating_sub(1),
    }
}

/// Fixed header lines above the results.
pub fn header_lines(app: &App, cursor: &TuiCursor) -> Vec<String> {
    let switch = app.locale_switch();
    let lang = app.locale();
    let mut lines = Vec::new();

    lines.push(switch.text("app.title").bold().cyan().to_string());
    lines.push(switch.text("app.subtitle").dimmed().to_string());
    lines.push(String::new());

    let search = &app.inputs().search;
    let search_text = if search.is_empty() {
        switch.text("search.placeholder").dimmed().to_string()
    } else {
        search.clone()
    };
    lines.push(format!("{}: {}▏", switch.text("search.label").bold(), search_text));

    let category = &app.inputs().category;
    let category_text = if category.is_empty() {
        t(lang, "category.all")
    } else {
        category.as_str()
    };
    lines.push(format!("{}: {}", switch.text("category.label").bold(), category_text));

    if !app.quick_brands().is_empty() {
        let brands: Vec<String> = app
            .quick_brands()
            .iter()
            .enumerate()
            .map(|(i, brand)| {
                if cursor.brand == Some(i) {
                    format!("[{}]", brand).green().to_string()
                } else {
                    brand.clone()
                }
            })
            .collect();
        lines.push(format!("{}: {}", switch.text("quick.label").bold(), brands.join(" ")));
    }

    let controls: Vec<String> = switch
        .controls()
        .iter()
        .map(|control| {
            if control.selected {
                format!("[{}]", control.label).green().to_string()
            } else {
                control.label.to_string()
            }
        })
        .collect();
    lines.push(format!("{}: {}", switch.text("lang.label").bold(), controls.join(" ")));

    if app.status() == LoadStatus::Pending {
        lines.push(t(lang, "results.loading").yellow().to_string());
    }
    lines.push(String::new());
    lines
}

pub struct CatalogTui;

impl CatalogTui {
    pub fn run(app: &mut App, pending: &mut PendingLoad) -> Result<()> {
        terminal::enable_raw_mode()?;
        let result = Self::run_inner(app, pending);
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner(app: &mut App, pending: &mut PendingLoad) -> Result<()> {
        let mut stdout = stdout();
        let mut position = TuiCursor::default();

        loop {
            if let Some(outcome) = pending.try_take() {
                app.complete_load(outcome);
                position.scroll = 0;
            }

            Self::render(&mut stdout, app, &mut position)?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    match key_action(key) {
                        Some(TuiAction::Quit) => break,
                        Some(action) => apply_action(app, action, &mut position),
                        None => {}
                    }
                }
            }
        }

        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    fn render(stdout: &mut impl Write, app: &App, tui_cursor: &mut TuiCursor) -> Result<()> {
        let (_, rows) = terminal::size()?;
        let header = header_lines(app, tui_cursor);
        let body_text = ViewFormatter::new().format(app.view(), app.locale());
        let body: Vec<&str> = body_text.lines().collect();

        // Header, body window, one footer line.
        let window = (rows as usize)
            .saturating_sub(header.len() + 1)
            .max(1);
        tui_cursor.scroll = tui_cursor.scroll.min(body.len().saturating_sub(window));

        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for line in &header {
            write!(stdout, "{}\r\n", line)?;
        }
        for line in body.iter().skip(tui_cursor.scroll).take(window) {
            write!(stdout, "{}\r\n", line)?;
        }
        write!(stdout, "{}", t(app.locale(), "tui.controls").dimmed())?;
        stdout.flush()?;
        Ok(())
    }
}
