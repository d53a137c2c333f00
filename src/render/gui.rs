// SPDX-License-Identifier: PMPL-1.0-or-later

//! Native window for browsing the catalog.

use crate::app::{App, LoadStatus};
use crate::i18n::{t, Lang};
use crate::loader::PendingLoad;
use crate::render::{CardModel, ResultsBody};
use anyhow::{anyhow, Result};
use eframe::{egui, App as EframeApp, Frame, NativeOptions};
use std::time::Duration;
use tracing::{debug, warn};

/// System fonts tried, in order, as a fallback for Japanese glyphs.
const CJK_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
];

/// Input collected while drawing, applied once the frame is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
enum GuiAction {
    Search(String),
    Category(String),
    Brand(String),
    Locale(Lang),
}

pub struct CatalogGui {
    app: App,
    pending: PendingLoad,
    search_buffer: String,
}

impl CatalogGui {
    pub fn run(app: App, pending: PendingLoad) -> Result<()> {
        let options = NativeOptions::default();
        let gui = Self {
            search_buffer: app.inputs().search.clone(),
            app,
            pending,
        };
        eframe::run_native(
            "manual-finder",
            options,
            Box::new(|cc| {
                install_cjk_font(&cc.egui_ctx);
                Box::new(gui)
            }),
        )
        .map_err(|err| anyhow!("failed to launch catalog GUI: {err}"))?;
        Ok(())
    }

    fn apply(&mut self, action: GuiAction) {
        match action {
            GuiAction::Search(text) => self.app.set_search(&text),
            GuiAction::Category(category) => self.app.set_category(&category),
            GuiAction::Brand(brand) => {
                self.app.select_brand(&brand);
                self.search_buffer = self.app.inputs().search.clone();
            }
            GuiAction::Locale(lang) => self.app.set_locale(lang),
        }
    }
}

impl EframeApp for CatalogGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if let Some(outcome) = self.pending.try_take() {
            self.app.complete_load(outcome);
        }
        if !self.pending.is_settled() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui, &mut actions);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_results(ui);
        });

        for action in actions {
            self.apply(action);
        }
    }
}

impl CatalogGui {
    fn render_header(&mut self, ui: &mut egui::Ui, actions: &mut Vec<GuiAction>) {
        let switch = self.app.locale_switch();
        let lang = self.app.locale();

        ui.horizontal(|ui| {
            ui.heading(switch.text("app.title"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                for control in switch.controls().iter().rev() {
                    if ui.selectable_label(control.selected, control.label).clicked() {
                        actions.push(GuiAction::Locale(control.lang));
                    }
                }
            });
        });
        ui.label(egui::RichText::new(switch.text("app.subtitle")).weak());
        ui.separator();

        ui.horizontal(|ui| {
            ui.label(switch.text("search.label"));
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search_buffer)
                    .hint_text(switch.text("search.placeholder"))
                    .desired_width(320.0),
            );
            if response.changed() {
                actions.push(GuiAction::Search(self.search_buffer.clone()));
            }

            let current = self.app.inputs().category.clone();
            let all = t(lang, "category.all");
            let selected_text = if current.is_empty() { all } else { current.as_str() };
            egui::ComboBox::from_label(switch.text("category.label"))
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    if ui.selectable_label(current.is_empty(), all).clicked() {
                        actions.push(GuiAction::Category(String::new()));
                    }
                    for option in self.app.category_options() {
                        if ui.selectable_label(current == option, option.as_str()).clicked() {
                            actions.push(GuiAction::Category(option));
                        }
                    }
                });
        });

        if !self.app.quick_brands().is_empty() {
            ui.horizontal_wrapped(|ui| {
                ui.label(switch.text("quick.label"));
                for brand in self.app.quick_brands() {
                    if ui.button(brand.as_str()).clicked() {
                        actions.push(GuiAction::Brand(brand.clone()));
                    }
                }
            });
        }
        ui.add_space(4.0);
    }

    fn render_results(&self, ui: &mut egui::Ui) {
        let view = self.app.view();
        let lang = self.app.locale();

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&view.count).strong());
            ui.label(self.app.locale_switch().text("results.count"));
        });
        if self.app.status() == LoadStatus::Pending {
            ui.label(egui::RichText::new(t(lang, "results.loading")).weak());
        }
        ui.separator();

        if let Some(empty) = view.visible_empty_state() {
            ui.label(empty.text.as_str());
        }

        egui::ScrollArea::vertical().show(ui, |ui| match &view.body {
            ResultsBody::LoadError(message) => {
                ui.colored_label(egui::Color32::RED, message.as_str());
            }
            ResultsBody::Cards(cards) => {
                for card in cards {
                    render_card(ui, card);
                    ui.add_space(6.0);
                }
            }
        });
    }
}

fn render_card(ui: &mut egui::Ui, card: &CardModel) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&card.heading).strong().size(16.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(&card.badge).color(egui::Color32::DARK_GREEN));
                if let Some(country) = &card.country {
                    ui.label(egui::RichText::new(country).weak());
                }
                ui.label(card.category.as_str());
            });
        });
        if let Some(note) = &card.note {
            ui.label(note.as_str());
        }
        ui.horizontal_wrapped(|ui| {
            for link in &card.links {
                ui.add(
                    egui::Hyperlink::from_label_and_url(link.label.as_str(), &link.href)
                        .open_in_new_tab(link.new_context),
                );
            }
        });
    });
}

fn install_cjk_font(ctx: &egui::Context) {
    let Some((path, bytes)) = CJK_FONT_CANDIDATES
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|bytes| (*path, bytes)))
    else {
        warn!("no CJK font found, Japanese text may not render");
        return;
    };
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("cjk".to_owned(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push("cjk".to_owned());
    }
    ctx.set_fonts(fonts);
    debug!(path, "installed CJK fallback font");
}
