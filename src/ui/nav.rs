// src/ui/nav.rs

use eframe::egui;
use portfolio_editor_lib::{fields, types::AppState};

use super::message::PanelMsgState;
use super::{apply_edit, widgets, Section};

/// What the top bar should show (derived by ui/mod.rs)
#[derive(Clone, Debug)]
pub struct NavModel {
    pub name: String,
    pub editing: bool,
}

pub struct TopNav;

impl TopNav {
    pub fn new() -> Self {
        Self
    }

    /// Renders the name and section links; a link click requests a scroll.
    pub fn ui(
        &mut self,
        ctx: &egui::Context,
        state: &AppState,
        model: &NavModel,
        msg: &mut PanelMsgState,
        scroll_to: &mut Option<Section>,
    ) {
        egui::TopBottomPanel::top("top_nav").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.allocate_ui(egui::vec2(240.0, ui.available_height()), |ui| {
                    if let Some(v) = widgets::editable_line(ui, model.editing, &model.name) {
                        apply_edit(state, msg, fields::set_name(v));
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // right_to_left: listed in reverse
                    for section in Section::NAV.iter().rev() {
                        if ui.link(section.label()).clicked() {
                            *scroll_to = Some(*section);
                        }
                    }
                });
            });
            ui.add_space(4.0);
        });
    }
}
