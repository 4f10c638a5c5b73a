// src/ui/panel_edit.rs

use eframe::egui;
use portfolio_editor_lib::{command, context::AppCtx, types::AppState, types::EditMode};

use super::message::PanelMsgState;

/// Floating Edit / Save / Cancel buttons in the bottom-right corner.
pub struct EditControls {
    pub msg: PanelMsgState,
}

impl EditControls {
    pub fn new() -> Self {
        Self {
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn ui(&mut self, ctx: &egui::Context, state: &AppState, app: &AppCtx, mode: EditMode) {
        egui::Area::new(egui::Id::new("edit_controls"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(320.0);
                    self.msg.show(ui, app.debug_ui);

                    ui.horizontal(|ui| match mode {
                        EditMode::Editing => {
                            if ui.button("Cancel").clicked() {
                                self.clear_messages();
                                if let Err(e) = command::cancel_edits(state) {
                                    self.msg.from_app_error(&e);
                                }
                            }
                            if ui.button("Save Changes").clicked() {
                                self.save(state, app);
                            }
                        }
                        EditMode::Viewing => {
                            if ui.button("Edit Portfolio").clicked() {
                                self.clear_messages();
                                if let Err(e) = command::request_edit(state) {
                                    self.msg.from_app_error(&e);
                                }
                            }
                        }
                        // the password modal owns this state
                        EditMode::Authenticating => {}
                    });
                });
            });
    }

    fn save(&mut self, state: &AppState, app: &AppCtx) {
        self.clear_messages();
        match command::save_changes(state, app) {
            Ok(artifact) => {
                self.msg.set_success(format!("Saved to {}", artifact.path.display()));
            }
            Err(e) => self.msg.from_app_error(&e),
        }
    }
}
