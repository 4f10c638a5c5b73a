// src/ui/panel_password.rs

use eframe::egui;
use portfolio_editor_lib::{command, context::AppCtx, error::AppError, types::AppState};
use zeroize::Zeroize;

use super::message::PanelMsgState;

pub struct PasswordPanel {
    password: String,
    show_password: bool,
    focus_pending: bool,
    msg: PanelMsgState,
}

impl PasswordPanel {
    pub fn new() -> Self {
        Self {
            password: String::new(),
            show_password: false,
            focus_pending: true,
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    pub fn reset_inputs(&mut self) {
        self.password.zeroize();
        self.show_password = false;
        self.focus_pending = true;
    }

    pub fn ui(&mut self, ctx: &egui::Context, state: &AppState, app: &AppCtx) {
        let mut submit = false;
        let mut cancel = false;

        egui::Window::new("Enter Password")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("Please enter the password to edit the portfolio.");
                ui.add_space(8.0);

                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.password)
                        .password(!self.show_password)
                        .hint_text("Password"),
                );
                if self.focus_pending {
                    resp.request_focus();
                    self.focus_pending = false;
                }
                if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }

                ui.checkbox(&mut self.show_password, "Show password");
                ui.add_space(8.0);

                self.msg.show(ui, app.debug_ui);

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                    if ui
                        .add_enabled(!self.password.is_empty(), egui::Button::new("Unlock"))
                        .clicked()
                    {
                        submit = true;
                    }
                });
            });

        if cancel {
            if let Err(e) = command::cancel_unlock(state) {
                self.msg.from_app_error(&e);
            }
            self.reset_inputs();
            return;
        }

        if submit && !self.password.is_empty() {
            self.clear_messages();

            match command::submit_password(&self.password, state) {
                Ok(()) => {}
                Err(AppError::IncorrectPassword) => {
                    let text = command::gate_error_message(state)
                        .ok()
                        .flatten()
                        .unwrap_or("Incorrect password. Please try again.");
                    self.msg.set_error(text);
                }
                Err(e) => self.msg.from_app_error(&e),
            }

            // cleared on every attempt; retries are unlimited
            self.password.zeroize();
            self.focus_pending = true;
        }
    }
}
