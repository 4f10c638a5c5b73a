// src/ui/message.rs

use portfolio_editor_lib::error::{AppError, UserMsgKind};

use super::egui;
use super::egui::{Color32, Ui};

#[derive(Clone, Debug, Default)]
pub struct PanelMsgState {
    kind: Option<UserMsgKind>,
    short: Option<String>,
    detail: Option<String>,
}

impl PanelMsgState {
    pub fn clear(&mut self) {
        self.kind = None;
        self.short = None;
        self.detail = None;
    }

    pub fn set_success(&mut self, short: impl Into<String>) {
        self.set(UserMsgKind::Success, short);
    }

    pub fn set_error(&mut self, short: impl Into<String>) {
        self.set(UserMsgKind::Error, short);
    }

    fn set(&mut self, kind: UserMsgKind, short: impl Into<String>) {
        self.kind = Some(kind);
        self.short = Some(short.into());
        self.detail = None;
    }

    pub fn from_app_error(&mut self, err: &AppError) {
        let msg = err.user_msg();
        self.kind = Some(msg.kind);
        self.short = Some(msg.short.to_string());
        self.detail = msg.detail;
    }

    pub fn show(&self, ui: &mut Ui, debug_ui: bool) {
        let (Some(kind), Some(short)) = (self.kind, self.short.as_deref()) else {
            return;
        };

        let text = match (debug_ui, self.detail.as_deref()) {
            (true, Some(detail)) => detail,
            _ => short,
        };

        let (stroke, fill) = match kind {
            UserMsgKind::Success => (Color32::from_rgb(0, 220, 90), Color32::from_rgb(0, 80, 40)),
            UserMsgKind::Warn => (Color32::from_rgb(255, 170, 0), Color32::from_rgb(90, 60, 0)),
            UserMsgKind::Error => (Color32::from_rgb(255, 60, 60), Color32::from_rgb(90, 0, 0)),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(egui::CornerRadius::same(8u8))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.colored_label(stroke, text);
            });
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_keeps_its_kind_and_detail() {
        let mut m = PanelMsgState::default();
        m.from_app_error(&AppError::EditingDisabled);

        assert_eq!(m.kind, Some(UserMsgKind::Warn));
        assert_eq!(m.short.as_deref(), Some("Editing is disabled for this portfolio."));
        assert!(m.detail.is_some());
    }

    #[test]
    fn plain_messages_drop_previous_detail() {
        let mut m = PanelMsgState::default();
        m.from_app_error(&AppError::ExportWriteFailed("disk full".into()));
        m.set_success("Saved");

        assert_eq!(m.kind, Some(UserMsgKind::Success));
        assert_eq!(m.short.as_deref(), Some("Saved"));
        assert!(m.detail.is_none());

        m.clear();
        assert!(m.kind.is_none() && m.short.is_none());
    }
}
