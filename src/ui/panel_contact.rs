// src/ui/panel_contact.rs

use chrono::Datelike;
use eframe::egui;
use portfolio_editor_lib::fields;

use super::message::PanelMsgState;
use super::{apply_edit, widgets, Section, SectionView};

const INVITE: &str = "I'm currently open to new opportunities and collaborations. \
Feel free to reach out if you have a project in mind, want to connect, or just say hello!";

pub fn ui(
    ui: &mut egui::Ui,
    view: &SectionView,
    msg: &mut PanelMsgState,
    scroll_to: Option<Section>,
) {
    widgets::section_title(ui, "Get In Touch", scroll_to == Some(Section::Contact));

    let state = view.state;
    let contact = &view.record.contact;

    ui.vertical_centered(|ui| {
        ui.label(INVITE);
        ui.add_space(12.0);

        if view.editing {
            if let Some(v) = widgets::editable_line(ui, true, &contact.email) {
                apply_edit(state, msg, fields::set_email(v));
            }
        } else {
            ui.hyperlink_to(contact.email.as_str(), format!("mailto:{}", contact.email));
        }

        ui.add_space(12.0);
        for (index, social) in contact.socials.iter().enumerate() {
            if view.editing {
                ui.horizontal(|ui| {
                    ui.label(format!("{}:", social.icon));
                    if let Some(v) = widgets::editable_line(ui, true, &social.name) {
                        apply_edit(state, msg, fields::set_social_name(index, v));
                    }
                });
                if let Some(v) = widgets::editable_line(ui, true, &social.url) {
                    apply_edit(state, msg, fields::set_social_url(index, v));
                }
                ui.add_space(4.0);
            } else {
                ui.hyperlink_to(social.name.as_str(), &social.url);
            }
        }
    });
}

pub fn footer(ui: &mut egui::Ui, view: &SectionView, msg: &mut PanelMsgState) {
    ui.add_space(32.0);
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(format!("© {}", chrono::Local::now().year()));
        if let Some(v) = widgets::editable_line(ui, view.editing, &view.record.name) {
            apply_edit(view.state, msg, fields::set_name(v));
        }
        ui.label(". All rights reserved.");
    });
    ui.add_space(16.0);
}
