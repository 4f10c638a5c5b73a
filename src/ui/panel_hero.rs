// src/ui/panel_hero.rs

use eframe::egui;
use portfolio_editor_lib::{fields, image_load::ImageTarget};

use super::image_picker::{self, ImagePick};
use super::message::PanelMsgState;
use super::{apply_edit, widgets, Section, SectionView};

pub fn ui(
    ui: &mut egui::Ui,
    view: &SectionView,
    msg: &mut PanelMsgState,
    image_pick: &mut Option<ImagePick>,
    scroll_to: &mut Option<Section>,
) {
    let rec = view.record;

    ui.vertical_centered(|ui| {
        ui.add_space(32.0);

        ui.label(egui::RichText::new(widgets::image_summary(&rec.avatar_url)).weak());
        if view.editing {
            image_picker::image_button(
                ui,
                "Change profile picture…",
                ImageTarget::Avatar,
                image_pick,
            );
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Hi, I'm").size(32.0).strong());
            if view.editing {
                if let Some(v) = widgets::editable_line(ui, true, &rec.name) {
                    apply_edit(view.state, msg, fields::set_name(v));
                }
            } else {
                ui.label(egui::RichText::new(&rec.name).size(32.0).strong());
            }
        });

        if let Some(v) = widgets::editable_line(ui, view.editing, &rec.title) {
            apply_edit(view.state, msg, fields::set_title(v));
        }

        ui.add_space(8.0);
        if let Some(v) = widgets::editable_text(ui, view.editing, &rec.bio) {
            apply_edit(view.state, msg, fields::set_bio(v));
        }

        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            for social in &rec.contact.socials {
                ui.hyperlink_to(social.name.as_str(), &social.url);
            }
        });

        ui.add_space(12.0);
        if ui.button("Get In Touch").clicked() {
            *scroll_to = Some(Section::Contact);
        }
    });
}
