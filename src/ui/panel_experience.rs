// src/ui/panel_experience.rs

use eframe::egui;
use portfolio_editor_lib::fields;

use super::message::PanelMsgState;
use super::{apply_edit, widgets, Section, SectionView};

pub fn ui(
    ui: &mut egui::Ui,
    view: &SectionView,
    msg: &mut PanelMsgState,
    scroll_to: Option<Section>,
) {
    widgets::section_title(ui, "Experience", scroll_to == Some(Section::Experience));

    let state = view.state;
    let editing = view.editing;

    for (index, job) in view.record.experience.iter().enumerate() {
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                if let Some(v) = widgets::editable_heading(ui, editing, &job.title) {
                    apply_edit(state, msg, fields::set_experience_title(index, v));
                }
                ui.horizontal(|ui| {
                    if let Some(v) = widgets::editable_line(ui, editing, &job.company) {
                        apply_edit(state, msg, fields::set_experience_company(index, v));
                    }
                    ui.label("·");
                    if let Some(v) = widgets::editable_line(ui, editing, &job.duration) {
                        apply_edit(state, msg, fields::set_experience_duration(index, v));
                    }
                });

                ui.add_space(6.0);
                if editing {
                    ui.label(egui::RichText::new("One bullet per line").small());
                    let text = fields::join_lines(&job.description);
                    if let Some(v) = widgets::editable_text(ui, true, &text) {
                        apply_edit(
                            state,
                            msg,
                            fields::set_experience_description_from_text(index, &v),
                        );
                    }
                } else {
                    for item in &job.description {
                        ui.label(format!("• {item}"));
                    }
                }
            });
        ui.add_space(12.0);
    }
}
