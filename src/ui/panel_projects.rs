// src/ui/panel_projects.rs

use eframe::egui;
use portfolio_editor_lib::{fields, image_load::ImageTarget, portfolio::Project};

use super::image_picker::{self, ImagePick};
use super::message::PanelMsgState;
use super::{apply_edit, widgets, Section, SectionView};

pub fn ui(
    ui: &mut egui::Ui,
    view: &SectionView,
    msg: &mut PanelMsgState,
    image_pick: &mut Option<ImagePick>,
    scroll_to: Option<Section>,
) {
    widgets::section_title(ui, "Projects", scroll_to == Some(Section::Projects));

    for (index, project) in view.record.projects.iter().enumerate() {
        project_card(ui, view, msg, image_pick, index, project);
        ui.add_space(12.0);
    }
}

fn project_card(
    ui: &mut egui::Ui,
    view: &SectionView,
    msg: &mut PanelMsgState,
    image_pick: &mut Option<ImagePick>,
    index: usize,
    project: &Project,
) {
    let state = view.state;
    let editing = view.editing;

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(widgets::image_summary(&project.image_url)).weak());
                if editing {
                    image_picker::image_button(
                        ui,
                        "Change image…",
                        ImageTarget::ProjectImage(index),
                        image_pick,
                    );
                }
            });

            if let Some(v) = widgets::editable_heading(ui, editing, &project.title) {
                apply_edit(state, msg, fields::set_project_title(index, v));
            }

            if let Some(v) = widgets::editable_text(ui, editing, &project.description) {
                apply_edit(state, msg, fields::set_project_description(index, v));
            }

            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                for tag in &project.tags {
                    widgets::tag_chip(ui, tag);
                }
            });

            if editing {
                ui.add_space(4.0);
                ui.label(egui::RichText::new("Tags (comma separated)").small());
                let joined = fields::join_tags(&project.tags);
                if let Some(v) = widgets::editable_line(ui, true, &joined) {
                    apply_edit(state, msg, fields::set_project_tags_from_text(index, &v));
                }

                ui.label(egui::RichText::new("Live demo URL").small());
                let live = project.live_url.as_deref().unwrap_or("");
                if let Some(v) = widgets::editable_line(ui, true, live) {
                    apply_edit(state, msg, fields::set_project_live_url(index, v));
                }

                ui.label(egui::RichText::new("Source code URL").small());
                let source = project.source_url.as_deref().unwrap_or("");
                if let Some(v) = widgets::editable_line(ui, true, source) {
                    apply_edit(state, msg, fields::set_project_source_url(index, v));
                }
            } else {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if let Some(url) = &project.live_url {
                        ui.hyperlink_to("Live Demo", url);
                    }
                    if let Some(url) = &project.source_url {
                        ui.hyperlink_to("Source Code", url);
                    }
                });
            }
        });
}
