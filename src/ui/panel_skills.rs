// src/ui/panel_skills.rs

use eframe::egui;
use portfolio_editor_lib::{fields, portfolio::SkillCategory};

use super::message::PanelMsgState;
use super::{apply_edit, widgets, Section, SectionView};

pub fn ui(
    ui: &mut egui::Ui,
    view: &SectionView,
    msg: &mut PanelMsgState,
    scroll_to: Option<Section>,
) {
    widgets::section_title(ui, "Skills", scroll_to == Some(Section::Skills));

    ui.columns(SkillCategory::ALL.len(), |cols| {
        for (col, category) in cols.iter_mut().zip(SkillCategory::ALL) {
            let skills = view.record.skills_in(category);
            if skills.is_empty() {
                continue;
            }

            col.label(egui::RichText::new(category.label()).size(18.0).strong());
            col.add_space(4.0);

            // flat indices, so non-contiguous categories edit the right skill
            for (index, skill) in skills {
                if let Some(v) = widgets::editable_line(col, view.editing, &skill.name) {
                    apply_edit(view.state, msg, fields::set_skill_name(index, v));
                }
            }
        }
    });
}
