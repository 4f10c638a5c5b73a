// src/ui/widgets.rs

use eframe::egui;

/// Plain label when viewing, single-line input when editing.
/// Returns the new text if the user changed it this frame.
pub fn editable_line(ui: &mut egui::Ui, editing: bool, value: &str) -> Option<String> {
    if !editing {
        ui.label(value);
        return None;
    }

    let mut buf = value.to_string();
    let resp = ui.add(egui::TextEdit::singleline(&mut buf).desired_width(f32::INFINITY));
    resp.changed().then_some(buf)
}

/// Same as `editable_line` but styled as a heading when viewing.
pub fn editable_heading(ui: &mut egui::Ui, editing: bool, value: &str) -> Option<String> {
    if !editing {
        ui.heading(value);
        return None;
    }
    editable_line(ui, editing, value)
}

/// Wrapped paragraph when viewing, multi-line input when editing.
pub fn editable_text(ui: &mut egui::Ui, editing: bool, value: &str) -> Option<String> {
    if !editing {
        ui.add(egui::Label::new(value).wrap());
        return None;
    }

    let mut buf = value.to_string();
    let resp = ui.add(
        egui::TextEdit::multiline(&mut buf)
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );
    resp.changed().then_some(buf)
}

pub fn section_title(ui: &mut egui::Ui, title: &str, scroll_here: bool) {
    ui.add_space(24.0);
    let resp = ui.label(egui::RichText::new(title).size(26.0).strong());
    if scroll_here {
        resp.scroll_to_me(Some(egui::Align::TOP));
    }
    ui.separator();
    ui.add_space(8.0);
}

pub fn tag_chip(ui: &mut egui::Ui, tag: &str) {
    egui::Frame::NONE
        .fill(egui::Color32::from_rgb(22, 78, 99))
        .corner_radius(egui::CornerRadius::same(10u8))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(tag).small());
        });
}

/// Short description of an image field; embedded data is not printed.
pub fn image_summary(url: &str) -> String {
    match url.strip_prefix("data:") {
        Some(rest) => {
            let mime = rest.split(';').next().unwrap_or("image");
            format!("embedded {mime} ({} bytes encoded)", url.len())
        }
        None => url.to_string(),
    }
}

pub fn ui_notice(ui: &mut egui::Ui, title: &str, body: &str) {
    let accent = egui::Color32::from_rgb(248, 113, 113);

    let stroke = egui::Stroke::new(1.5, accent);
    let fill = egui::Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), 32);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .stroke(stroke)
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(title).size(18.0).strong().color(accent));
            ui.add_space(4.0);
            ui.label(body);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_summary_hides_data_uri_payload() {
        let s = image_summary("data:image/png;base64,AAAA");
        assert!(s.starts_with("embedded image/png"));
        assert_eq!(image_summary("https://x/y.png"), "https://x/y.png");
    }
}
