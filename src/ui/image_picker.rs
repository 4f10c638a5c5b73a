// src/ui/image_picker.rs

use eframe::egui;
use portfolio_editor_lib::image_load::{is_image_path, ImageTarget, IMAGE_EXTENSIONS};
use std::path::PathBuf;

/// A local file chosen for one image field. Started after the frame is drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePick {
    pub target: ImageTarget,
    pub path: PathBuf,
}

/// Click opens the image file dialog; an image file dropped on the button works too.
pub fn image_button(
    ui: &mut egui::Ui,
    label: &str,
    target: ImageTarget,
    pick: &mut Option<ImagePick>,
) {
    let resp = ui
        .button(label)
        .on_hover_text("Browse, or drop an image file here");

    let path = if resp.clicked() {
        rfd::FileDialog::new()
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .pick_file()
    } else if ui.rect_contains_pointer(resp.rect) {
        dropped_image(ui.ctx())
    } else {
        None
    };

    if let Some(path) = path {
        *pick = Some(ImagePick { target, path });
    }
}

fn dropped_image(ctx: &egui::Context) -> Option<PathBuf> {
    ctx.input(|i| {
        i.raw
            .dropped_files
            .iter()
            .filter_map(|f| f.path.clone())
            .find(|p| is_image_path(p))
    })
}
