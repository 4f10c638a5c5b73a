// src/image_load.rs

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

use crate::error::{AppError, AppResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageTarget {
    Avatar,
    ProjectImage(usize),
}

pub type RequestToken = u64;

/// Issues a monotonically increasing token per image field so that only the
/// most recent selection for a field is applied, whatever order reads finish in.
#[derive(Debug, Default)]
pub struct ImageRequests {
    next: RequestToken,
    latest: HashMap<ImageTarget, RequestToken>,
}

impl ImageRequests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, target: ImageTarget) -> RequestToken {
        self.next = self.next.saturating_add(1);
        self.latest.insert(target, self.next);
        self.next
    }

    pub fn is_current(&self, target: ImageTarget, token: RequestToken) -> bool {
        self.latest.get(&target) == Some(&token)
    }

    /// Marks the request finished; later completions with the same token are stale.
    pub fn finish(&mut self, target: ImageTarget, token: RequestToken) -> bool {
        if self.is_current(target, token) {
            self.latest.remove(&target);
            true
        } else {
            false
        }
    }

    pub fn pending(&self) -> usize {
        self.latest.len()
    }

    pub fn clear(&mut self) {
        self.latest.clear();
    }
}

#[derive(Debug)]
pub struct ImageReadDone {
    pub target: ImageTarget,
    pub token: RequestToken,
    pub result: AppResult<String>,
}

pub fn spawn_read(
    path: PathBuf,
    target: ImageTarget,
    token: RequestToken,
    tx: Sender<ImageReadDone>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let result = read_data_uri(&path);
        // receiver gone means the app is shutting down
        let _ = tx.send(ImageReadDone {
            target,
            token,
            result,
        });
    })
}

pub fn read_data_uri(path: &Path) -> AppResult<String> {
    let bytes = std::fs::read(path).map_err(|e| AppError::ImageReadFailed(e.to_string()))?;
    Ok(encode_data_uri(mime_for_path(path), &bytes))
}

pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Extensions offered by the image file dialog and accepted on drop.
pub const IMAGE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "gif", "webp", "svg", "bmp", "ico"];

pub fn is_image_path(path: &Path) -> bool {
    mime_for_path(path).starts_with("image/")
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

// ======================================================
// Unit Tests
// ======================================================
