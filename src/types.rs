// src/types.rs

use std::sync::Mutex;

use crate::gate::SessionGate;
use crate::image_load::ImageRequests;
use crate::store::ContentStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditMode {
    Viewing,
    Authenticating,
    Editing,
}

pub struct SessionState {
    pub mode: EditMode,

    // set when the gate was passed this session; not re-checked on save
    pub authenticated: bool,

    pub gate: SessionGate,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            mode: EditMode::Viewing,
            authenticated: false,
            gate: SessionGate::new(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the session for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionStatus {
    pub mode: EditMode,
    pub authenticated: bool,
    pub editing_enabled: bool,
    pub loaded: bool,
}

pub struct AppState {
    pub session: Mutex<SessionState>,
    pub store: Mutex<ContentStore>,

    // latest request token per image field
    pub image_requests: Mutex<ImageRequests>,
}
