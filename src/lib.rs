// src/lib.rs

pub mod command;
pub mod command_state;
pub mod context;
pub mod error;
pub mod exporter;
pub mod fields;
pub mod gate;
pub mod image_load;
pub mod portfolio;
pub mod store;
pub mod types;

use crate::image_load::ImageRequests;
use crate::store::ContentStore;
use crate::types::{AppState, SessionState};
use std::sync::Mutex;

/// Fresh state: nothing loaded, `Viewing`.
pub fn init_state() -> AppState {
    AppState {
        session: Mutex::new(SessionState::new()),
        store: Mutex::new(ContentStore::new()),
        image_requests: Mutex::new(ImageRequests::new()),
    }
}

impl AppState {
    pub fn new_for_tests() -> Self {
        crate::init_state()
    }
}
