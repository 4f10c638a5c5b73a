// src/command/mod.rs

pub mod edit;
pub mod load;
pub mod session;

// --- Public façade ---

pub use edit::{apply_image_read, begin_image_read, cancel_edits, save_changes, update_draft};
pub use load::{load_portfolio, load_portfolio_bytes, load_portfolio_file};
pub use session::{cancel_unlock, gate_error_message, get_status, request_edit, submit_password};
