// src/command_state.rs

use crate::{
    error::{AppError, AppResult},
    image_load::ImageRequests,
    store::ContentStore,
    types::{AppState, EditMode, SessionState},
};
use std::sync::MutexGuard;

// ======================================================
// locking helpers
// ======================================================

pub fn lock_session<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, SessionState>> {
    state
        .session
        .lock()
        .map_err(|_| AppError::StateLockPoisoned)
}

pub fn lock_store<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, ContentStore>> {
    state.store.lock().map_err(|_| AppError::StateLockPoisoned)
}

pub fn lock_image_requests<'a>(state: &'a AppState) -> AppResult<MutexGuard<'a, ImageRequests>> {
    state
        .image_requests
        .lock()
        .map_err(|_| AppError::StateLockPoisoned)
}

// ======================================================
// mode helpers
// ======================================================

pub fn current_mode(state: &AppState) -> AppResult<EditMode> {
    Ok(lock_session(state)?.mode)
}

pub fn require_mode(state: &AppState, mode: EditMode) -> AppResult<()> {
    if current_mode(state)? == mode {
        return Ok(());
    }

    Err(match mode {
        EditMode::Editing => AppError::NotEditing,
        EditMode::Authenticating => AppError::NotAuthenticating,
        EditMode::Viewing => AppError::NotEditing,
    })
}

/// Back to `Viewing`: gate state and the authenticated flag are cleared,
/// in-flight image reads are forgotten.
pub fn return_to_viewing(state: &AppState) -> AppResult<()> {
    {
        let mut session = lock_session(state)?;
        session.mode = EditMode::Viewing;
        session.authenticated = false;
        session.gate.reset();
    }

    lock_image_requests(state)?.clear();
    Ok(())
}

/// Runs `f` against the record the UI should currently show.
pub fn with_active_view<T>(
    state: &AppState,
    f: impl FnOnce(Option<&crate::portfolio::PortfolioRecord>) -> T,
) -> AppResult<T> {
    let editing = current_mode(state)? == EditMode::Editing;
    let store = lock_store(state)?;
    Ok(f(store.active_view(editing)))
}

// ======================================================
// Unit Tests
// ======================================================
