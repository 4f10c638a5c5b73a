// src/command/session.rs

use crate::command_state::*;
use crate::error::{AppError, AppResult};
use crate::gate::SessionGate;
use crate::types::{AppState, EditMode, SessionStatus};

pub fn get_status(state: &AppState) -> AppResult<SessionStatus> {
    let (loaded, editing_enabled) = {
        let store = lock_store(state)?;
        let configured = store.committed().and_then(|r| r.configured_password());
        (store.is_loaded(), SessionGate::editing_enabled(configured))
    };

    let session = lock_session(state)?;
    Ok(SessionStatus {
        mode: session.mode,
        authenticated: session.authenticated,
        editing_enabled,
        loaded,
    })
}

/// Opens the password prompt. Without a configured password the request is
/// dropped and the mode stays `Viewing`.
pub fn request_edit(state: &AppState) -> AppResult<EditMode> {
    let enabled = {
        let store = lock_store(state)?;
        SessionGate::editing_enabled(store.committed().and_then(|r| r.configured_password()))
    };

    let mut session = lock_session(state)?;
    if session.mode != EditMode::Viewing {
        return Ok(session.mode);
    }

    if !enabled {
        log::warn!(
            "edit requested but no 'editPassword' is set in portfolio.json; editing stays disabled"
        );
        return Ok(session.mode);
    }

    session.gate.reset();
    session.mode = EditMode::Authenticating;
    Ok(session.mode)
}

/// Authenticating -> Editing on an exact match. A mismatch keeps the prompt
/// open with the gate's error set.
pub fn submit_password(candidate: &str, state: &AppState) -> AppResult<()> {
    // password is only ever read from the committed record
    let configured = {
        let store = lock_store(state)?;
        store.committed().and_then(|r| r.edit_password.clone())
    };

    {
        let mut session = lock_session(state)?;
        if session.mode != EditMode::Authenticating {
            return Err(AppError::NotAuthenticating);
        }

        if let Err(e) = session.gate.challenge(configured.as_deref(), candidate) {
            log::info!(
                "edit unlock rejected (attempt {})",
                session.gate.failed_attempts()
            );
            return Err(e);
        }

        session.authenticated = true;
        session.mode = EditMode::Editing;
    }

    // draft already mirrors committed since the last reset
    log::info!("edit mode unlocked");
    Ok(())
}

pub fn cancel_unlock(state: &AppState) -> AppResult<()> {
    require_mode(state, EditMode::Authenticating)?;
    return_to_viewing(state)
}

pub fn gate_error_message(state: &AppState) -> AppResult<Option<&'static str>> {
    Ok(lock_session(state)?.gate.error_message())
}

// ======================================================
// Unit Tests
// ======================================================
