// src/command/load.rs

use crate::command_state::{lock_store, return_to_viewing};
use crate::context::AppCtx;
use crate::error::{AppError, AppResult};
use crate::portfolio::PortfolioRecord;
use crate::store::MAX_PORTFOLIO_BYTES;
use crate::types::AppState;

use std::fs;
use std::path::Path;

/// Reads the input document named by the context.
pub fn load_portfolio(state: &AppState, ctx: &AppCtx) -> AppResult<PortfolioRecord> {
    load_portfolio_file(state, &ctx.portfolio_path)
}

pub fn load_portfolio_file(state: &AppState, path: &Path) -> AppResult<PortfolioRecord> {
    match read_capped(path) {
        Ok(bytes) => load_portfolio_bytes(state, &bytes),
        Err(e) => {
            log::error!("failed to read portfolio {}: {e}", path.display());
            lock_store(state)?.fail_load(&e);
            Err(e)
        }
    }
}

pub fn load_portfolio_bytes(state: &AppState, raw: &[u8]) -> AppResult<PortfolioRecord> {
    return_to_viewing(state)?;

    let res = lock_store(state)?.load(raw);
    match &res {
        Ok(rec) => log::info!(
            "portfolio loaded: {} projects, {} skills, {} experience entries, editing {}",
            rec.projects.len(),
            rec.skills.len(),
            rec.experience.len(),
            if rec.configured_password().is_some() {
                "enabled"
            } else {
                "disabled"
            }
        ),
        Err(e) => log::error!("failed to parse portfolio: {e}"),
    }
    res
}

fn read_capped(path: &Path) -> AppResult<Vec<u8>> {
    let meta = fs::metadata(path).map_err(|e| AppError::LoadReadFailed(e.to_string()))?;

    let bytes = meta.len();
    if bytes > MAX_PORTFOLIO_BYTES {
        return Err(AppError::LoadTooLarge {
            bytes,
            max: MAX_PORTFOLIO_BYTES,
        });
    }

    fs::read(path).map_err(|e| AppError::LoadReadFailed(e.to_string()))
}

// ======================================================
// Unit Tests
// ======================================================
