// src/command/edit.rs

use crate::command_state::*;
use crate::context::AppCtx;
use crate::error::{AppError, AppResult};
use crate::exporter::{self, ExportArtifact};
use crate::fields;
use crate::image_load::{self, ImageReadDone, ImageTarget, RequestToken};
use crate::portfolio::PortfolioRecord;
use crate::types::{AppState, EditMode};

use std::path::PathBuf;
use std::sync::mpsc::Sender;

/// The only write path into the draft. Returns false if nothing is loaded.
pub fn update_draft<F>(state: &AppState, mutator: F) -> AppResult<bool>
where
    F: FnOnce(PortfolioRecord) -> PortfolioRecord,
{
    require_mode(state, EditMode::Editing)?;
    Ok(lock_store(state)?.update_draft(mutator))
}

/// Exports the draft, then commits it. If the export fails nothing is
/// committed and the session stays in `Editing`.
pub fn save_changes(state: &AppState, ctx: &AppCtx) -> AppResult<ExportArtifact> {
    require_mode(state, EditMode::Editing)?;

    let draft = lock_store(state)?
        .draft()
        .cloned()
        .ok_or(AppError::NoRecordLoaded)?;

    let artifact = match exporter::export(&draft, &ctx.export_dir) {
        Ok(a) => a,
        Err(e) => {
            log::error!("save aborted, edit session kept open: {e}");
            return Err(e);
        }
    };

    lock_store(state)?.commit_draft()?;
    return_to_viewing(state)?;

    log::info!("portfolio saved to {}", artifact.path.display());
    Ok(artifact)
}

/// Discards the draft. A second call with no edits in between does nothing.
pub fn cancel_edits(state: &AppState) -> AppResult<()> {
    if current_mode(state)? != EditMode::Editing {
        return Ok(());
    }

    lock_store(state)?.reset_draft();
    return_to_viewing(state)?;

    log::info!("edits discarded");
    Ok(())
}

// ======================================================
// image fields
// ======================================================

/// Starts an asynchronous read of `path` for `target`. Any earlier request
/// for the same field becomes stale.
pub fn begin_image_read(
    state: &AppState,
    target: ImageTarget,
    path: PathBuf,
    tx: Sender<ImageReadDone>,
) -> AppResult<RequestToken> {
    require_mode(state, EditMode::Editing)?;

    let token = lock_image_requests(state)?.begin(target);
    log::debug!("image read #{token} for {target:?} from {}", path.display());
    image_load::spawn_read(path, target, token, tx);
    Ok(token)
}

/// Applies a finished image read if it is still the latest request for its
/// field and the edit session is still open. Returns whether it was applied.
pub fn apply_image_read(state: &AppState, done: ImageReadDone) -> AppResult<bool> {
    let current = lock_image_requests(state)?.finish(done.target, done.token);
    if !current {
        log::debug!("dropping stale image read #{} for {:?}", done.token, done.target);
        return Ok(false);
    }

    if current_mode(state)? != EditMode::Editing {
        return Ok(false);
    }

    let uri = done.result?;
    Ok(lock_store(state)?.update_draft(fields::set_image(done.target, uri)))
}

// ======================================================
// Unit Tests
// ======================================================
