// src/exporter.rs

use crate::error::{AppError, AppResult};
use crate::portfolio::{PortfolioRecord, PORTFOLIO_FILE_NAME};

use rand::rngs::OsRng;
use rand::RngCore;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// The file produced by a successful save.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub path: PathBuf,
    pub json: String,
}

/// Two-space indented JSON in the same shape as the input document.
pub fn serialize_pretty(record: &PortfolioRecord) -> AppResult<String> {
    serde_json::to_string_pretty(record).map_err(|e| AppError::ExportSerialize(e.to_string()))
}

/// Serializes and writes `portfolio.json` into `dir`. One shot, no retry.
pub fn export(record: &PortfolioRecord, dir: &Path) -> AppResult<ExportArtifact> {
    let json = serialize_pretty(record)?;
    let path = dir.join(PORTFOLIO_FILE_NAME);
    write_atomic(&path, json.as_bytes())?;
    Ok(ExportArtifact { path, json })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> AppResult<()> {
    let parent = path
        .parent()
        .ok_or_else(|| AppError::ExportWriteFailed("invalid export path".to_string()))?;

    let mut rnd = [0u8; 12];
    OsRng.fill_bytes(&mut rnd);
    let tmp = parent.join(format!(".portfolio.{}.tmp", hex::encode(rnd)));

    let mut f = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&tmp)
        .map_err(|e| AppError::ExportWriteFailed(e.to_string()))?;

    let write_res: AppResult<()> = (|| {
        f.write_all(bytes)
            .map_err(|e| AppError::ExportWriteFailed(e.to_string()))?;
        f.flush()
            .map_err(|e| AppError::ExportWriteFailed(e.to_string()))?;
        f.sync_all()
            .map_err(|e| AppError::ExportWriteFailed(e.to_string()))?;

        fs::rename(&tmp, path).map_err(|e| AppError::ExportRenameFailed(e.to_string()))?;
        Ok(())
    })();

    if write_res.is_err() {
        let _ = fs::remove_file(&tmp);
    }

    write_res
}

// ======================================================
// Unit Tests
// ======================================================
