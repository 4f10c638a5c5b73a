// src/context.rs

use directories::ProjectDirs;
use std::path::PathBuf;

use crate::portfolio::PORTFOLIO_FILE_NAME;

pub const APP_QUALIFIER: &str = "org";
pub const APP_ORG: &str = "portfolio-editor";
pub const APP_ID: &str = "portfolio-editor";

pub const ENV_PORTFOLIO_JSON: &str = "PORTFOLIO_JSON";
pub const ENV_EXPORT_DIR: &str = "PORTFOLIO_EXPORT_DIR";
pub const ENV_DEBUG: &str = "PORTFOLIO_DEBUG";

#[derive(Debug, Clone)]
pub struct AppCtx {
    /// Input document read once at startup.
    pub portfolio_path: PathBuf,

    /// Where Save writes `portfolio.json`.
    pub export_dir: PathBuf,

    pub debug_ui: bool,
}

impl AppCtx {
    pub fn new(portfolio_path: PathBuf, export_dir: PathBuf) -> Self {
        let debug_ui = std::env::var(ENV_DEBUG)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            portfolio_path,
            export_dir,
            debug_ui,
        }
    }

    pub fn from_env() -> Self {
        let portfolio_path = std::env::var(ENV_PORTFOLIO_JSON)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(PORTFOLIO_FILE_NAME));

        let export_dir = if let Ok(p) = std::env::var(ENV_EXPORT_DIR) {
            PathBuf::from(p)
        } else if let Some(proj) = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_ID) {
            proj.data_dir().join("exports")
        } else {
            PathBuf::from(".")
        };

        Self::new(portfolio_path, export_dir)
    }
}
