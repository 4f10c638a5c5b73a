// src/main.rs

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;

use portfolio_editor_lib::command;
use portfolio_editor_lib::context::AppCtx;
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let ctx = AppCtx::from_env();

    if let Err(e) = std::fs::create_dir_all(&ctx.export_dir) {
        // Save reports the failure again when it is attempted
        log::warn!(
            "could not create export dir {}: {e}",
            ctx.export_dir.display()
        );
    }

    let state = Arc::new(portfolio_editor_lib::init_state());

    // failures are logged and kept in the store; the UI shows them instead of the page
    let _ = command::load_portfolio(state.as_ref(), &ctx);

    let ctx = Arc::new(ctx);

    eframe::run_native(
        "Portfolio",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(ui::UiApp::new(state.clone(), ctx.clone())))),
    )
}
